//! Streaming driver: pulls fixed-size chunks from a reader, encodes them and
//! pushes the text to a writer.

use std::io::{self, Read, Write};

use tracing::{debug, trace};

use crate::constants::DEFAULT_BUFFER_SIZE;
use crate::encode_block::{encode_block, encode_blockend, encode_value};
use crate::encode_chunks::EncodeChunks;
use crate::encode_state::EncodeState;
use crate::EncodeError;

/// Tunables for [`Encoder`].
///
/// The buffer size only changes how many read/write round trips a session
/// takes; the produced text is the same for any value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderConfig {
    buffer_size: usize,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl EncoderConfig {
    /// Creates a config with the given plaintext buffer size.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::InvalidBufferSize`] if `buffer_size` is zero.
    pub fn new(buffer_size: usize) -> Result<Self, EncodeError> {
        if buffer_size == 0 {
            return Err(EncodeError::InvalidBufferSize(buffer_size));
        }
        Ok(Self { buffer_size })
    }

    /// Number of plaintext bytes read per chunk.
    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// Capacity of a code buffer that can hold one full chunk plus
    /// finalization from any state.
    pub(crate) fn code_capacity(&self) -> usize {
        EncodeState::max_block_len(self.buffer_size).max(3)
    }
}

/// Totals for one [`Encoder::encode`] session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeStats {
    /// Plaintext bytes consumed from the source.
    pub bytes_read: u64,
    /// Base64 characters written to the sink, padding included.
    pub bytes_written: u64,
    /// Number of reads from the source, including the final empty or short one.
    pub chunks: usize,
}

/// Reusable streaming base64 encoder.
///
/// Owns one [`EncodeState`] and two buffers that are allocated once and reused
/// for every session.
///
/// # Example
///
/// ```
/// use stream_base64::Encoder;
///
/// let mut encoder = Encoder::new();
/// let mut out = Vec::new();
/// encoder.encode(&b"hello world"[..], &mut out).unwrap();
/// assert_eq!(out, b"aGVsbG8gd29ybGQ=");
/// ```
#[derive(Debug)]
pub struct Encoder {
    config: EncoderConfig,
    state: EncodeState,
    plaintext: Vec<u8>,
    code: Vec<u8>,
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder {
    /// Creates an encoder with the default 64 KiB buffer.
    pub fn new() -> Self {
        Self::with_config(EncoderConfig::default())
    }

    /// Creates an encoder and allocates its buffers for `config`.
    pub fn with_config(config: EncoderConfig) -> Self {
        Self {
            config,
            state: EncodeState::new(),
            plaintext: vec![0; config.buffer_size()],
            code: vec![0; config.code_capacity()],
        }
    }

    /// Creates an encoder that reads `buffer_size` bytes per chunk.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::InvalidBufferSize`] if `buffer_size` is zero.
    pub fn with_buffer_size(buffer_size: usize) -> Result<Self, EncodeError> {
        Ok(Self::with_config(EncoderConfig::new(buffer_size)?))
    }

    /// Number of plaintext bytes read per chunk.
    pub fn buffer_size(&self) -> usize {
        self.config.buffer_size()
    }

    /// Config the buffers were allocated for.
    pub fn config(&self) -> EncoderConfig {
        self.config
    }

    /// Current codec state; [`EncodeState::StepA`] between sessions.
    pub fn state(&self) -> &EncodeState {
        &self.state
    }

    /// Discards any pending bits so a new input can start.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// See [`encode_value`].
    pub fn encode_value(&self, value: u8) -> u8 {
        encode_value(value)
    }

    /// Encodes one block with the encoder's own state. See [`encode_block`].
    pub fn encode_block(&mut self, input: &[u8], out: &mut [u8]) -> usize {
        encode_block(input, out, &mut self.state)
    }

    /// Writes padding for the blocks fed so far. See [`encode_blockend`].
    ///
    /// Call [`reset`](Self::reset) before feeding a new input.
    pub fn encode_end(&mut self, out: &mut [u8]) -> usize {
        encode_blockend(out, &self.state)
    }

    /// Encodes everything `source` yields into `sink`.
    ///
    /// The state is reinitialized at the start and at the end of the session,
    /// so the encoder can be reused for an unrelated stream afterwards. I/O
    /// errors are returned as-is and end the session; nothing is retried.
    pub fn encode<R, W>(&mut self, mut source: R, mut sink: W) -> Result<EncodeStats, EncodeError>
    where
        R: Read,
        W: Write,
    {
        self.state.reset();
        let mut stats = EncodeStats::default();

        loop {
            let read = fill_buffer(&mut source, &mut self.plaintext)?;
            let written = encode_block(&self.plaintext[..read], &mut self.code, &mut self.state);
            sink.write_all(&self.code[..written])?;

            stats.bytes_read += read as u64;
            stats.bytes_written += written as u64;
            stats.chunks += 1;
            trace!(read, written, state = ?self.state, "encoded chunk");

            // A short fill means the source is exhausted.
            if read < self.plaintext.len() {
                break;
            }
        }

        let written = encode_blockend(&mut self.code, &self.state);
        sink.write_all(&self.code[..written])?;
        sink.flush()?;
        stats.bytes_written += written as u64;
        self.state.reset();

        debug!(
            bytes_read = stats.bytes_read,
            bytes_written = stats.bytes_written,
            chunks = stats.chunks,
            "base64 encode session finished"
        );
        Ok(stats)
    }

    /// Encodes `source` into a new buffer.
    pub fn encode_to_vec<R: Read>(&mut self, source: R) -> Result<Vec<u8>, EncodeError> {
        let mut out = Vec::new();
        self.encode(source, &mut out)?;
        Ok(out)
    }

    /// Encodes `source` into a new string.
    pub fn encode_to_string<R: Read>(&mut self, source: R) -> Result<String, EncodeError> {
        let out = self.encode_to_vec(source)?;
        Ok(out.into_iter().map(char::from).collect())
    }

    /// Lazily encodes `source` chunk by chunk using this encoder's config.
    pub fn chunks<R: Read>(&self, source: R) -> EncodeChunks<R> {
        EncodeChunks::with_config(source, self.config)
    }
}

/// Reads until `buf` is full or the source reports end-of-data.
pub(crate) fn fill_buffer<R: Read>(source: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match source.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
