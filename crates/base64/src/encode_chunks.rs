//! Pull-based adapter: lazily yields encoded text one source chunk at a time.

use std::io::Read;
use std::iter::FusedIterator;

use crate::encode_state::EncodeState;
use crate::encoder::{fill_buffer, EncoderConfig};
use crate::EncodeError;

/// Iterator over the base64 text of a reader.
///
/// Each item is the encoding of one buffer-sized read; the last item also
/// carries the padding. Empty items are never yielded, so an empty source
/// yields nothing. After an I/O error the iterator is exhausted.
///
/// # Example
///
/// ```
/// use stream_base64::EncodeChunks;
///
/// let text: Vec<u8> = EncodeChunks::new(&b"foobar"[..])
///     .collect::<Result<Vec<_>, _>>()
///     .unwrap()
///     .concat();
/// assert_eq!(text, b"Zm9vYmFy");
/// ```
#[derive(Debug)]
pub struct EncodeChunks<R> {
    source: R,
    state: EncodeState,
    plaintext: Vec<u8>,
    done: bool,
}

impl<R: Read> EncodeChunks<R> {
    /// Iterates over `source` with the default 64 KiB buffer.
    pub fn new(source: R) -> Self {
        Self::with_config(source, EncoderConfig::default())
    }

    /// Iterates over `source`, reading `config.buffer_size()` bytes per item.
    pub fn with_config(source: R, config: EncoderConfig) -> Self {
        Self {
            source,
            state: EncodeState::new(),
            plaintext: vec![0; config.buffer_size()],
            done: false,
        }
    }

    /// Returns the source; bytes already read and not yet yielded are lost.
    pub fn into_inner(self) -> R {
        self.source
    }
}

impl<R: Read> Iterator for EncodeChunks<R> {
    type Item = Result<Vec<u8>, EncodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let read = match fill_buffer(&mut self.source, &mut self.plaintext) {
            Ok(read) => read,
            Err(err) => {
                self.done = true;
                return Some(Err(err.into()));
            }
        };

        let mut code = Vec::with_capacity(self.state.block_len(read) + 3);
        self.state
            .encode_block_to_vec(&self.plaintext[..read], &mut code);
        if read < self.plaintext.len() {
            self.state.encode_blockend_to_vec(&mut code);
            self.state.reset();
            self.done = true;
        }

        if code.is_empty() {
            // Only reachable on the final read.
            return None;
        }
        Some(Ok(code))
    }
}

impl<R: Read> FusedIterator for EncodeChunks<R> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct Failing;

    impl Read for Failing {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }
    }

    fn chunks_of(data: &[u8], buffer_size: usize) -> Vec<Vec<u8>> {
        let config = EncoderConfig::new(buffer_size).unwrap();
        EncodeChunks::with_config(data, config)
            .collect::<Result<_, _>>()
            .unwrap()
    }

    #[test]
    fn empty_source_yields_nothing() {
        assert!(chunks_of(b"", 4).is_empty());
    }

    #[test]
    fn last_chunk_carries_padding() {
        let chunks = chunks_of(b"hello", 2);
        assert_eq!(
            chunks,
            vec![b"aG".to_vec(), b"Vsb".to_vec(), b"G8=".to_vec()]
        );
    }

    #[test]
    fn padding_only_chunk_after_exact_fill() {
        let chunks = chunks_of(b"f", 1);
        assert_eq!(chunks, vec![b"Z".to_vec(), b"g==".to_vec()]);
    }

    #[test]
    fn error_is_yielded_once() {
        let mut chunks = EncodeChunks::new(Failing);
        assert!(matches!(chunks.next(), Some(Err(EncodeError::Io(_)))));
        assert!(chunks.next().is_none());
    }
}
