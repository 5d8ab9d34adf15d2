//! Push-based adapter: an [`io::Write`] that base64-encodes into another writer.

use std::io::{self, Write};

use tracing::debug;

use crate::encode_state::EncodeState;

const INNER_PRESENT: &str = "inner writer is present until finish";

/// Encodes every byte written to it and forwards the text to `W`.
///
/// Call [`finish`](Self::finish) to emit padding and get the inner writer
/// back. Dropping an unfinished writer finishes it and discards any error.
///
/// # Example
///
/// ```
/// use std::io::Write;
/// use stream_base64::EncoderWriter;
///
/// let mut writer = EncoderWriter::new(Vec::new());
/// writer.write_all(b"foo").unwrap();
/// writer.write_all(b"ba").unwrap();
/// let out = writer.finish().unwrap();
/// assert_eq!(out, b"Zm9vYmE=");
/// ```
#[derive(Debug)]
pub struct EncoderWriter<W: Write> {
    // Only taken by `finish` and `drop`.
    inner: Option<W>,
    state: EncodeState,
    code: Vec<u8>,
}

impl<W: Write> EncoderWriter<W> {
    /// Wraps `inner`; nothing is written until the first `write`.
    pub fn new(inner: W) -> Self {
        Self {
            inner: Some(inner),
            state: EncodeState::new(),
            code: Vec::new(),
        }
    }

    /// State carried into the next `write`.
    pub fn state(&self) -> &EncodeState {
        &self.state
    }

    /// Writes the final character and padding, flushes, and returns the inner
    /// writer.
    pub fn finish(mut self) -> io::Result<W> {
        let mut inner = self.inner.take().expect(INNER_PRESENT);
        write_end(&mut self.state, &mut inner)?;
        Ok(inner)
    }
}

fn write_end<W: Write>(state: &mut EncodeState, inner: &mut W) -> io::Result<()> {
    let mut tail = [0u8; 4];
    let len = state.encode_blockend(&mut tail);
    state.reset();
    inner.write_all(&tail[..len])?;
    inner.flush()
}

impl<W: Write> Write for EncoderWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.code.clear();
        self.state.encode_block_to_vec(buf, &mut self.code);
        let inner = self.inner.as_mut().expect(INNER_PRESENT);
        inner.write_all(&self.code)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.as_mut().expect(INNER_PRESENT).flush()
    }
}

impl<W: Write> Drop for EncoderWriter<W> {
    fn drop(&mut self) {
        if let Some(mut inner) = self.inner.take() {
            if let Err(err) = write_end(&mut self.state, &mut inner) {
                debug!(%err, "failed to finish base64 writer on drop");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_pads() {
        let mut writer = EncoderWriter::new(Vec::new());
        writer.write_all(b"f").unwrap();
        assert_eq!(writer.finish().unwrap(), b"Zg==");
    }

    #[test]
    fn nothing_written_yields_nothing() {
        let writer = EncoderWriter::new(Vec::new());
        assert!(writer.finish().unwrap().is_empty());
    }

    #[test]
    fn drop_finishes() {
        let mut out = Vec::new();
        {
            let mut writer = EncoderWriter::new(&mut out);
            writer.write_all(b"fo").unwrap();
        }
        assert_eq!(out, b"Zm8=");
    }

    /// Accepts `budget` bytes, then fails every write.
    #[derive(Debug)]
    struct Limited {
        written: Vec<u8>,
        budget: usize,
        flushes: usize,
    }

    impl Write for Limited {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.budget == 0 {
                return Err(io::Error::new(io::ErrorKind::WriteZero, "full"));
            }
            let n = buf.len().min(self.budget);
            self.written.extend_from_slice(&buf[..n]);
            self.budget -= n;
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn flush_reaches_inner() {
        let mut writer = EncoderWriter::new(Limited {
            written: Vec::new(),
            budget: usize::MAX,
            flushes: 0,
        });
        writer.write_all(b"foo").unwrap();
        writer.flush().unwrap();
        let inner = writer.finish().unwrap();
        assert_eq!(inner.written, b"Zm9v");
        assert_eq!(inner.flushes, 2);
    }

    #[test]
    fn inner_errors_surface_from_write_and_finish() {
        let mut writer = EncoderWriter::new(Limited {
            written: Vec::new(),
            budget: 2,
            flushes: 0,
        });
        let err = writer.write_all(b"foo").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::WriteZero);
        // Dropping a writer whose inner sink fails must not panic.
        drop(writer);

        let mut writer = EncoderWriter::new(Limited {
            written: Vec::new(),
            budget: 5,
            flushes: 0,
        });
        writer.write_all(b"foof").unwrap();
        let err = writer.finish().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::WriteZero);
    }

    #[test]
    fn text_is_forwarded_as_written() {
        let mut out = Vec::new();
        let mut writer = EncoderWriter::new(&mut out);
        writer.write_all(b"fo").unwrap();
        assert_eq!(writer.state().pending_bits(), 4);
        writer.write_all(b"o").unwrap();
        writer.finish().unwrap();
        assert_eq!(out, b"Zm9v");
    }
}
