//! Error type for streaming encode sessions.

use thiserror::Error;

/// Error returned by the streaming encoder.
///
/// The codec itself cannot fail; every variant comes either from the byte
/// source/sink or from rejected configuration.
#[derive(Error, Debug)]
pub enum EncodeError {
    /// Reading from the source or writing to the sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The plaintext buffer size must be at least one byte.
    #[error("invalid buffer size: {0}")]
    InvalidBufferSize(usize),
}
