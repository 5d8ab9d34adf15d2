//! Streaming base64 encoding.
//!
//! Standard RFC 4648 alphabet with `=` padding and no line wrapping. Input can
//! be fed in chunks of any size: a small state machine ([`EncodeState`])
//! carries the bits that straddle chunk boundaries, so the output is the same
//! as encoding the whole input at once.
//!
//! Three ways to drive it:
//! - [`Encoder`] pulls from a reader and pushes to a writer with fixed-size
//!   buffers;
//! - [`EncoderWriter`] wraps a writer and encodes whatever is written to it;
//! - [`EncodeChunks`] lazily yields encoded chunks of a reader.
//!
//! # Example
//!
//! ```
//! use stream_base64::{to_base64, Encoder};
//!
//! let mut encoder = Encoder::with_buffer_size(4).unwrap();
//! let encoded = encoder.encode_to_string(&b"hello world"[..]).unwrap();
//! assert_eq!(encoded, to_base64(b"hello world"));
//! ```

#![warn(missing_docs)]

mod constants;
mod encode_block;
mod encode_chunks;
mod encode_state;
mod encoder;
mod encoder_writer;
mod error;
mod to_base64;

pub use constants::{ALPHABET, ALPHABET_BYTES, DEFAULT_BUFFER_SIZE, PAD};
pub use encode_block::{encode_block, encode_blockend, encode_value};
pub use encode_chunks::EncodeChunks;
pub use encode_state::{EncodeState, Step};
pub use encoder::{EncodeStats, Encoder, EncoderConfig};
pub use encoder_writer::EncoderWriter;
pub use error::EncodeError;
pub use to_base64::{encoded_len, to_base64};
