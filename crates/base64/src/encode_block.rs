//! Re-entrant block encoding over [`EncodeState`].

use crate::constants::{ALPHABET_BYTES, PAD};
use crate::encode_state::EncodeState;

/// Maps a 6-bit value to its alphabet character.
///
/// Callers mask to 6 bits; larger values are a contract violation.
#[inline]
pub fn encode_value(value: u8) -> u8 {
    debug_assert!(value < 64, "base64 value out of range: {value}");
    ALPHABET_BYTES[(value & 0x3F) as usize]
}

/// Encodes `input` into the front of `out`, returning the number of
/// characters written.
///
/// No padding is emitted. The group boundary may fall anywhere: whatever bits
/// are left over stay in `state` and are picked up by the next call, so any
/// chunking of a byte stream yields the same characters as a single call.
///
/// # Panics
///
/// Panics if `out` is shorter than `state.block_len(input.len())`.
///
/// # Example
///
/// ```
/// use stream_base64::{encode_block, encode_blockend, EncodeState};
///
/// let mut state = EncodeState::new();
/// let mut out = [0u8; 16];
/// let mut len = encode_block(b"fo", &mut out, &mut state);
/// len += encode_block(b"ob", &mut out[len..], &mut state);
/// len += encode_blockend(&mut out[len..], &state);
/// assert_eq!(&out[..len], b"Zm9vYg==");
/// ```
pub fn encode_block(input: &[u8], out: &mut [u8], state: &mut EncodeState) -> usize {
    let needed = state.block_len(input.len());
    assert!(
        out.len() >= needed,
        "output buffer too small: need {needed}, have {}",
        out.len()
    );

    let mut offset = 0;
    for &byte in input {
        *state = match *state {
            EncodeState::StepA => {
                out[offset] = encode_value(byte >> 2);
                offset += 1;
                EncodeState::StepB {
                    residual: (byte & 0x03) << 4,
                }
            }
            EncodeState::StepB { residual } => {
                out[offset] = encode_value(residual | (byte >> 4));
                offset += 1;
                EncodeState::StepC {
                    residual: (byte & 0x0F) << 2,
                }
            }
            EncodeState::StepC { residual } => {
                out[offset] = encode_value(residual | (byte >> 6));
                out[offset + 1] = encode_value(byte & 0x3F);
                offset += 2;
                EncodeState::StepA
            }
        };
    }
    offset
}

/// Writes the last character and padding for a finished session, returning
/// the number of bytes written.
///
/// The state is left untouched; reset it before starting another session.
///
/// # Panics
///
/// Panics if `out` is shorter than `state.end_len()`.
pub fn encode_blockend(out: &mut [u8], state: &EncodeState) -> usize {
    let needed = state.end_len();
    assert!(
        out.len() >= needed,
        "output buffer too small: need {needed}, have {}",
        out.len()
    );

    match *state {
        EncodeState::StepA => 0,
        EncodeState::StepB { residual } => {
            out[0] = encode_value(residual);
            out[1] = PAD;
            out[2] = PAD;
            3
        }
        EncodeState::StepC { residual } => {
            out[0] = encode_value(residual);
            out[1] = PAD;
            2
        }
    }
}
