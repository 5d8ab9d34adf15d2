//! One-shot encoding of an in-memory slice.

use crate::encode_state::EncodeState;

/// Length of the padded base64 text for `len` input bytes.
pub const fn encoded_len(len: usize) -> usize {
    len.div_ceil(3) * 4
}

/// Encodes a byte slice to a standard base64 string.
///
/// # Example
///
/// ```
/// use stream_base64::to_base64;
///
/// let encoded = to_base64(b"hello world");
/// assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
/// ```
pub fn to_base64(uint8: &[u8]) -> String {
    let mut state = EncodeState::new();
    let mut out = Vec::with_capacity(encoded_len(uint8.len()));
    state.encode_block_to_vec(uint8, &mut out);
    state.encode_blockend_to_vec(&mut out);
    out.into_iter().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(to_base64(b""), "");
    }

    #[test]
    fn test_various_lengths() {
        assert_eq!(to_base64(b"f"), "Zg==");
        assert_eq!(to_base64(b"fo"), "Zm8=");
        assert_eq!(to_base64(b"foo"), "Zm9v");
        assert_eq!(to_base64(b"foob"), "Zm9vYg==");
        assert_eq!(to_base64(b"fooba"), "Zm9vYmE=");
        assert_eq!(to_base64(b"foobar"), "Zm9vYmFy");
    }

    #[test]
    fn test_encoded_len() {
        assert_eq!(encoded_len(0), 0);
        assert_eq!(encoded_len(1), 4);
        assert_eq!(encoded_len(3), 4);
        assert_eq!(encoded_len(4), 8);
        for len in 0..64 {
            let data = vec![0xA5; len];
            assert_eq!(to_base64(&data).len(), encoded_len(len));
        }
    }

    #[test]
    fn test_every_byte_value_matches_reference() {
        use base64::engine::general_purpose::STANDARD;
        use base64::Engine;

        let data: Vec<u8> = (0..=255).collect();
        for len in [data.len(), data.len() - 1, data.len() - 2] {
            let slice = &data[..len];
            assert_eq!(to_base64(slice), STANDARD.encode(slice), "length {len}");
        }
        let reversed: Vec<u8> = data.iter().rev().copied().collect();
        assert_eq!(to_base64(&reversed), STANDARD.encode(&reversed));
    }
}
