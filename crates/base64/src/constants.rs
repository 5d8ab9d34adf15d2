/// Standard base64 alphabet.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Standard base64 alphabet as a byte array, indexed by 6-bit value.
pub const ALPHABET_BYTES: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Padding byte.
pub const PAD: u8 = b'=';

/// Default size in bytes of the plaintext buffer used by the streaming encoder.
pub const DEFAULT_BUFFER_SIZE: usize = 65536;
