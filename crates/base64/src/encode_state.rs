//! Progress of an encoding session within the current 3-byte group.

use crate::encode_block::{encode_block, encode_blockend};

/// Position within the current group of three input bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Next byte starts a new group.
    A,
    /// Next byte is the second of its group.
    B,
    /// Next byte is the last of its group.
    C,
}

/// Encoder state carried between [`encode_block`] calls.
///
/// `residual` holds the bits of the last consumed byte that have not been
/// emitted yet, already shifted into position for the next output character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EncodeState {
    /// No pending bits.
    #[default]
    StepA,
    /// Two pending bits.
    StepB {
        /// `(b1 & 0x03) << 4`
        residual: u8,
    },
    /// Four pending bits.
    StepC {
        /// `(b2 & 0x0F) << 2`
        residual: u8,
    },
}

/// Characters produced by the first `consumed` bytes of a session, before
/// finalization.
const fn chars_through(consumed: usize) -> usize {
    (consumed / 3) * 4 + consumed % 3
}

impl EncodeState {
    /// Creates the initial state.
    pub const fn new() -> Self {
        EncodeState::StepA
    }

    /// Returns to the initial state so the value can start a new session.
    pub fn reset(&mut self) {
        *self = EncodeState::StepA;
    }

    /// Position within the current 3-byte group.
    pub const fn step(&self) -> Step {
        match self {
            EncodeState::StepA => Step::A,
            EncodeState::StepB { .. } => Step::B,
            EncodeState::StepC { .. } => Step::C,
        }
    }

    /// The stashed residual, or `None` when no bits are pending.
    pub const fn residual(&self) -> Option<u8> {
        match *self {
            EncodeState::StepA => None,
            EncodeState::StepB { residual } | EncodeState::StepC { residual } => Some(residual),
        }
    }

    /// Number of input bits consumed but not yet emitted.
    pub const fn pending_bits(&self) -> u32 {
        match self {
            EncodeState::StepA => 0,
            EncodeState::StepB { .. } => 2,
            EncodeState::StepC { .. } => 4,
        }
    }

    const fn group_offset(&self) -> usize {
        match self {
            EncodeState::StepA => 0,
            EncodeState::StepB { .. } => 1,
            EncodeState::StepC { .. } => 2,
        }
    }

    /// Exact number of characters [`encode_block`] produces for `len` bytes
    /// starting from this state.
    pub const fn block_len(&self, len: usize) -> usize {
        let offset = self.group_offset();
        chars_through(offset + len) - chars_through(offset)
    }

    /// Largest [`block_len`](Self::block_len) over every possible state.
    pub const fn max_block_len(len: usize) -> usize {
        let a = EncodeState::StepA.block_len(len);
        let b = EncodeState::StepB { residual: 0 }.block_len(len);
        let c = EncodeState::StepC { residual: 0 }.block_len(len);
        let ab = if a > b { a } else { b };
        if ab > c {
            ab
        } else {
            c
        }
    }

    /// Exact number of characters [`encode_blockend`] produces from this state.
    pub const fn end_len(&self) -> usize {
        match self {
            EncodeState::StepA => 0,
            EncodeState::StepB { .. } => 3,
            EncodeState::StepC { .. } => 2,
        }
    }

    /// See [`encode_block`].
    pub fn encode_block(&mut self, input: &[u8], out: &mut [u8]) -> usize {
        encode_block(input, out, self)
    }

    /// See [`encode_blockend`].
    pub fn encode_blockend(&self, out: &mut [u8]) -> usize {
        encode_blockend(out, self)
    }

    /// Encodes `input` and appends the characters to `out`.
    pub fn encode_block_to_vec(&mut self, input: &[u8], out: &mut Vec<u8>) -> usize {
        let start = out.len();
        out.resize(start + self.block_len(input.len()), 0);
        encode_block(input, &mut out[start..], self)
    }

    /// Appends the trailing character and padding to `out`.
    pub fn encode_blockend_to_vec(&self, out: &mut Vec<u8>) -> usize {
        let start = out.len();
        out.resize(start + self.end_len(), 0);
        encode_blockend(&mut out[start..], self)
    }
}
