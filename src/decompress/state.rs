//! Decompression state management
//!
//! The decoder is a small state machine. [`DecodeStep`] names the state,
//! [`DecoderState`] holds the cursors and buffers of one call.

use crate::buffer::OutputBuffer;
use crate::common::{BlockSize, CompressionStats, LzoError, Result, INITIAL_OUTPUT_CAPACITY};

/// What the decoder expects next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStep {
    /// A literal-length control byte, or a match control byte when >= 16
    Instruction,
    /// A literal run of 4+ bytes was copied; a control byte < 16 is a 3-byte match
    AfterLiteral,
    /// A match control byte was read
    Match(u8),
    /// The end marker was decoded
    Done,
}

/// Decompression context for one call
#[derive(Debug)]
pub struct DecoderState<'a> {
    /// Compressed input
    pub input: &'a [u8],
    /// Current position in the input
    pub in_pos: usize,
    /// Decoded bytes
    pub out: OutputBuffer,
    /// Counters collected while decoding
    pub stats: CompressionStats,
}

impl<'a> DecoderState<'a> {
    /// Create a new decompression state over a complete compressed buffer
    pub fn new(input: &'a [u8], block_size: BlockSize) -> Self {
        Self {
            input,
            in_pos: 0,
            out: OutputBuffer::new(block_size, INITIAL_OUTPUT_CAPACITY),
            stats: CompressionStats::default(),
        }
    }

    /// Peek at the next input byte without consuming it
    pub fn peek_byte(&self) -> Result<u8> {
        self.input
            .get(self.in_pos)
            .copied()
            .ok_or(LzoError::UnexpectedEof {
                position: self.in_pos,
            })
    }

    /// Consume the next input byte
    pub fn read_byte(&mut self) -> Result<u8> {
        let byte = self.peek_byte()?;
        self.in_pos += 1;
        Ok(byte)
    }

    /// Consume the next `count` input bytes
    pub fn take(&mut self, count: usize) -> Result<&'a [u8]> {
        let end = self
            .in_pos
            .checked_add(count)
            .filter(|&end| end <= self.input.len())
            .ok_or(LzoError::UnexpectedEof {
                position: self.input.len(),
            })?;
        let input = self.input;
        let bytes = &input[self.in_pos..end];
        self.in_pos = end;
        Ok(bytes)
    }

    /// Number of input bytes not consumed yet
    pub fn remaining(&self) -> usize {
        self.input.len() - self.in_pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_reads() {
        let data = [1u8, 2, 3];
        let mut state = DecoderState::new(&data, BlockSize::default());

        assert_eq!(state.peek_byte().unwrap(), 1);
        assert_eq!(state.read_byte().unwrap(), 1);
        assert_eq!(state.take(2).unwrap(), &[2, 3]);
        assert_eq!(state.remaining(), 0);

        assert!(matches!(
            state.read_byte(),
            Err(LzoError::UnexpectedEof { position: 3 })
        ));
        assert!(state.take(1).is_err());
        assert!(state.take(0).unwrap().is_empty());
    }
}
