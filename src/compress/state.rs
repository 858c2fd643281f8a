//! Compression state management
//!
//! Everything one compression call mutates lives in [`EncoderState`]: the
//! output buffer, the dictionary and the literal bytes carried between
//! blocks. Nothing outlives the call.

use super::hash::Dictionary;
use crate::buffer::OutputBuffer;
use crate::common::{BlockSize, CompressionStats, INITIAL_OUTPUT_CAPACITY};
use crate::format::compress_worst_size;

/// Compression context for one call
#[derive(Debug)]
pub(crate) struct EncoderState<'a> {
    /// Uncompressed input
    pub(crate) input: &'a [u8],
    /// Compressed output
    pub(crate) out: OutputBuffer,
    /// Match-finder dictionary
    pub(crate) dictionary: Dictionary,
    /// Literal bytes not yet emitted, ending at the current block start
    pub(crate) pending: usize,
    /// Counters collected while encoding
    pub(crate) stats: CompressionStats,
}

impl<'a> EncoderState<'a> {
    /// Create a new compression state for `input`
    pub(crate) fn new(input: &'a [u8], block_size: BlockSize) -> Self {
        let capacity = INITIAL_OUTPUT_CAPACITY.max(compress_worst_size(input.len()));
        Self {
            input,
            out: OutputBuffer::new(block_size, capacity),
            dictionary: Dictionary::new(),
            pending: 0,
            stats: CompressionStats::default(),
        }
    }

    /// Four input bytes starting at `pos`
    #[inline]
    pub(crate) fn quad(&self, pos: usize) -> [u8; 4] {
        [
            self.input[pos],
            self.input[pos + 1],
            self.input[pos + 2],
            self.input[pos + 3],
        ]
    }
}
