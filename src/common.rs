//! Common types and constants for the LZO1X-1 codec
//!
//! This module defines the error type, the block size configuration and the
//! statistics structure shared by the compression and decompression paths.

use std::num::NonZeroUsize;
use thiserror::Error;

/// Default reallocation granularity of the output buffer (128KB)
pub const DEFAULT_BLOCK_SIZE: usize = 128 * 1024;

/// Capacity the output buffer starts with (256KB)
pub const INITIAL_OUTPUT_CAPACITY: usize = 256 * 1024;

/// Reallocation granularity for the growable output buffer
///
/// The block size only controls how the output buffer grows. It never
/// changes the bytes produced by compression or decompression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockSize(NonZeroUsize);

impl BlockSize {
    /// Create a block size, rejecting zero
    pub fn new(bytes: usize) -> Result<Self> {
        NonZeroUsize::new(bytes)
            .map(BlockSize)
            .ok_or(LzoError::InvalidBlockSize(0))
    }

    /// Get the block size in bytes
    pub fn get(&self) -> usize {
        self.0.get()
    }
}

impl Default for BlockSize {
    fn default() -> Self {
        match NonZeroUsize::new(DEFAULT_BLOCK_SIZE) {
            Some(size) => BlockSize(size),
            None => unreachable!("default block size is non-zero"),
        }
    }
}

impl TryFrom<usize> for BlockSize {
    type Error = LzoError;

    fn try_from(bytes: usize) -> Result<Self> {
        BlockSize::new(bytes)
    }
}

impl TryFrom<i64> for BlockSize {
    type Error = LzoError;

    fn try_from(bytes: i64) -> Result<Self> {
        if bytes <= 0 {
            return Err(LzoError::InvalidBlockSize(bytes));
        }
        let bytes = usize::try_from(bytes).map_err(|_| LzoError::InvalidBlockSize(bytes))?;
        BlockSize::new(bytes)
    }
}

/// Error type for LZO operations
#[derive(Debug, Error)]
pub enum LzoError {
    /// Block size must be a positive integer
    #[error("Invalid block size: {0} (must be a positive integer)")]
    InvalidBlockSize(i64),

    /// The compressed stream ended before the end marker was decoded
    #[error("Corrupt stream: unexpected end of input at offset {position}")]
    UnexpectedEof {
        /// Input offset of the byte that could not be read
        position: usize,
    },

    /// A match referenced bytes before the start of the output
    #[error("Corrupt stream: match distance {distance} exceeds {available} decoded bytes")]
    InvalidDistance {
        /// Backward distance requested by the match
        distance: usize,
        /// Number of bytes decoded so far
        available: usize,
    },

    /// The output buffer could not grow to the requested size
    #[error("Output of {requested} bytes cannot be allocated")]
    OutputTooLarge {
        /// Total output size that was needed
        requested: usize,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LzoError {
    /// Whether this error means the compressed input is truncated or malformed
    pub fn is_corrupt_stream(&self) -> bool {
        matches!(
            self,
            LzoError::UnexpectedEof { .. } | LzoError::InvalidDistance { .. }
        )
    }
}

/// Result type alias for LZO operations
pub type Result<T> = std::result::Result<T, LzoError>;

/// Statistics for compression/decompression operations
#[derive(Debug, Default, Clone)]
pub struct CompressionStats {
    /// Number of literal bytes encoded/decoded
    pub literal_count: usize,
    /// Number of matches encoded/decoded
    pub match_count: usize,
    /// Longest match found
    pub longest_match: usize,
    /// Uncompressed size in bytes
    pub input_bytes: u64,
    /// Compressed size in bytes
    pub output_bytes: u64,
    /// Compression ratio (compressed/original)
    pub compression_ratio: f64,
}

impl CompressionStats {
    pub(crate) fn record_literals(&mut self, count: usize) {
        self.literal_count += count;
    }

    pub(crate) fn record_match(&mut self, length: usize) {
        self.match_count += 1;
        self.longest_match = self.longest_match.max(length);
    }

    /// Fill in sizes and ratio once a call has finished
    pub(crate) fn finish(&mut self, uncompressed: usize, compressed: usize) {
        self.input_bytes = uncompressed as u64;
        self.output_bytes = compressed as u64;
        self.compression_ratio = if uncompressed > 0 {
            compressed as f64 / uncompressed as f64
        } else {
            0.0
        };
    }
}
