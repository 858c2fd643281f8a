//! Configured codec handle
//!
//! [`Lzo`] carries the only tunable of the codec, the output buffer block
//! size. Every call on it builds a fresh encoder or decoder context, so one
//! handle can be shared freely between threads.

use crate::common::{BlockSize, CompressionStats, Result};
use crate::{compress, decompress};

/// LZO1X-1 codec with a configurable output block size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lzo {
    block_size: BlockSize,
}

impl Lzo {
    /// Create a codec with the default 128KB block size
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a codec with the given block size
    pub fn with_block_size(bytes: usize) -> Result<Self> {
        Ok(Self {
            block_size: BlockSize::new(bytes)?,
        })
    }

    /// Current block size in bytes
    pub fn block_size(&self) -> usize {
        self.block_size.get()
    }

    /// Change the block size, rejecting zero
    ///
    /// On error the previous block size is kept.
    pub fn set_block_size(&mut self, bytes: usize) -> Result<()> {
        self.block_size = BlockSize::new(bytes)?;
        Ok(())
    }

    /// Compress a complete buffer
    pub fn compress(&self, data: impl AsRef<[u8]>) -> Vec<u8> {
        compress::compress_bytes(data.as_ref(), self.block_size)
    }

    /// Compress a complete buffer and report statistics
    pub fn compress_with_stats(&self, data: impl AsRef<[u8]>) -> (Vec<u8>, CompressionStats) {
        compress::compress_with_stats(data.as_ref(), self.block_size)
    }

    /// Decompress a complete LZO1X stream
    pub fn decompress(&self, data: impl AsRef<[u8]>) -> Result<Vec<u8>> {
        decompress::decompress_bytes(data.as_ref(), self.block_size)
    }

    /// Decompress a complete LZO1X stream and report statistics
    pub fn decompress_with_stats(
        &self,
        data: impl AsRef<[u8]>,
    ) -> Result<(Vec<u8>, CompressionStats)> {
        decompress::decompress_with_stats(data.as_ref(), self.block_size)
    }
}

impl From<BlockSize> for Lzo {
    fn from(block_size: BlockSize) -> Self {
        Self { block_size }
    }
}
