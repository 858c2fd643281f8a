//! lzo - Rust implementation of the LZO1X-1 compression format
//!
//! This crate provides a pure Rust encoder and decoder for LZO1X-1: a
//! single-pass, hash-assisted LZ77 matcher with a compact byte-oriented
//! instruction encoding. Compression favors speed over ratio; decompression
//! is a simple state machine over the instruction stream.
//!
//! # Features
//!
//! - Compression with the LZO1X-1 greedy matcher (49152-byte blocks,
//!   16384-slot dictionary)
//! - Decompression with bounds checks on every read and back-reference
//! - Configurable output buffer growth granularity
//! - Optional async helpers and batch processing (`async` feature)
//!
//! Each call works on a complete in-memory buffer; there is no streaming
//! state between calls.
//!
//! # Example
//!
//! ```
//! use lzo::{compress, decompress};
//!
//! let data = b"Hello, World! Hello, World! Hello, World!";
//! let compressed = compress(data);
//! let decompressed = decompress(&compressed)?;
//! assert_eq!(&decompressed[..], &data[..]);
//! # Ok::<(), lzo::LzoError>(())
//! ```
//!
//! # Example - Block size
//!
//! ```
//! use lzo::Lzo;
//!
//! let mut lzo = Lzo::new();
//! lzo.set_block_size(64 * 1024)?;
//! assert!(lzo.set_block_size(0).is_err());
//!
//! let compressed = lzo.compress("some text");
//! assert_eq!(lzo.decompress(&compressed)?, b"some text");
//! # Ok::<(), lzo::LzoError>(())
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

// Public modules
pub mod buffer;
pub mod codec;
pub mod common;
pub mod compress;
pub mod decompress;
pub mod error;
pub mod format;

// Async modules (only available with async feature)
#[cfg(feature = "async")]
pub mod async_batch;
#[cfg(feature = "async")]
pub mod async_convenience;

// Re-export commonly used types
pub use codec::Lzo;
pub use common::{
    BlockSize, CompressionStats, LzoError, Result, DEFAULT_BLOCK_SIZE, INITIAL_OUTPUT_CAPACITY,
};
pub use format::{compress_worst_size, END_MARKER};

// Re-export async types when async feature is enabled
#[cfg(feature = "async")]
pub use async_batch::AsyncBatchProcessor;
#[cfg(feature = "async")]
pub use async_convenience::*;

// Convenience functions

/// Compress data using LZO1X-1 with the default block size
///
/// # Arguments
/// * `data` - The data to compress: bytes, a vector, an array or text
///
/// # Returns
/// A vector containing the compressed stream
pub fn compress(data: impl AsRef<[u8]>) -> Vec<u8> {
    compress::compress_bytes(data.as_ref(), BlockSize::default())
}

/// Decompress an LZO1X stream with the default block size
///
/// # Arguments
/// * `data` - The compressed stream
///
/// # Returns
/// A vector containing the decompressed data, or a corrupt-stream error
pub fn decompress(data: impl AsRef<[u8]>) -> Result<Vec<u8>> {
    decompress::decompress_bytes(data.as_ref(), BlockSize::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reexports() {
        // Test that common types are accessible
        let _ = Lzo::new();
        let _ = BlockSize::default();
        assert_eq!(END_MARKER, [17, 0, 0]);

        // Test that functions are accessible
        let data = b"test";
        assert_eq!(decompress(compress(data)).unwrap(), data);
    }
}
