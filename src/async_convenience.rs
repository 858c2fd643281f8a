//! Async convenience functions
//!
//! This module provides easy-to-use async functions for common compression
//! and decompression operations. Every call still works on a complete buffer;
//! the codec itself runs on tokio's blocking pool so it never stalls the
//! async executor.

#[cfg(feature = "async")]
/// Whole-buffer and whole-file async operations
pub mod functions {
    use crate::{CompressionStats, Lzo, LzoError, Result};
    use bytes::Bytes;
    use std::path::Path;

    /// Run one codec call on the blocking thread pool
    async fn run_blocking<T, F>(job: F) -> Result<T>
    where
        F: FnOnce() -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        tokio::task::spawn_blocking(job)
            .await
            .map_err(|e| LzoError::Io(std::io::Error::other(e)))?
    }

    /// Compress data from bytes
    pub async fn compress_async(data: Bytes, lzo: Lzo) -> Result<Bytes> {
        run_blocking(move || Ok(Bytes::from(lzo.compress(&data)))).await
    }

    /// Decompress data from bytes
    pub async fn decompress_async(data: Bytes, lzo: Lzo) -> Result<Bytes> {
        run_blocking(move || lzo.decompress(&data).map(Bytes::from)).await
    }

    /// Compress a file asynchronously
    pub async fn compress_file<P1: AsRef<Path>, P2: AsRef<Path>>(
        input_path: P1,
        output_path: P2,
        lzo: Lzo,
    ) -> Result<CompressionStats> {
        let data = tokio::fs::read(input_path).await?;
        let (compressed, stats) = run_blocking(move || Ok(lzo.compress_with_stats(&data))).await?;
        tokio::fs::write(output_path, compressed).await?;
        Ok(stats)
    }

    /// Decompress a file asynchronously
    pub async fn decompress_file<P1: AsRef<Path>, P2: AsRef<Path>>(
        input_path: P1,
        output_path: P2,
        lzo: Lzo,
    ) -> Result<CompressionStats> {
        let data = tokio::fs::read(input_path).await?;
        let (decompressed, stats) = run_blocking(move || lzo.decompress_with_stats(&data)).await?;
        tokio::fs::write(output_path, decompressed).await?;
        Ok(stats)
    }
}

#[cfg(feature = "async")]
pub use functions::*;
