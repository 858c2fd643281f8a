//! Async batch processing module
//!
//! This module provides concurrent processing of many independent buffers
//! or files. Every item is a separate codec call with its own state, so the
//! items never share anything but the configuration.

#[cfg(feature = "async")]
/// Concurrent buffer and file processing with a configurable concurrency limit
pub mod processor {
    use crate::async_convenience::{compress_async, decompress_async};
    use crate::{Lzo, Result};
    use bytes::Bytes;
    use futures::stream::{self, StreamExt, TryStreamExt};
    use std::path::{Path, PathBuf};

    /// Concurrent batch processor
    #[derive(Debug, Clone)]
    pub struct AsyncBatchProcessor {
        concurrency_limit: usize,
        lzo: Lzo,
    }

    impl AsyncBatchProcessor {
        /// Create a new batch processor with default settings
        pub fn new() -> Self {
            Self {
                concurrency_limit: num_cpus::get(),
                lzo: Lzo::new(),
            }
        }

        /// Set the concurrency limit
        pub fn with_concurrency(mut self, limit: usize) -> Self {
            self.concurrency_limit = limit.max(1);
            self
        }

        /// Set the codec configuration used for every item
        pub fn with_codec(mut self, lzo: Lzo) -> Self {
            self.lzo = lzo;
            self
        }

        /// Compress buffers concurrently, keeping the input order
        pub async fn compress_buffers(&self, buffers: Vec<Bytes>) -> Result<Vec<Bytes>> {
            let lzo = self.lzo;
            stream::iter(buffers)
                .map(move |data| compress_async(data, lzo))
                .buffered(self.concurrency_limit)
                .try_collect()
                .await
        }

        /// Decompress buffers concurrently, keeping the input order
        ///
        /// Fails with the first error encountered.
        pub async fn decompress_buffers(&self, buffers: Vec<Bytes>) -> Result<Vec<Bytes>> {
            let lzo = self.lzo;
            stream::iter(buffers)
                .map(move |data| decompress_async(data, lzo))
                .buffered(self.concurrency_limit)
                .try_collect()
                .await
        }

        /// Compress multiple files concurrently
        pub async fn compress_files<P: AsRef<Path> + Send + Sync>(
            &self,
            files: Vec<P>,
        ) -> Result<Vec<(PathBuf, Bytes)>> {
            let results = stream::iter(files.into_iter().map(|path| {
                let lzo = self.lzo;
                async move {
                    let path = path.as_ref().to_path_buf();
                    let data = tokio::fs::read(&path).await?;
                    let compressed = compress_async(Bytes::from(data), lzo).await?;
                    log::debug!("Compressed {}", path.display());
                    Ok::<_, crate::LzoError>((path, compressed))
                }
            }))
            .buffer_unordered(self.concurrency_limit)
            .try_collect::<Vec<_>>()
            .await?;

            Ok(results)
        }

        /// Decompress multiple files concurrently
        pub async fn decompress_files<P: AsRef<Path> + Send + Sync>(
            &self,
            files: Vec<P>,
        ) -> Result<Vec<(PathBuf, Bytes)>> {
            let results = stream::iter(files.into_iter().map(|path| {
                let lzo = self.lzo;
                async move {
                    let path = path.as_ref().to_path_buf();
                    let data = tokio::fs::read(&path).await?;
                    let decompressed = decompress_async(Bytes::from(data), lzo).await?;
                    log::debug!("Decompressed {}", path.display());
                    Ok::<_, crate::LzoError>((path, decompressed))
                }
            }))
            .buffer_unordered(self.concurrency_limit)
            .try_collect::<Vec<_>>()
            .await?;

            Ok(results)
        }
    }

    impl Default for AsyncBatchProcessor {
        fn default() -> Self {
            Self::new()
        }
    }
}

#[cfg(feature = "async")]
pub use processor::AsyncBatchProcessor;
