//! Error handling for LZO operations
//!
//! This module defines the error types used throughout the codec. It uses
//! thiserror for ergonomic error handling. Truncated and malformed streams
//! both report a corrupt-stream variant, see [`LzoError::is_corrupt_stream`].

pub use crate::common::LzoError;
pub use crate::common::Result;
