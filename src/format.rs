//! LZO1X instruction format
//!
//! Constants shared by the encoder and the decoder. A compressed stream is a
//! sequence of literal runs and matches; the control byte ranges select one
//! of four match encodings:
//!
//! | Control byte | Name | Max distance | Length field |
//! |---|---|---|---|
//! | `64..=255` | M2 | 2048 | 3 bits |
//! | `32..=63` | M3 | 16384 | 5 bits + continuation |
//! | `16..=31` | M4 | 49151 | 3 bits + continuation |
//! | `0..=15` | M1 | 3072 / 1024 | implicit |
//!
//! The stream is terminated by [`END_MARKER`], an M4 match with a zero offset.

/// Smallest control byte of an M2 match
pub const M2_MARKER: u8 = 64;

/// Control byte bits of an M3 match
pub const M3_MARKER: u8 = 32;

/// Control byte bits of an M4 match
pub const M4_MARKER: u8 = 16;

/// Longest match that fits an M2 instruction
pub const M2_MAX_LEN: usize = 8;

/// Longest match with an inline M3 length
pub const M3_MAX_LEN: usize = 33;

/// Longest match with an inline M4 length
pub const M4_MAX_LEN: usize = 9;

/// Farthest distance reachable by an M1 match that follows chained literals
pub const M1_MAX_OFFSET: usize = 0x0400;

/// Farthest distance reachable by an M2 match
pub const M2_MAX_OFFSET: usize = 0x0800;

/// Farthest distance reachable by an M3 match
pub const M3_MAX_OFFSET: usize = 0x4000;

/// Farthest distance reachable by an M4 match
pub const M4_MAX_OFFSET: usize = 0xBFFF;

/// Minimum length of an encoder match
pub const MIN_MATCH_LENGTH: usize = 4;

/// Literal runs up to this length get a single literal-length byte
pub const MAX_SHORT_LITERAL_RUN: usize = 18;

/// Literal runs this short are packed into the previous match's trailing bits
pub const MAX_CHAINED_LITERALS: usize = 3;

/// Bias of a leading `17 + n` initial literal-length byte
pub const INITIAL_LITERAL_BIAS: u8 = 17;

/// Longest run that can use the initial literal-length byte
pub const MAX_INITIAL_LITERAL_RUN: usize = 238;

/// Stream terminator
pub const END_MARKER: [u8; 3] = [17, 0, 0];

/// Input bytes processed per dictionary lifetime
pub const COMPRESS_BLOCK_SIZE: usize = 49152;

/// Bytes at the end of a block the match finder never scans
pub const BLOCK_SCAN_MARGIN: usize = 20;

/// Number of dictionary slots (14-bit hash)
pub const DICTIONARY_SIZE: usize = 1 << 14;

/// Worst-case compressed size for an input of `len` bytes
pub const fn compress_worst_size(len: usize) -> usize {
    len + len.div_ceil(16) + 64 + 3
}

/// Append a continuation-encoded remainder
///
/// Writes one zero byte for every full 255 above the remainder, then the
/// non-zero remainder itself. `remainder` must be at least 1.
pub(crate) fn continuation_bytes(mut remainder: usize, mut put: impl FnMut(u8)) {
    while remainder > 255 {
        remainder -= 255;
        put(0);
    }
    put(remainder as u8);
}
