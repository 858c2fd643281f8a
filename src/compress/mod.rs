//! LZO1X-1 compression
//!
//! The input is processed in blocks of up to 49152 bytes, each with a freshly
//! cleared dictionary. Literal bytes left at the end of a block carry over
//! into the next one; whatever is left at the end becomes the trailing
//! literal run, followed by the end marker.
//!
//! The per-block encoder state is internal; [`compress_bytes`] and
//! [`compress_with_stats`] are the entry points.
//!
//! ```compile_fail
//! let state = lzo::compress::EncoderState::new(b"data", lzo::BlockSize::default());
//! ```

mod hash;
mod pattern;
mod state;
mod writer;

pub use hash::hash4;

use state::EncoderState;

use crate::common::{BlockSize, CompressionStats};
use crate::format::{BLOCK_SCAN_MARGIN, COMPRESS_BLOCK_SIZE};

/// Compress a complete buffer
pub fn compress_bytes(data: &[u8], block_size: BlockSize) -> Vec<u8> {
    compress_with_stats(data, block_size).0
}

/// Compress a complete buffer and collect statistics
pub fn compress_with_stats(data: &[u8], block_size: BlockSize) -> (Vec<u8>, CompressionStats) {
    let mut state = EncoderState::new(data, block_size);
    let mut block_start = 0;
    let mut remaining = data.len();

    while remaining > BLOCK_SCAN_MARGIN {
        let block_len = remaining.min(COMPRESS_BLOCK_SIZE);
        if (state.pending + block_len) >> 5 == 0 {
            break;
        }

        log::trace!(
            "Compressing block at {} ({} bytes, {} pending literals)",
            block_start,
            block_len,
            state.pending
        );
        state.compress_block(block_start, block_len);

        block_start += block_len;
        remaining -= block_len;
    }

    let trailing = state.pending + remaining;
    state.emit_final_literals(trailing);
    state.emit_end_marker();

    let mut stats = state.stats;
    stats.finish(data.len(), state.out.len());
    log::debug!(
        "Compressed {} bytes into {} bytes ({} matches)",
        data.len(),
        state.out.len(),
        stats.match_count
    );

    (state.out.into_vec(), stats)
}
