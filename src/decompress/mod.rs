//! LZO1X decompression
//!
//! The decoder walks the instruction stream with an explicit state machine
//! (see [`DecodeStep`]) and writes into a growable output buffer. Decoding
//! stops at the end marker; a stream that runs out before it, or that
//! references bytes before the start of the output, is rejected.

mod decoder;
mod state;

pub use decoder::MatchOutcome;
pub use state::{DecodeStep, DecoderState};

use crate::common::{BlockSize, CompressionStats, Result};

/// Decompress a complete LZO1X stream
pub fn decompress_bytes(data: &[u8], block_size: BlockSize) -> Result<Vec<u8>> {
    decompress_with_stats(data, block_size).map(|(output, _)| output)
}

/// Decompress a complete LZO1X stream and collect statistics
pub fn decompress_with_stats(
    data: &[u8],
    block_size: BlockSize,
) -> Result<(Vec<u8>, CompressionStats)> {
    let mut state = DecoderState::new(data, block_size);

    let mut step = state.begin()?;
    loop {
        step = match step {
            DecodeStep::Instruction => state.instruction()?,
            DecodeStep::AfterLiteral => state.after_literal()?,
            DecodeStep::Match(control) => state.matched(control)?,
            DecodeStep::Done => break,
        };
    }

    if state.remaining() > 0 {
        log::debug!(
            "Ignoring {} bytes after the end marker",
            state.remaining()
        );
    }

    let mut stats = state.stats;
    stats.finish(state.out.len(), data.len());
    log::debug!(
        "Decompressed {} bytes into {} bytes ({} matches)",
        data.len(),
        state.out.len(),
        stats.match_count
    );

    Ok((state.out.into_vec(), stats))
}
