//! Greedy match search
//!
//! One pass over a block: hash the four bytes at the scan position, check
//! the dictionary candidate, and on a hit flush the pending literals, extend
//! the match and emit it. Misses advance faster the longer the current
//! literal run gets.

use super::hash::hash4;
use super::state::EncoderState;
use crate::format::{BLOCK_SCAN_MARGIN, MIN_MATCH_LENGTH};

/// Length of the match at `pos` against `candidate`, stopping at `scan_end`
///
/// The first [`MIN_MATCH_LENGTH`] bytes are already known to be equal.
pub(crate) fn match_length(input: &[u8], pos: usize, candidate: usize, scan_end: usize) -> usize {
    let mut length = MIN_MATCH_LENGTH;
    while input[pos + length] == input[candidate + length] {
        length += 1;
        if input[pos + length] != input[candidate + length] || pos + length >= scan_end {
            break;
        }
    }
    length
}

impl EncoderState<'_> {
    /// Compress the block `[start, start + len)`
    ///
    /// `len` must exceed [`BLOCK_SCAN_MARGIN`]. Literal bytes left over at the
    /// end of the block are carried in `self.pending` for the next block or
    /// the final flush.
    pub(crate) fn compress_block(&mut self, start: usize, len: usize) {
        let scan_end = start + len - BLOCK_SCAN_MARGIN;
        let mut carried = self.pending;
        let mut run_start = start;
        let mut pos = start;

        self.dictionary.clear();

        if carried < 4 {
            pos += 4 - carried;
        }
        pos += 1 + ((pos - run_start) >> 5);

        while pos < scan_end {
            let bytes = self.quad(pos);
            let offset = (pos - start) as u32;
            let candidate = start + self.dictionary.replace(hash4(bytes), offset) as usize;

            if self.quad(candidate) != bytes {
                pos += 1 + ((pos - run_start) >> 5);
                continue;
            }

            run_start -= carried;
            carried = 0;
            self.emit_literal_run(run_start, pos);

            let length = match_length(self.input, pos, candidate, scan_end);
            let distance = pos - candidate;
            pos += length;
            run_start = pos;

            self.emit_match(length, distance);
        }

        self.pending = start + len + carried - run_start;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::BlockSize;

    #[test]
    fn test_match_length_stops_at_mismatch() {
        let input = b"abcdefgh__abcdefxy______________";
        assert_eq!(match_length(input, 10, 0, 30), 6);
    }

    #[test]
    fn test_match_length_stops_at_scan_end() {
        let input = [7u8; 64];
        assert_eq!(match_length(&input, 10, 9, 20), 10);
    }

    #[test]
    fn test_block_without_matches_carries_everything() {
        let input: Vec<u8> = (0..64u8).collect();
        let mut state = EncoderState::new(&input, BlockSize::default());
        state.compress_block(0, input.len());

        assert!(state.out.is_empty());
        assert_eq!(state.pending, 64);
    }

    #[test]
    fn test_block_with_run_emits_match() {
        let input = [0u8; 100];
        let mut state = EncoderState::new(&input, BlockSize::default());
        state.compress_block(0, input.len());

        // Five literals, then one match running up to the scan limit.
        assert_eq!(state.stats.literal_count, 5);
        assert_eq!(state.stats.match_count, 1);
        assert_eq!(state.pending, 100 - 5 - state.stats.longest_match);
    }
}
