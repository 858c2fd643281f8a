//! Instruction encoding
//!
//! Emits literal runs, matches and the end marker into the output buffer.

use super::state::EncoderState;
use crate::format::{
    END_MARKER, INITIAL_LITERAL_BIAS, M2_MAX_LEN, M2_MAX_OFFSET, M3_MARKER, M3_MAX_LEN,
    M3_MAX_OFFSET, M4_MARKER, M4_MAX_LEN, MAX_CHAINED_LITERALS, MAX_INITIAL_LITERAL_RUN,
    MAX_SHORT_LITERAL_RUN,
};

impl EncoderState<'_> {
    /// Emit the literal bytes `input[from..to]`
    ///
    /// Runs of 1-3 bytes are announced through the trailing bits of the
    /// previous match instruction, which must exist.
    pub(crate) fn emit_literal_run(&mut self, from: usize, to: usize) {
        let count = to - from;
        if count == 0 {
            return;
        }

        if count <= MAX_CHAINED_LITERALS {
            self.out.or_at(2, count as u8);
        } else if count <= MAX_SHORT_LITERAL_RUN {
            self.out.push((count - 3) as u8);
        } else {
            self.out.push(0);
            self.out.push_continuation(count - MAX_SHORT_LITERAL_RUN);
        }

        self.out.extend_from_slice(&self.input[from..to]);
        self.stats.record_literals(count);
    }

    /// Emit a match of `length` bytes at backward `distance`
    pub(crate) fn emit_match(&mut self, length: usize, distance: usize) {
        if length <= M2_MAX_LEN && distance <= M2_MAX_OFFSET {
            let offset = distance - 1;
            self.out
                .push((((length - 1) << 5) | ((offset & 7) << 2)) as u8);
            self.out.push((offset >> 3) as u8);
        } else if distance <= M3_MAX_OFFSET {
            let offset = distance - 1;
            if length <= M3_MAX_LEN {
                self.out.push(M3_MARKER | (length - 2) as u8);
            } else {
                self.out.push(M3_MARKER);
                self.out.push_continuation(length - M3_MAX_LEN);
            }
            self.out.push((offset << 2) as u8);
            self.out.push((offset >> 6) as u8);
        } else {
            let offset = distance - M3_MAX_OFFSET;
            let far = ((offset >> 11) & 8) as u8;
            if length <= M4_MAX_LEN {
                self.out.push(M4_MARKER | far | (length - 2) as u8);
            } else {
                self.out.push(M4_MARKER | far);
                self.out.push_continuation(length - M4_MAX_LEN);
            }
            self.out.push((offset << 2) as u8);
            self.out.push((offset >> 6) as u8);
        }

        self.stats.record_match(length);
    }

    /// Emit the last `count` input bytes as the trailing literal run
    pub(crate) fn emit_final_literals(&mut self, count: usize) {
        if count == 0 {
            return;
        }

        let from = self.input.len() - count;
        if self.out.is_empty() && count <= MAX_INITIAL_LITERAL_RUN {
            self.out.push(INITIAL_LITERAL_BIAS + count as u8);
            self.out.extend_from_slice(&self.input[from..]);
            self.stats.record_literals(count);
        } else {
            self.emit_literal_run(from, self.input.len());
        }
    }

    /// Terminate the stream
    pub(crate) fn emit_end_marker(&mut self) {
        self.out.extend_from_slice(&END_MARKER);
    }
}
