//! Instruction decoding
//!
//! Each state of [`DecodeStep`] has one transition function here. Every input
//! read goes through the bounds-checked accessors of [`DecoderState`] and
//! every back-reference through [`OutputBuffer::copy_match`], so a malformed
//! stream ends in an error rather than a panic.
//!
//! [`OutputBuffer::copy_match`]: crate::buffer::OutputBuffer::copy_match

use super::state::{DecodeStep, DecoderState};
use crate::format::{
    INITIAL_LITERAL_BIAS, M2_MARKER, M2_MAX_OFFSET, M3_MARKER, M3_MAX_OFFSET, M4_MARKER,
};
use crate::Result;

/// Result of decoding one match instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Match copied; carries the trailing literal count (0-3)
    Copied(u8),
    /// The end marker was decoded
    End,
}

impl DecoderState<'_> {
    /// Read a continuation-encoded length
    ///
    /// Every zero byte adds 255, the first non-zero byte ends the sequence
    /// and is added together with `base`.
    pub fn read_length_extension(&mut self, base: usize) -> Result<usize> {
        let mut length = base;
        while self.peek_byte()? == 0 {
            length += 255;
            self.in_pos += 1;
        }
        Ok(length + self.read_byte()? as usize)
    }

    /// Copy `count` literal bytes from the input to the output
    pub fn copy_literals(&mut self, count: usize) -> Result<()> {
        let literals = self.take(count)?;
        self.out.try_extend_from_slice(literals)?;
        self.stats.record_literals(count);
        Ok(())
    }

    /// Entry state: handle the optional initial literal-length byte
    pub fn begin(&mut self) -> Result<DecodeStep> {
        let first = self.peek_byte()?;
        if first <= INITIAL_LITERAL_BIAS {
            return Ok(DecodeStep::Instruction);
        }

        self.in_pos += 1;
        let count = (first - INITIAL_LITERAL_BIAS) as usize;
        self.copy_literals(count)?;
        if count < 4 {
            Ok(DecodeStep::Match(self.read_byte()?))
        } else {
            Ok(DecodeStep::AfterLiteral)
        }
    }

    /// Instruction state: a literal run, or a match when the byte is >= 16
    pub fn instruction(&mut self) -> Result<DecodeStep> {
        let control = self.read_byte()?;
        if control >= M4_MARKER {
            return Ok(DecodeStep::Match(control));
        }

        let count = if control == 0 {
            self.read_length_extension(15)?
        } else {
            control as usize
        };
        self.copy_literals(count + 3)?;
        Ok(DecodeStep::AfterLiteral)
    }

    /// After a literal run, a control byte < 16 is a 3-byte match
    pub fn after_literal(&mut self) -> Result<DecodeStep> {
        let control = self.read_byte()?;
        if control >= M4_MARKER {
            return Ok(DecodeStep::Match(control));
        }

        let high = self.read_byte()? as usize;
        let distance = 1 + M2_MAX_OFFSET + (control as usize >> 2) + (high << 2);
        self.out.copy_match(distance, 3)?;
        self.stats.record_match(3);
        self.follow_match(control & 3)
    }

    /// Match state: decode one match and follow its chain bits
    pub fn matched(&mut self, control: u8) -> Result<DecodeStep> {
        match self.decode_match(control)? {
            MatchOutcome::Copied(trailing) => self.follow_match(trailing),
            MatchOutcome::End => Ok(DecodeStep::Done),
        }
    }

    /// Decode and copy the match introduced by `control`
    pub fn decode_match(&mut self, control: u8) -> Result<MatchOutcome> {
        let t = control as usize;

        let (distance, length, trailing) = if control >= M2_MARKER {
            let high = self.read_byte()? as usize;
            (1 + ((t >> 2) & 7) + (high << 3), (t >> 5) + 1, control)
        } else if control >= M3_MARKER {
            let length = match t & 31 {
                0 => self.read_length_extension(31)?,
                inline => inline,
            };
            let [low, high] = self.read_offset()?;
            let distance = 1 + (low as usize >> 2) + ((high as usize) << 6);
            (distance, length + 2, low)
        } else if control >= M4_MARKER {
            let far = (t & 8) << 11;
            let length = match t & 7 {
                0 => self.read_length_extension(7)?,
                inline => inline,
            };
            let [low, high] = self.read_offset()?;
            let offset = far + (low as usize >> 2) + ((high as usize) << 6);
            if offset == 0 {
                return Ok(MatchOutcome::End);
            }
            (offset + M3_MAX_OFFSET, length + 2, low)
        } else {
            let high = self.read_byte()? as usize;
            (1 + (t >> 2) + (high << 2), 2, control)
        };

        self.out.copy_match(distance, length)?;
        self.stats.record_match(length);
        Ok(MatchOutcome::Copied(trailing & 3))
    }

    /// Two-byte little-endian offset field of an M3/M4 match
    fn read_offset(&mut self) -> Result<[u8; 2]> {
        let bytes = self.take(2)?;
        Ok([bytes[0], bytes[1]])
    }

    /// Chain handling after a match: zero trailing bits return to the
    /// instruction state, otherwise copy that many literals and read the next
    /// match control byte
    fn follow_match(&mut self, trailing: u8) -> Result<DecodeStep> {
        if trailing == 0 {
            return Ok(DecodeStep::Instruction);
        }
        self.copy_literals(trailing as usize)?;
        Ok(DecodeStep::Match(self.read_byte()?))
    }
}
