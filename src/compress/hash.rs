//! Match-finder dictionary
//!
//! A single-slot hash table: each 14-bit hash of four input bytes maps to the
//! most recent block-relative offset that produced it. A new occurrence
//! overwrites the old one. Missing a match only costs ratio, never
//! correctness.

use crate::format::DICTIONARY_SIZE;

/// Hash four input bytes into a dictionary slot index
#[inline]
pub fn hash4(bytes: [u8; 4]) -> usize {
    let lo = u16::from_le_bytes([bytes[0], bytes[1]]) as u32;
    let hi = u16::from_le_bytes([bytes[2], bytes[3]]) as u32;
    let mixed = ((lo * 0x429d) >> 16) + hi * 0x429d + lo * 0x1824;
    ((mixed & 0xffff) >> 2) as usize
}

/// Encoder dictionary, reset at the start of every block
#[derive(Debug, Clone)]
pub(crate) struct Dictionary {
    slots: Vec<u32>,
}

impl Dictionary {
    /// Create an empty dictionary
    pub(crate) fn new() -> Self {
        Self {
            slots: vec![0; DICTIONARY_SIZE],
        }
    }

    /// Reset every slot to offset 0
    pub(crate) fn clear(&mut self) {
        self.slots.fill(0);
    }

    /// Store `offset` in `slot` and return the offset it replaces
    #[inline]
    pub(crate) fn replace(&mut self, slot: usize, offset: u32) -> u32 {
        std::mem::replace(&mut self.slots[slot], offset)
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}
