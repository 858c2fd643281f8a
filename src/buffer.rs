//! Growable output buffer
//!
//! Both directions write into an [`OutputBuffer`]. The decoder grows it
//! through [`OutputBuffer::reserve`]: before any write that would pass the
//! capacity, the buffer is reallocated to the next multiple of the block size
//! at or above the required size, keeping the bytes already written. When
//! that multiple overflows or cannot be allocated, the buffer grows to
//! exactly the required size instead; only when that fails too is an error
//! returned.
//!
//! The encoder presizes its buffer to the worst-case compressed size, so its
//! writes never reallocate.

use crate::common::{BlockSize, LzoError, Result};
use crate::format::continuation_bytes;

/// Output buffer with block-granular growth
///
/// Back-patching written bytes is reserved to the encoder:
///
/// ```compile_fail
/// let mut out = lzo::buffer::OutputBuffer::new(lzo::BlockSize::default(), 0);
/// out.or_at(1, 3);
/// ```
#[derive(Debug)]
pub struct OutputBuffer {
    data: Vec<u8>,
    block_size: usize,
}

impl OutputBuffer {
    /// Create a buffer with the given initial capacity
    pub fn new(block_size: BlockSize, capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            block_size: block_size.get(),
        }
    }

    /// Number of bytes written
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether nothing has been written yet
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current capacity in bytes
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Written bytes
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Make room for `additional` more bytes
    #[inline]
    pub fn reserve(&mut self, additional: usize) -> Result<()> {
        let required = self
            .len()
            .checked_add(additional)
            .ok_or(LzoError::OutputTooLarge {
                requested: usize::MAX,
            })?;
        if required > self.capacity() {
            self.grow(required)?;
        }
        Ok(())
    }

    #[cold]
    fn grow(&mut self, required: usize) -> Result<()> {
        let len = self.len();
        let rounded = required
            .checked_next_multiple_of(self.block_size)
            .filter(|&target| self.data.try_reserve_exact(target - len).is_ok());

        match rounded {
            Some(target) => log::trace!(
                "Grew output buffer to {} bytes for {} required",
                target,
                required
            ),
            None => {
                self.data
                    .try_reserve_exact(required - len)
                    .map_err(|_| LzoError::OutputTooLarge {
                        requested: required,
                    })?;
                log::trace!(
                    "Grew output buffer to exactly {} bytes, block multiple unavailable",
                    required
                );
            }
        }
        Ok(())
    }

    /// Append one byte
    #[inline]
    pub fn push(&mut self, byte: u8) {
        self.data.push(byte);
    }

    /// Append a run of bytes
    pub fn extend_from_slice(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    /// Append a run of bytes, growing in block-size steps
    pub fn try_extend_from_slice(&mut self, bytes: &[u8]) -> Result<()> {
        self.reserve(bytes.len())?;
        self.data.extend_from_slice(bytes);
        Ok(())
    }

    /// Append a continuation-encoded length remainder
    pub fn push_continuation(&mut self, remainder: usize) {
        continuation_bytes(remainder, |byte| self.push(byte));
    }

    /// OR `bits` into the byte written `back` positions before the end
    ///
    /// Used to pack a short literal count into the trailing bits of the
    /// previous match instruction.
    pub(crate) fn or_at(&mut self, back: usize, bits: u8) {
        let index = self.len() - back;
        self.data[index] |= bits;
    }

    /// Copy `length` bytes starting `distance` bytes behind the write position
    ///
    /// The source may overlap the bytes being written, in which case the copy
    /// repeats the pattern as it goes.
    pub fn copy_match(&mut self, distance: usize, length: usize) -> Result<()> {
        let available = self.len();
        if distance == 0 || distance > available {
            return Err(LzoError::InvalidDistance {
                distance,
                available,
            });
        }

        self.reserve(length)?;
        let start = available - distance;
        if distance >= length {
            self.data.extend_from_within(start..start + length);
        } else {
            for i in start..start + length {
                let byte = self.data[i];
                self.data.push(byte);
            }
        }
        Ok(())
    }

    /// Take the written bytes
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}
