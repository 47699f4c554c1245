// libnfctag/src/protocol/buffer.rs

use crate::constants::RESPONSE_BUFFER_CAPACITY;
use crate::{Error, Result};

/// Fixed-capacity receive buffer reused across exchanges.
///
/// Capacity is a constant of the type and never changes; the number of
/// bytes the last exchange produced lives in a separate `len` field. A
/// transport therefore always sees the full capacity, no matter how short
/// the previous response was.
pub struct ResponseBuffer {
    data: Box<[u8; RESPONSE_BUFFER_CAPACITY]>,
    len: usize,
}

impl ResponseBuffer {
    pub const CAPACITY: usize = RESPONSE_BUFFER_CAPACITY;

    pub fn new() -> Self {
        Self {
            data: Box::new([0u8; RESPONSE_BUFFER_CAPACITY]),
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        Self::CAPACITY
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Zero the whole buffer so a stale trailing `90 00` from an earlier
    /// exchange can never be read as part of the next one.
    pub fn clear(&mut self) {
        self.data.fill(0);
        self.len = 0;
        log::trace!("response buffer reset to all zeroes");
    }

    /// Clear, then hand the full-capacity slice to `fill`, which returns how
    /// many bytes it wrote.
    pub fn fill_with<F>(&mut self, fill: F) -> Result<&[u8]>
    where
        F: FnOnce(&mut [u8]) -> Result<usize>,
    {
        self.clear();
        let received = fill(&mut self.data[..])?;
        if received > Self::CAPACITY {
            return Err(Error::InsufficientBuffer {
                needed: received,
                capacity: Self::CAPACITY,
            });
        }
        self.len = received;
        Ok(self.received())
    }

    /// Bytes produced by the last fill.
    pub fn received(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// The whole buffer regardless of `len`; only used to check that stale
    /// data has been wiped.
    pub fn raw(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Default for ResponseBuffer {
    fn default() -> Self {
        Self::new()
    }
}
