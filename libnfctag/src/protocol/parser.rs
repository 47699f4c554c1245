// libnfctag/src/protocol/parser.rs

use crate::types::PageData;
use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Parse one 4-byte page at `start` index with bounds checking.
pub fn page_at(data: &[u8], start: usize) -> Result<PageData> {
    let s = slice_at(data, start, crate::constants::EM4423_PAGE_SIZE)?;
    PageData::try_from(s)
}

/// True if `data` begins with `prefix`; short slices simply do not match.
pub fn has_prefix(data: &[u8], prefix: &[u8]) -> bool {
    data.get(..prefix.len()) == Some(prefix)
}
