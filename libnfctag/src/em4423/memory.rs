// libnfctag/src/em4423/memory.rs

use std::fmt;

use crate::constants::{
    EM4423_FIRST_USER_PAGE, EM4423_LAST_USER_PAGE, EM4423_PAGE_COUNT, EM4423_PAGE_SIZE,
};
use crate::protocol::parser::{ensure_len, page_at};
use crate::types::PageData;
use crate::Result;

/// Snapshot of all 99 pages, as returned by one fast-read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Em4423Memory {
    pages: [PageData; EM4423_PAGE_COUNT],
}

impl Em4423Memory {
    /// Number of bytes a full snapshot covers (0x018C).
    pub const BYTES: usize = EM4423_PAGE_COUNT * EM4423_PAGE_SIZE;

    /// Build from the first 396 bytes of `bytes`; anything after that is
    /// ignored.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        ensure_len(bytes, Self::BYTES)?;
        let mut pages = [PageData::default(); EM4423_PAGE_COUNT];
        for (i, page) in pages.iter_mut().enumerate() {
            *page = page_at(bytes, i * EM4423_PAGE_SIZE)?;
        }
        Ok(Self { pages })
    }

    pub fn page(&self, page: u8) -> Option<&PageData> {
        self.pages.get(page as usize)
    }

    pub fn pages(&self) -> &[PageData] {
        &self.pages
    }

    /// Pages 0x04..=0x3F concatenated.
    pub fn user_memory(&self) -> Vec<u8> {
        self.pages[EM4423_FIRST_USER_PAGE as usize..=EM4423_LAST_USER_PAGE as usize]
            .iter()
            .flat_map(|p| p.as_bytes().iter().copied())
            .collect()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.pages
            .iter()
            .flat_map(|p| p.as_bytes().iter().copied())
            .collect()
    }
}

/// One `[Page 0xNN]\t0xAA  0xBB  0xCC  0xDD` line per page.
impl fmt::Display for Em4423Memory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, page) in self.pages.iter().enumerate() {
            let [a, b, c, d] = *page.as_bytes();
            writeln!(
                f,
                "[Page 0x{:02X}]\t0x{:02X}  0x{:02X}  0x{:02X}  0x{:02X}",
                i, a, b, c, d
            )?;
        }
        Ok(())
    }
}
