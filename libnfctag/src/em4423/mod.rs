// libnfctag/src/em4423/mod.rs

//! EM4423 paged memory: 99 pages of 4 bytes, user memory at 0x04..=0x3F.

mod memory;
pub mod operations;

pub use memory::Em4423Memory;

use crate::ndef::TextRecord;
use crate::session::{Connected, Session};
use crate::types::PageData;
use crate::Result;

/// EM4423 view over a connected session.
pub struct Em4423<'a> {
    session: &'a mut Session<Connected>,
}

impl<'a> Em4423<'a> {
    pub fn new(session: &'a mut Session<Connected>) -> Self {
        Self { session }
    }

    pub fn write_page(&mut self, page: u8, data: impl Into<PageData>) -> Result<()> {
        operations::write_page(self.session, page, data.into())
    }

    pub fn read_page(&mut self, page: u8) -> Result<PageData> {
        operations::read_page(self.session, page)
    }

    pub fn fast_read(&mut self) -> Result<Em4423Memory> {
        operations::fast_read(self.session)
    }

    pub fn write_user_memory(&mut self, start_page: u8, bytes: &[u8]) -> Result<usize> {
        operations::write_user_memory(self.session, start_page, bytes)
    }

    pub fn write_ndef_text(&mut self, text: &[u8]) -> Result<usize> {
        operations::write_ndef_text(self.session, text)
    }

    pub fn read_ndef_text(&mut self) -> Result<TextRecord> {
        operations::read_ndef_text(self.session)
    }
}
