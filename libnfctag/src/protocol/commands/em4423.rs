// libnfctag/src/protocol/commands/em4423.rs

use crate::constants::{CLA_PSEUDO, EM4423_PAGE_SIZE, INS_READ_BINARY, INS_UPDATE_BINARY};
use crate::protocol::apdu::CommandFrame;
use crate::types::PageData;

/// READ BINARY for one page: `FF B0 00 <page> 04`
pub fn encode_read_page(page: u8) -> CommandFrame {
    CommandFrame::read(CLA_PSEUDO, INS_READ_BINARY, 0x00, page, EM4423_PAGE_SIZE as u8)
}

/// UPDATE BINARY for one page: `FF D6 00 <page> 04 <d0 d1 d2 d3>`
pub fn encode_write_page(page: u8, data: PageData) -> CommandFrame {
    CommandFrame::with_data(CLA_PSEUDO, INS_UPDATE_BINARY, 0x00, page, data.as_bytes())
}

/// Extended-length READ BINARY from page 0: `FF B0 00 00 00 <len_hi> <len_lo>`
pub fn encode_fast_read(length: u16) -> CommandFrame {
    CommandFrame::read_extended(CLA_PSEUDO, INS_READ_BINARY, 0x00, 0x00, length)
}
