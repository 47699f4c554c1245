// libnfctag/src/protocol/commands/get_data.rs

use crate::constants::{CLA_PSEUDO, GET_DATA_ATS, GET_DATA_UID, INS_GET_DATA};
use crate::protocol::apdu::CommandFrame;

/// GET DATA for the full UID: `FF CA 00 00 00`. Le = 0x04 would return
/// only the first four UID bytes.
pub fn encode_get_uid() -> CommandFrame {
    CommandFrame::read(CLA_PSEUDO, INS_GET_DATA, GET_DATA_UID, 0x00, 0x00)
}

/// GET DATA for the ISO 14443-4 ATS: `FF CA 01 00 00`
pub fn encode_get_ats() -> CommandFrame {
    CommandFrame::read(CLA_PSEUDO, INS_GET_DATA, GET_DATA_ATS, 0x00, 0x00)
}
