// libnfctag/src/protocol/commands/reader.rs

use crate::constants::{ACR_BUZZER_OFF, ACR_CONTROL_CODE};

/// Reader escape command, sent through `SCardControl` on a Direct
/// connection rather than transmitted to a tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlCommand {
    pub code: u32,
    pub bytes: Vec<u8>,
}

/// ACR1581 "buzzer off": `E0 00 00 21 01 01` with control code 3500.
pub fn encode_buzzer_off() -> ControlCommand {
    ControlCommand {
        code: ACR_CONTROL_CODE,
        bytes: ACR_BUZZER_OFF.to_vec(),
    }
}
