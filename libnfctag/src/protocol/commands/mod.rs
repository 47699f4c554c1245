// libnfctag/src/protocol/commands/mod.rs

pub mod em4423;
pub mod get_data;
pub mod reader;

pub use em4423::{encode_fast_read, encode_read_page, encode_write_page};
pub use get_data::{encode_get_ats, encode_get_uid};
pub use reader::{ControlCommand, encode_buzzer_off};

use crate::protocol::apdu::CommandFrame;
use crate::types::PageData;

/// High-level Command enum. New commands should be added here and
/// their encoder placed in `protocol::commands::<family>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ReadPage { page: u8 },
    WritePage { page: u8, data: PageData },
    FastRead { length: u16 },
    GetUid,
    GetAts,
}

impl Command {
    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ReadPage { .. } => "read page",
            Self::WritePage { .. } => "write page",
            Self::FastRead { .. } => "fast read",
            Self::GetUid => "get uid",
            Self::GetAts => "get ats",
        }
    }

    /// Encode the command into its APDU.
    pub fn encode(&self) -> CommandFrame {
        match self {
            Self::ReadPage { page } => encode_read_page(*page),
            Self::WritePage { page, data } => encode_write_page(*page, *data),
            Self::FastRead { length } => encode_fast_read(*length),
            Self::GetUid => encode_get_uid(),
            Self::GetAts => encode_get_ats(),
        }
    }
}
