// libnfctag/src/prelude.rs

pub use crate::em4423::{Em4423, Em4423Memory};
pub use crate::ndef::{EncodedNdef, TextRecord, encode_short_text_record};
pub use crate::protocol::{Command, CommandFrame, ResponseFrame};
pub use crate::session::{Connected, Disconnected, PollConfig, Session, SessionBuilder};
pub use crate::tag::{TagIdentity, classify, disambiguate_via_ats};
pub use crate::transport::Transport;
pub use crate::{Ats, Error, Page, PageData, Result, ShareMode, StatusWord, Uid};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, default_poll_interval, ms};
