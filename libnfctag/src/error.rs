// libnfctag/src/error.rs

use thiserror::Error;

use crate::types::StatusWord;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("reader not found")]
    ReaderNotFound,

    #[error("no card present")]
    NoCard,

    #[error("card was removed")]
    CardRemoved,

    #[error("operation timed out")]
    Timeout,

    #[error("session is not connected to a card")]
    NotConnected,

    #[error("receive buffer too small: need {needed} bytes, capacity {capacity}")]
    InsufficientBuffer { needed: usize, capacity: usize },

    // PC/SC 実装を後から有効化できるように optional dependency にしている
    #[cfg(feature = "pcsc")]
    #[error("pcsc error: {0}")]
    Pcsc(#[from] pcsc::Error),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected status word: {sw1:02X} {sw2:02X}")]
    UnexpectedStatus { sw1: u8, sw2: u8 },

    #[error("response too short for a status word: {actual} bytes")]
    TruncatedResponse { actual: usize },

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("page {page:#04x} is outside {first:#04x}..={last:#04x}")]
    InvalidPage { page: u8, first: u8, last: u8 },

    #[error("failed to write page {page:#04x}: {}", describe_status(.status))]
    WriteRejected {
        page: u8,
        status: Option<StatusWord>,
    },

    #[error("failed to read page {page:#04x}: {}", describe_status(.status))]
    ReadRejected {
        page: u8,
        status: Option<StatusWord>,
    },

    #[error("failed to fast-read tag memory: {}", describe_status(.status))]
    FastReadRejected { status: Option<StatusWord> },

    #[error("text too long for a short NDEF record: {len} bytes (max {max})")]
    TextTooLong { len: usize, max: usize },

    #[error("ndef format error: {0}")]
    NdefFormat(String),

    #[error("invalid uid length: {len}")]
    InvalidUid { len: usize },

    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
}

impl Error {
    /// Conditions the card-presence poll treats as "try again": no card in
    /// the field yet, a card pulled mid-connect, or a reader timeout.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::NoCard | Error::CardRemoved | Error::Timeout => true,
            #[cfg(feature = "pcsc")]
            Error::Pcsc(e) => matches!(
                e,
                pcsc::Error::NoSmartcard | pcsc::Error::RemovedCard | pcsc::Error::Timeout
            ),
            _ => false,
        }
    }

    /// True for reader/session-level failures, as opposed to decode or
    /// validation errors.
    pub fn is_transport(&self) -> bool {
        match self {
            Error::ReaderNotFound
            | Error::NoCard
            | Error::CardRemoved
            | Error::Timeout
            | Error::NotConnected
            | Error::InsufficientBuffer { .. }
            | Error::Transport(_)
            | Error::UnsupportedOperation(_) => true,
            #[cfg(feature = "pcsc")]
            Error::Pcsc(_) => true,
            _ => false,
        }
    }

    /// Status word carried by a decode failure, if any.
    pub fn status_word(&self) -> Option<StatusWord> {
        match self {
            Error::UnexpectedStatus { sw1, sw2 } => Some(StatusWord::new(*sw1, *sw2)),
            Error::WriteRejected { status, .. }
            | Error::ReadRejected { status, .. }
            | Error::FastReadRejected { status } => *status,
            _ => None,
        }
    }
}

fn describe_status(status: &Option<StatusWord>) -> String {
    match status {
        Some(sw) => format!("status {}", sw),
        None => "no status word".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, Error>;
