// libnfctag/src/protocol/response.rs

use crate::types::StatusWord;
use crate::{Error, Result};

/// Response APDU as received from the transport: data bytes followed by
/// the two status-word bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseFrame {
    bytes: Vec<u8>,
}

impl ResponseFrame {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Raw received bytes including the status word.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Logical length of the response.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Trailing status word, or `None` for frames shorter than two bytes.
    pub fn status(&self) -> Option<StatusWord> {
        match self.bytes.as_slice() {
            [.., sw1, sw2] => Some(StatusWord::new(*sw1, *sw2)),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status().is_some_and(|sw| sw.is_success())
    }

    /// Response data without the status word. Empty for truncated frames.
    pub fn data(&self) -> &[u8] {
        if self.bytes.len() < 2 {
            return &[];
        }
        &self.bytes[..self.bytes.len() - 2]
    }

    /// Turn a non-`90 00` outcome into a decode error.
    pub fn ensure_success(self) -> Result<Self> {
        match self.status() {
            None => Err(Error::TruncatedResponse {
                actual: self.bytes.len(),
            }),
            Some(sw) if sw.is_success() => Ok(self),
            Some(sw) => Err(Error::UnexpectedStatus {
                sw1: sw.sw1,
                sw2: sw.sw2,
            }),
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
