// libnfctag/src/types.rs

use crate::Error;
use crate::constants::{
    EM4423_FIRST_PAGE, EM4423_FIRST_USER_PAGE, EM4423_LAST_PAGE, EM4423_LAST_USER_PAGE,
    EM4423_PAGE_SIZE, SW_SUCCESS,
};
use std::convert::TryFrom;
use std::fmt;

/// EM4423 page address - Newtype Pattern (1 バイト)
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Page(u8);

impl Page {
    /// Validate an address against the readable range 0x00..=0x62.
    pub fn readable(page: u8) -> Result<Self, Error> {
        if page > EM4423_LAST_PAGE {
            return Err(Error::InvalidPage {
                page,
                first: EM4423_FIRST_PAGE,
                last: EM4423_LAST_PAGE,
            });
        }
        Ok(Self(page))
    }

    /// Validate an address against the user memory range 0x04..=0x3F.
    pub fn writable(page: u8) -> Result<Self, Error> {
        if !(EM4423_FIRST_USER_PAGE..=EM4423_LAST_USER_PAGE).contains(&page) {
            return Err(Error::InvalidPage {
                page,
                first: EM4423_FIRST_USER_PAGE,
                last: EM4423_LAST_USER_PAGE,
            });
        }
        Ok(Self(page))
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }

    pub fn is_user_memory(&self) -> bool {
        (EM4423_FIRST_USER_PAGE..=EM4423_LAST_USER_PAGE).contains(&self.0)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02X}", self.0)
    }
}

/// PageData (4 バイト)
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct PageData([u8; EM4423_PAGE_SIZE]);

impl PageData {
    pub fn from_bytes(bytes: [u8; EM4423_PAGE_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; EM4423_PAGE_SIZE] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for PageData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != EM4423_PAGE_SIZE {
            return Err(Error::InvalidLength {
                expected: EM4423_PAGE_SIZE,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; EM4423_PAGE_SIZE];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

impl From<[u8; EM4423_PAGE_SIZE]> for PageData {
    fn from(bytes: [u8; EM4423_PAGE_SIZE]) -> Self {
        Self(bytes)
    }
}

/// Tag UID: single (4), double (7) or triple (10) size.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uid(Vec<u8>);

impl Uid {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(&self.0)
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        match bytes.len() {
            4 | 7 | 10 => Ok(Self(bytes.to_vec())),
            len => Err(Error::InvalidUid { len }),
        }
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::utils::bytes_to_hex_spaced(&self.0).to_uppercase())
    }
}

/// Answer To Select bytes as reported by GET DATA (P1 = 0x01).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ats(Vec<u8>);

impl Ats {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Trailing SW1/SW2 of a response.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusWord {
    pub sw1: u8,
    pub sw2: u8,
}

impl StatusWord {
    pub const SUCCESS: Self = Self::new(SW_SUCCESS[0], SW_SUCCESS[1]);

    pub const fn new(sw1: u8, sw2: u8) -> Self {
        Self { sw1, sw2 }
    }

    pub fn is_success(&self) -> bool {
        *self == Self::SUCCESS
    }

    pub fn as_u16(&self) -> u16 {
        u16::from_be_bytes([self.sw1, self.sw2])
    }
}

impl fmt::Display for StatusWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X} {:02X}", self.sw1, self.sw2)
    }
}

/// Connection mode. Direct talks to the reader itself (no tag required),
/// Shared talks to the tag in the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShareMode {
    Direct,
    #[default]
    Shared,
}
