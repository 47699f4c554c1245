// libnfctag/src/tag/classify.rs

use crate::constants::{STATUS_DISCRIMINATOR_OFFSET, STATUS_MIN_CLASSIFY_LEN};
use crate::protocol::parser::has_prefix;
use crate::tag::TagIdentity;

/// ATR prefix shared by Desfire EV3 and NTAG 424 DNA
pub const DESFIRE_OR_NTAG424_ATR_PREFIX: [u8; 4] = [0x3B, 0x81, 0x80, 0x01];

/// One predicate over fixed offsets of a status response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Bytes 13 and 14 (the PC/SC card name) equal the pair
    CardName(u8, u8),
    /// The response starts with these bytes
    Prefix(&'static [u8]),
    /// Byte 13 alone equals the value
    CardNameHigh(u8),
}

impl Rule {
    pub fn matches(&self, status: &[u8]) -> bool {
        let at = STATUS_DISCRIMINATOR_OFFSET;
        match *self {
            Rule::CardName(hi, lo) => status.get(at..at + 2) == Some(&[hi, lo][..]),
            Rule::Prefix(prefix) => has_prefix(status, prefix),
            Rule::CardNameHigh(hi) => status.get(at) == Some(&hi),
        }
    }
}

/// Evaluated top to bottom; the first matching rule decides.
pub const CLASSIFICATION_RULES: &[(Rule, TagIdentity)] = &[
    (Rule::CardName(0x00, 0x01), TagIdentity::MifareClassic1K),
    (Rule::CardName(0x00, 0x02), TagIdentity::MifareClassic4K),
    (Rule::CardName(0x00, 0x03), TagIdentity::MifareUltralightOrNTAG2xx),
    (Rule::CardName(0x00, 0x26), TagIdentity::MifareMini),
    (Rule::CardName(0xF0, 0x04), TagIdentity::Topaz),
    (Rule::CardName(0xF0, 0x11), TagIdentity::FeliCa212K),
    (Rule::CardName(0xF0, 0x12), TagIdentity::FeliCa424K),
    (
        Rule::Prefix(&DESFIRE_OR_NTAG424_ATR_PREFIX),
        TagIdentity::DesfireOrNTAG424DNA,
    ),
    (Rule::CardNameHigh(0xFF), TagIdentity::Unknown),
];

/// Classify a tag from the reader's status (ATR) bytes.
///
/// Responses shorter than 15 bytes cannot carry the card name and are
/// `Unidentified`; so is anything no rule matches. Never fails.
pub fn classify(status: &[u8]) -> TagIdentity {
    if status.len() < STATUS_MIN_CLASSIFY_LEN {
        return TagIdentity::Unidentified;
    }

    CLASSIFICATION_RULES
        .iter()
        .find(|(rule, _)| rule.matches(status))
        .map(|(_, identity)| *identity)
        .unwrap_or(TagIdentity::Unidentified)
}
