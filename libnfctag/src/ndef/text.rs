// libnfctag/src/ndef/text.rs

use crate::constants::{
    EM4423_PAGE_SIZE, NDEF_MAX_SHORT_TEXT_LEN, NDEF_RECORD_HEADER, NDEF_RECORD_TYPE_TEXT,
    NDEF_TEXT_STATUS, NDEF_TLV_HEADER, NDEF_TLV_TERMINATOR, NDEF_TYPE_LENGTH,
};
use crate::protocol::parser::{byte_at, slice_at};
use crate::types::PageData;
use crate::{Error, Result};

/// "en"
pub const LANG_EN: [u8; 2] = *b"en";

/// Record header + type length + payload length + type + status + language
const RECORD_OVERHEAD: usize = 7;
/// Status byte + 2-byte language code
const PAYLOAD_OVERHEAD: usize = 3;
/// Largest NDEF length the single-byte TLV length can express
const TLV_SHORT_LENGTH_MAX: usize = 0xFE;
const TLV_LONG_LENGTH_MARKER: u8 = 0xFF;

/// Text record with a 2-byte language code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRecord {
    lang: [u8; 2],
    text: Vec<u8>,
}

impl TextRecord {
    pub fn new(lang: [u8; 2], text: &[u8]) -> Result<Self> {
        if text.len() > NDEF_MAX_SHORT_TEXT_LEN {
            log::error!(
                "max text length supported is {} but got {}",
                NDEF_MAX_SHORT_TEXT_LEN,
                text.len()
            );
            return Err(Error::TextTooLong {
                len: text.len(),
                max: NDEF_MAX_SHORT_TEXT_LEN,
            });
        }
        Ok(Self {
            lang,
            text: text.to_vec(),
        })
    }

    pub fn lang(&self) -> [u8; 2] {
        self.lang
    }

    pub fn text(&self) -> &[u8] {
        &self.text
    }

    /// Text as UTF-8 (the status byte always declares UTF-8 here).
    pub fn text_str(&self) -> Result<&str> {
        std::str::from_utf8(&self.text)
            .map_err(|e| Error::NdefFormat(format!("text is not valid UTF-8: {}", e)))
    }

    /// `1 + 2 + len(text)`
    pub fn payload_length(&self) -> u8 {
        // TextRecord::new caps text at 252 bytes, so this fits.
        (PAYLOAD_OVERHEAD + self.text.len()) as u8
    }

    /// `7 + len(text)`
    pub fn ndef_length(&self) -> usize {
        RECORD_OVERHEAD + self.text.len()
    }

    fn tlv_header(&self) -> Vec<u8> {
        let len = self.ndef_length();
        if len <= TLV_SHORT_LENGTH_MAX {
            vec![NDEF_TLV_HEADER, len as u8]
        } else {
            let [hi, lo] = (len as u16).to_be_bytes();
            vec![NDEF_TLV_HEADER, TLV_LONG_LENGTH_MARKER, hi, lo]
        }
    }

    fn record_header(&self) -> [u8; 7] {
        [
            NDEF_RECORD_HEADER,
            NDEF_TYPE_LENGTH,
            self.payload_length(),
            NDEF_RECORD_TYPE_TEXT,
            NDEF_TEXT_STATUS,
            self.lang[0],
            self.lang[1],
        ]
    }

    /// Serialize: TLV header, record header, text, terminator, then zero
    /// padding up to the next page boundary.
    pub fn encode(&self) -> EncodedNdef {
        let mut bytes = self.tlv_header();
        bytes.extend_from_slice(&self.record_header());
        bytes.extend_from_slice(&self.text);
        bytes.push(NDEF_TLV_TERMINATOR);

        let unpadded_len = bytes.len();
        bytes.resize(unpadded_len.next_multiple_of(EM4423_PAGE_SIZE), 0x00);

        EncodedNdef {
            bytes,
            unpadded_len,
        }
    }
}

/// Encoded TLV container. `len()` is the padded length, which is what the
/// page-write path splits into 4-byte pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedNdef {
    bytes: Vec<u8>,
    unpadded_len: usize,
}

impl EncodedNdef {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Padded length, always a multiple of 4.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Length up to and including the terminator.
    pub fn unpadded_len(&self) -> usize {
        self.unpadded_len
    }

    /// The buffer split into page-sized chunks.
    pub fn pages(&self) -> impl Iterator<Item = PageData> + '_ {
        self.bytes.chunks_exact(EM4423_PAGE_SIZE).map(|chunk| {
            let mut page = [0u8; EM4423_PAGE_SIZE];
            page.copy_from_slice(chunk);
            PageData::from_bytes(page)
        })
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl AsRef<[u8]> for EncodedNdef {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// Build a Text record TLV for `text`. Fails with `TextTooLong` above 252
/// bytes, the most the single-byte payload length can describe.
pub fn encode_short_text_record(text: &[u8], lang: [u8; 2]) -> Result<EncodedNdef> {
    Ok(TextRecord::new(lang, text)?.encode())
}

/// Parse a TLV container as written by `encode_short_text_record`, e.g.
/// the user memory read back from page 0x04. Leading NULL TLVs are skipped.
pub fn decode_text_record(bytes: &[u8]) -> Result<TextRecord> {
    let start = bytes
        .iter()
        .position(|&b| b != 0x00)
        .ok_or_else(|| Error::NdefFormat("no TLV found".into()))?;
    let tlv = &bytes[start..];

    if tlv[0] != NDEF_TLV_HEADER {
        return Err(Error::NdefFormat(format!(
            "expected NDEF TLV 0x03, got {:#04x}",
            tlv[0]
        )));
    }

    let truncated = |_| Error::NdefFormat("TLV truncated".into());
    let (ndef_len, body_start) = match byte_at(tlv, 1).map_err(truncated)? {
        TLV_LONG_LENGTH_MARKER => {
            let len = slice_at(tlv, 2, 2).map_err(truncated)?;
            (u16::from_be_bytes([len[0], len[1]]) as usize, 4)
        }
        len => (len as usize, 2),
    };

    let record = slice_at(tlv, body_start, ndef_len).map_err(truncated)?;
    if byte_at(tlv, body_start + ndef_len).map_err(truncated)? != NDEF_TLV_TERMINATOR {
        return Err(Error::NdefFormat("missing TLV terminator".into()));
    }

    if record.len() < RECORD_OVERHEAD {
        return Err(Error::NdefFormat("record shorter than its header".into()));
    }
    if record[0] != NDEF_RECORD_HEADER
        || record[1] != NDEF_TYPE_LENGTH
        || record[3] != NDEF_RECORD_TYPE_TEXT
    {
        return Err(Error::NdefFormat("not a short well-known Text record".into()));
    }

    let payload_len = record[2] as usize;
    if payload_len + 4 != record.len() {
        return Err(Error::NdefFormat(format!(
            "payload length {} does not match record length {}",
            payload_len,
            record.len()
        )));
    }

    let status = record[4];
    if status & 0x80 != 0 {
        return Err(Error::NdefFormat("UTF-16 text is not supported".into()));
    }
    if status & 0x3F != 2 {
        return Err(Error::NdefFormat(format!(
            "unsupported language code length {}",
            status & 0x3F
        )));
    }

    TextRecord::new([record[5], record[6]], &record[RECORD_OVERHEAD..])
}
