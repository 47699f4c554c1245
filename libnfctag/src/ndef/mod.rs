// libnfctag/src/ndef/mod.rs

//! NDEF Text records wrapped in a Type 2 style TLV container.
//!
//! Container layout:
//!
//! ```text
//! 03        TLV header (NDEF message)
//! LL        NDEF length, from the record header through the last text byte
//! D1        record header: MB=1 ME=1 CF=0 SR=1 IL=0 TNF=001
//! 01        type length
//! PP        payload length = status + language code + text
//! 54        record type 'T'
//! 02        status: UTF-8, 2-byte language code
//! 65 6E     language code "en"
//! ..        text
//! FE        TLV terminator
//! 00..      zero padding up to a multiple of 4 bytes
//! ```
//!
//! NDEF lengths of 0xFF and above use the three-byte TLV length form
//! `FF hi lo`.

mod text;

pub use text::{EncodedNdef, LANG_EN, TextRecord, decode_text_record, encode_short_text_record};
