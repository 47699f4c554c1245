use libnfctag::Error;
use libnfctag::ndef::{LANG_EN, TextRecord, decode_text_record, encode_short_text_record};

#[test]
fn yo_is_twelve_bytes() {
    let enc = encode_short_text_record(b"yo", LANG_EN).unwrap();
    assert_eq!(
        enc.as_bytes(),
        &[0x03, 0x09, 0xD1, 0x01, 0x05, 0x54, 0x02, 0x65, 0x6E, 0x79, 0x6F, 0xFE]
    );
}

#[test]
fn padded_length_feeds_the_page_writer() {
    let enc = encode_short_text_record(b"Hello, world!", LANG_EN).unwrap();
    assert_eq!(enc.len(), 24);
    assert_eq!(enc.pages().count(), 6);
}

#[test]
fn other_language_code() {
    let enc = TextRecord::new(*b"ja", "こんにちは".as_bytes()).unwrap().encode();
    assert_eq!(&enc.as_bytes()[7..9], b"ja");
    let back = decode_text_record(enc.as_bytes()).unwrap();
    assert_eq!(back.lang(), *b"ja");
    assert_eq!(back.text_str().unwrap(), "こんにちは");
}

#[test]
fn limits() {
    assert!(encode_short_text_record(&[0x41; 252], LANG_EN).is_ok());
    assert!(matches!(
        encode_short_text_record(&[0x41; 253], LANG_EN),
        Err(Error::TextTooLong { len: 253, max: 252 })
    ));
}
