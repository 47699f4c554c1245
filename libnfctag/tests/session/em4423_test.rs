use libnfctag::ndef::{LANG_EN, encode_short_text_record};
use libnfctag::types::PageData;
use libnfctag::Error;

use super::common::{connected_mock_session, fixtures, success};

#[test]
fn write_then_read_page() {
    let (mut session, shared) =
        connected_mock_session(vec![vec![0x90, 0x00], success(&[0xCA, 0xFE, 0xBA, 0xBE])])
            .unwrap();

    let mut tag = session.em4423();
    tag.write_page(0x20, [0xCAu8, 0xFE, 0xBA, 0xBE]).unwrap();
    let data = tag.read_page(0x20).unwrap();
    assert_eq!(data, PageData::from_bytes([0xCA, 0xFE, 0xBA, 0xBE]));

    let sent = shared.sent();
    assert_eq!(sent[0], vec![0xFF, 0xD6, 0x00, 0x20, 0x04, 0xCA, 0xFE, 0xBA, 0xBE]);
    assert_eq!(sent[1], vec![0xFF, 0xB0, 0x00, 0x20, 0x04]);
}

#[test]
fn read_page_twice_is_identical() {
    let page = success(&[0x10, 0x20, 0x30, 0x40]);
    let (mut session, shared) = connected_mock_session(vec![page.clone(), page]).unwrap();

    let first = session.em4423().read_page(0x3F).unwrap();
    let second = session.em4423().read_page(0x3F).unwrap();
    assert_eq!(first, second);
    assert_eq!(shared.sent()[0], shared.sent()[1]);
}

#[test]
fn fast_read_twice_is_identical() {
    let mem = fixtures::em4423_memory();
    let (mut session, _shared) =
        connected_mock_session(vec![success(&mem), success(&mem)]).unwrap();

    let first = session.em4423().fast_read().unwrap();
    let second = session.em4423().fast_read().unwrap();
    assert_eq!(first, second);
    assert_eq!(first.page(0x62).unwrap().as_bytes(), &[0x62; 4]);
}

#[test]
fn fast_read_dump_lists_every_page() {
    let (mut session, _shared) =
        connected_mock_session(vec![success(&fixtures::em4423_memory())]).unwrap();
    let dump = session.em4423().fast_read().unwrap().to_string();
    assert_eq!(dump.lines().count(), 99);
    assert!(dump.contains("[Page 0x3F]\t0x3F  0x3F  0x3F  0x3F"));
}

#[test]
fn failed_status_is_a_decode_error_not_a_transport_error() {
    let (mut session, _shared) = connected_mock_session(vec![vec![0x63, 0x00]]).unwrap();
    let err = session.em4423().read_page(0x00).unwrap_err();
    assert!(matches!(err, Error::ReadRejected { page: 0x00, .. }));
    assert!(!err.is_transport());
}

#[test]
fn transport_failure_propagates() {
    let (mut session, shared) = connected_mock_session(vec![]).unwrap();
    shared.inner.borrow_mut().push_error(Error::CardRemoved);
    let err = session.em4423().write_page(0x04, [0u8; 4]).unwrap_err();
    assert!(matches!(err, Error::CardRemoved));
}

#[test]
fn ndef_round_trip_through_tag_memory() {
    let record = encode_short_text_record(b"Hello, world!", LANG_EN).unwrap();
    let mut responses = vec![vec![0x90, 0x00]; 6];
    responses.push(success(&fixtures::em4423_memory_with(record.as_bytes())));
    let (mut session, shared) = connected_mock_session(responses).unwrap();

    let mut tag = session.em4423();
    assert_eq!(tag.write_ndef_text(b"Hello, world!").unwrap(), 6);
    let back = tag.read_ndef_text().unwrap();
    assert_eq!(back.text_str().unwrap(), "Hello, world!");

    // Pages 0x04..=0x09 written in order
    let pages: Vec<u8> = shared.sent()[..6].iter().map(|c| c[3]).collect();
    assert_eq!(pages, vec![0x04, 0x05, 0x06, 0x07, 0x08, 0x09]);
}

#[test]
fn blank_tag_has_no_text_record() {
    let (mut session, _shared) =
        connected_mock_session(vec![success(&fixtures::em4423_memory_with(&[]))]).unwrap();
    assert!(matches!(
        session.em4423().read_ndef_text(),
        Err(Error::NdefFormat(_))
    ));
}
