use libnfctag::Error;
use libnfctag::protocol::{Command, CommandFrame, ResponseFrame};
use libnfctag::types::{PageData, StatusWord};

#[test]
fn em4423_wire_formats() {
    assert_eq!(
        Command::ReadPage { page: 0x04 }.encode().as_bytes(),
        &[0xFF, 0xB0, 0x00, 0x04, 0x04]
    );
    assert_eq!(
        Command::WritePage {
            page: 0x3F,
            data: PageData::from_bytes([0x11, 0x22, 0x33, 0x44]),
        }
        .encode()
        .as_bytes(),
        &[0xFF, 0xD6, 0x00, 0x3F, 0x04, 0x11, 0x22, 0x33, 0x44]
    );
    assert_eq!(
        Command::FastRead { length: 0x018C }.encode().as_bytes(),
        &[0xFF, 0xB0, 0x00, 0x00, 0x00, 0x01, 0x8C]
    );
}

#[test]
fn get_data_wire_formats() {
    assert_eq!(Command::GetUid.encode().as_bytes(), &[0xFF, 0xCA, 0x00, 0x00, 0x00]);
    assert_eq!(Command::GetAts.encode().as_bytes(), &[0xFF, 0xCA, 0x01, 0x00, 0x00]);
}

#[test]
fn extended_le_uses_three_bytes() {
    let cmd = CommandFrame::read_extended(0xFF, 0xB0, 0x00, 0x00, 0x1234);
    assert_eq!(&cmd.as_bytes()[4..], &[0x00, 0x12, 0x34]);
}

#[test]
fn response_status_decoding() {
    let ok = ResponseFrame::new(vec![0x01, 0x90, 0x00]);
    assert!(ok.is_success());
    assert_eq!(ok.data(), &[0x01]);

    let refused = ResponseFrame::new(vec![0x6A, 0x81]);
    assert_eq!(refused.status(), Some(StatusWord::new(0x6A, 0x81)));
    assert!(matches!(
        refused.ensure_success(),
        Err(Error::UnexpectedStatus { sw1: 0x6A, sw2: 0x81 })
    ));

    // 90 00 must be the trailer, not just somewhere in the frame
    let buried = ResponseFrame::new(vec![0x90, 0x00, 0x63, 0x00]);
    assert!(!buried.is_success());

    assert!(matches!(
        ResponseFrame::new(vec![0x90]).ensure_success(),
        Err(Error::TruncatedResponse { actual: 1 })
    ));
}
