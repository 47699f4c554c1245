use libnfctag::Error;
use libnfctag::protocol::codec;
use libnfctag::protocol::{CommandFrame, ResponseBuffer};
use libnfctag::transport::MockTransport;

#[test]
fn queued_errors_surface_as_transport_errors() {
    let mut mock = MockTransport::connected();
    mock.push_error(Error::CardRemoved);
    mock.push_error(Error::Transport("reader unavailable".into()));

    let mut buf = ResponseBuffer::new();
    let cmd = CommandFrame::read(0xFF, 0xCA, 0x00, 0x00, 0x00);
    for _ in 0..2 {
        let err = codec::exchange(&mut mock, &mut buf, &cmd).unwrap_err();
        assert!(err.is_transport());
    }
}

#[test]
fn empty_queue_times_out() {
    let mut mock = MockTransport::connected();
    let mut buf = ResponseBuffer::new();
    let cmd = CommandFrame::read(0xFF, 0xCA, 0x00, 0x00, 0x00);
    let err = codec::exchange(&mut mock, &mut buf, &cmd).unwrap_err();
    assert!(matches!(err, Error::Timeout));
    assert!(err.is_retryable());
}

#[test]
fn oversize_answer_is_rejected() {
    let mut mock = MockTransport::connected();
    mock.push_response(vec![0u8; 2049]);
    let mut buf = ResponseBuffer::new();
    let cmd = CommandFrame::read(0xFF, 0xB0, 0x00, 0x00, 0x00);
    assert!(matches!(
        codec::exchange(&mut mock, &mut buf, &cmd),
        Err(Error::InsufficientBuffer {
            needed: 2049,
            capacity: 2048
        })
    ));
}

#[test]
fn exchange_without_connection() {
    let mut mock = MockTransport::new();
    let mut buf = ResponseBuffer::new();
    let cmd = CommandFrame::read(0xFF, 0xCA, 0x00, 0x00, 0x00);
    assert!(matches!(
        codec::exchange(&mut mock, &mut buf, &cmd),
        Err(Error::NotConnected)
    ));
}
