use libnfctag::session::{PollConfig, Session, SessionBuilder};
use libnfctag::transport::MockTransport;
use libnfctag::types::ShareMode;
use libnfctag::utils::ms;
use libnfctag::Error;

use super::common::{self, SharedMock};

#[test]
fn builder_connect_disconnect_cycle() {
    common::init_logging();
    let shared = SharedMock::new();
    let session = SessionBuilder::new()
        .with_transport(Box::new(shared.clone()))
        .build()
        .unwrap();
    assert_eq!(session.reader(), "Mock ACR1581 1S Dual Reader PICC 00 00");

    let connected = session.connect().unwrap();
    assert_eq!(shared.inner.borrow().connected, Some(ShareMode::Shared));

    let session = connected.disconnect().unwrap();
    assert_eq!(shared.inner.borrow().connected, None);

    // A disconnected session can connect again
    let _again = session.connect().unwrap();
    assert_eq!(shared.inner.borrow().connect_attempts, 2);
}

#[test]
fn connect_to_missing_reader_fails() {
    let session = SessionBuilder::new()
        .with_transport(Box::new(MockTransport::new()))
        .reader("ACS ACR122U")
        .build()
        .unwrap();
    assert!(matches!(session.connect().err(), Some(Error::ReaderNotFound)));
}

#[test]
fn poll_until_card_arrives() {
    common::init_logging();
    let shared = SharedMock::new();
    {
        let mut mock = shared.inner.borrow_mut();
        mock.push_connect_result(Err(Error::NoCard));
        mock.push_connect_result(Err(Error::Timeout));
        mock.push_connect_result(Err(Error::CardRemoved));
    }
    let reader = shared.inner.borrow().readers[0].clone();
    let session = Session::new_with_transport(Box::new(shared.clone()), reader).with_poll_config(
        PollConfig {
            interval: ms(1),
            max_attempts: None,
        },
    );

    assert!(session.wait_for_tag().is_ok());
    assert_eq!(shared.inner.borrow().connect_attempts, 4);
}

#[test]
fn bounded_poll_returns_last_error() {
    let shared = SharedMock::new();
    for _ in 0..3 {
        shared.inner.borrow_mut().push_connect_result(Err(Error::NoCard));
    }
    let session = SessionBuilder::new()
        .with_transport(Box::new(shared.clone()))
        .poll_interval(ms(0))
        .max_attempts(2)
        .build()
        .unwrap();

    assert!(matches!(session.wait_for_tag().err(), Some(Error::NoCard)));
    assert_eq!(shared.inner.borrow().connect_attempts, 2);
}

#[test]
fn permission_error_is_fatal() {
    let shared = SharedMock::new();
    shared
        .inner
        .borrow_mut()
        .push_connect_result(Err(Error::Transport("access denied".into())));
    let session = SessionBuilder::new()
        .with_transport(Box::new(shared.clone()))
        .poll_interval(ms(0))
        .build()
        .unwrap();

    assert!(matches!(session.wait_for_tag().err(), Some(Error::Transport(_))));
    assert_eq!(shared.inner.borrow().connect_attempts, 1);
}
