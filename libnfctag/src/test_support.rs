//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::session::{Connected, Session};
use crate::transport::mock::MockTransport;
use crate::transport::traits::Transport;
use crate::types::ShareMode;
use crate::Result;

/// Transport wrapper that delegates into `Rc<RefCell<MockTransport>>`, so a
/// test can inspect sent commands after the Session has taken ownership.
#[doc(hidden)]
#[derive(Clone, Default)]
pub struct SharedMock {
    pub inner: Rc<RefCell<MockTransport>>,
}

impl SharedMock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&self, resp: Vec<u8>) {
        self.inner.borrow_mut().push_response(resp);
    }

    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.inner.borrow().sent.clone()
    }
}

impl Transport for SharedMock {
    fn list_readers(&mut self) -> Result<Vec<String>> {
        self.inner.borrow_mut().list_readers()
    }

    fn connect(&mut self, reader: &str, mode: ShareMode) -> Result<()> {
        self.inner.borrow_mut().connect(reader, mode)
    }

    fn transmit(&mut self, command: &[u8], recv: &mut [u8]) -> Result<usize> {
        self.inner.borrow_mut().transmit(command, recv)
    }

    fn status(&mut self, recv: &mut [u8]) -> Result<usize> {
        self.inner.borrow_mut().status(recv)
    }

    fn control(&mut self, code: u32, command: &[u8], recv: &mut [u8]) -> Result<usize> {
        self.inner.borrow_mut().control(code, command, recv)
    }

    fn disconnect(&mut self) -> Result<()> {
        self.inner.borrow_mut().disconnect()
    }
}

/// `data` followed by `90 00`.
#[doc(hidden)]
pub fn success(data: &[u8]) -> Vec<u8> {
    let mut resp = data.to_vec();
    resp.extend_from_slice(&[0x90, 0x00]);
    resp
}

/// Connected Session backed by a SharedMock pre-seeded with `responses`.
/// The returned handle shares state with the session's transport.
#[doc(hidden)]
pub fn connected_mock_session(responses: Vec<Vec<u8>>) -> Result<(Session<Connected>, SharedMock)> {
    let shared = SharedMock::new();
    for resp in responses {
        shared.push_response(resp);
    }
    let reader = shared.inner.borrow().readers[0].clone();
    let session = Session::new_with_transport(Box::new(shared.clone()), reader).connect()?;
    Ok((session, shared))
}
