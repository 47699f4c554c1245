// libnfctag/src/transport/mock.rs

use crate::transport::traits::Transport;
use crate::types::ShareMode;
use crate::{Error, Result};

/// Mock transport for unit tests. It records sent commands and returns
/// queued responses in order.
#[derive(Debug)]
pub struct MockTransport {
    pub readers: Vec<String>,
    /// ATR reported by `status()`
    pub atr: Vec<u8>,
    pub sent: Vec<Vec<u8>>,
    /// Queued transmit/control outcomes, consumed front to back
    pub responses: Vec<Result<Vec<u8>>>,
    /// Queued connect outcomes; once empty every connect succeeds
    pub connect_results: Vec<Result<()>>,
    pub connect_attempts: usize,
    pub connected: Option<ShareMode>,
    /// Record control calls: (code, data)
    pub control_calls: Vec<(u32, Vec<u8>)>,
    pub disconnects: usize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            readers: vec!["Mock ACR1581 1S Dual Reader PICC 00 00".to_string()],
            atr: Vec::new(),
            sent: Vec::new(),
            responses: Vec::new(),
            connect_results: Vec::new(),
            connect_attempts: 0,
            connected: None,
            control_calls: Vec::new(),
            disconnects: 0,
        }
    }

    /// A transport that already has a tag connected in Shared mode.
    pub fn connected() -> Self {
        let mut m = Self::new();
        m.connected = Some(ShareMode::Shared);
        m
    }

    pub fn set_atr(&mut self, atr: &[u8]) {
        self.atr = atr.to_vec();
    }

    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push(Ok(resp));
    }

    pub fn push_error(&mut self, err: Error) {
        self.responses.push(Err(err));
    }

    pub fn push_connect_result(&mut self, result: Result<()>) {
        self.connect_results.push(result);
    }

    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }

    fn next_response(&mut self, recv: &mut [u8]) -> Result<usize> {
        if self.responses.is_empty() {
            return Err(Error::Timeout);
        }
        let resp = self.responses.remove(0)?;
        if resp.len() > recv.len() {
            return Err(Error::InsufficientBuffer {
                needed: resp.len(),
                capacity: recv.len(),
            });
        }
        recv[..resp.len()].copy_from_slice(&resp);
        Ok(resp.len())
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for MockTransport {
    fn list_readers(&mut self) -> Result<Vec<String>> {
        Ok(self.readers.clone())
    }

    fn connect(&mut self, reader: &str, mode: ShareMode) -> Result<()> {
        self.connect_attempts += 1;
        if !self.readers.iter().any(|r| r == reader) {
            return Err(Error::ReaderNotFound);
        }
        if !self.connect_results.is_empty() {
            self.connect_results.remove(0)?;
        }
        self.connected = Some(mode);
        Ok(())
    }

    fn transmit(&mut self, command: &[u8], recv: &mut [u8]) -> Result<usize> {
        if self.connected.is_none() {
            return Err(Error::NotConnected);
        }
        self.sent.push(command.to_vec());
        self.next_response(recv)
    }

    fn status(&mut self, recv: &mut [u8]) -> Result<usize> {
        if self.connected.is_none() {
            return Err(Error::NotConnected);
        }
        let n = self.atr.len().min(recv.len());
        recv[..n].copy_from_slice(&self.atr[..n]);
        Ok(n)
    }

    fn control(&mut self, code: u32, command: &[u8], recv: &mut [u8]) -> Result<usize> {
        if self.connected != Some(ShareMode::Direct) {
            return Err(Error::NotConnected);
        }
        self.control_calls.push((code, command.to_vec()));
        self.next_response(recv)
    }

    fn disconnect(&mut self) -> Result<()> {
        self.connected = None;
        self.disconnects += 1;
        Ok(())
    }
}
