// libnfctag/src/session/builder.rs

use std::time::Duration;

use crate::session::handle::{Disconnected, Session};
use crate::session::poll::PollConfig;
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct a Session with optional configuration.
#[derive(Default)]
pub struct SessionBuilder {
    transport: Option<Box<dyn Transport>>,
    reader: Option<String>,
    poll: PollConfig,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Reader to use; defaults to the first PICC reader the transport
    /// lists, or the first reader when none is.
    pub fn reader(mut self, name: impl Into<String>) -> Self {
        self.reader = Some(name.into());
        self
    }

    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll.interval = interval;
        self
    }

    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.poll.max_attempts = Some(attempts);
        self
    }

    /// Consume the builder and return a disconnected Session.
    /// Requires a transport; otherwise returns ReaderNotFound, as does a
    /// transport that lists no readers.
    pub fn build(self) -> Result<Session<Disconnected>> {
        let mut transport = self.transport.ok_or(Error::ReaderNotFound)?;

        let reader = match self.reader {
            Some(name) => name,
            None => {
                let readers = transport.list_readers()?;
                for (i, name) in readers.iter().enumerate() {
                    log::info!("reader {}: {}", i, name);
                }
                pick_reader(readers).ok_or(Error::ReaderNotFound)?
            }
        };

        log::info!("using reader {}", reader);
        Ok(Session::new_with_transport(transport, reader).with_poll_config(self.poll))
    }
}

/// Dual-interface readers list a contact (ICC) slot and a contactless
/// (PICC) slot; tags only ever show up on the latter.
fn pick_reader(readers: Vec<String>) -> Option<String> {
    let picc = readers.iter().position(|name| name.contains(PICC_MARKER));
    match picc {
        Some(i) => readers.into_iter().nth(i),
        None => readers.into_iter().next(),
    }
}

const PICC_MARKER: &str = "PICC";
