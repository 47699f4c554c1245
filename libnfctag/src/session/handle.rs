// libnfctag/src/session/handle.rs

use std::marker::PhantomData;

use crate::constants::SW_FUNCTION_NOT_SUPPORTED;
use crate::em4423::Em4423;
use crate::protocol::codec;
use crate::protocol::{Command, CommandFrame, ResponseBuffer, ResponseFrame, encode_buzzer_off};
use crate::session::poll::{PollConfig, poll};
use crate::tag::{TagIdentity, classify};
use crate::transport::Transport;
use crate::types::{Ats, ShareMode, StatusWord, Uid};
use crate::Result;

/// Type-state markers
pub struct Disconnected;
pub struct Connected;

/// Reader session that enforces tag connection state at compile time.
///
/// The session owns its transport and the receive buffer every exchange
/// goes through, so exchanges on one session are always sequential.
pub struct Session<State = Disconnected> {
    transport: Box<dyn Transport>,
    buffer: ResponseBuffer,
    reader: String,
    poll: PollConfig,
    identity: Option<TagIdentity>,
    _state: PhantomData<State>,
}

impl<State> Session<State> {
    fn into_state<Next>(self) -> Session<Next> {
        Session {
            transport: self.transport,
            buffer: self.buffer,
            reader: self.reader,
            poll: self.poll,
            identity: self.identity,
            _state: PhantomData,
        }
    }

    /// Reader this session talks to.
    pub fn reader(&self) -> &str {
        &self.reader
    }

    pub fn poll_config(&self) -> &PollConfig {
        &self.poll
    }
}

impl Session<Disconnected> {
    /// Create a Session from an existing Transport instance. This is
    /// primarily intended for tests where a MockTransport is provided.
    pub fn new_with_transport(transport: Box<dyn Transport>, reader: impl Into<String>) -> Self {
        Self {
            transport,
            buffer: ResponseBuffer::new(),
            reader: reader.into(),
            poll: PollConfig::default(),
            identity: None,
            _state: PhantomData,
        }
    }

    pub fn with_poll_config(mut self, poll: PollConfig) -> Self {
        self.poll = poll;
        self
    }

    pub fn list_readers(&mut self) -> Result<Vec<String>> {
        self.transport.list_readers()
    }

    /// Silence the ACR1581 beep on card detection. Needs a Direct
    /// connection, which is released again before returning.
    pub fn disable_buzzer(&mut self) -> Result<()> {
        self.transport.connect(&self.reader, ShareMode::Direct)?;

        let cmd = encode_buzzer_off();
        let result = codec::control(&mut *self.transport, &mut self.buffer, cmd.code, &cmd.bytes);
        let disconnected = self.transport.disconnect();

        result?;
        disconnected?;
        log::info!("buzzer disabled on {}", self.reader);
        Ok(())
    }

    /// One Shared-mode connect attempt.
    pub fn connect(mut self) -> Result<Session<Connected>> {
        self.transport.connect(&self.reader, ShareMode::Shared)?;
        log::info!("connected to tag on {}", self.reader);
        Ok(self.into_state())
    }

    /// Poll until a tag is in the field, using the session's `PollConfig`.
    pub fn wait_for_tag(mut self) -> Result<Session<Connected>> {
        let reader = self.reader.clone();
        let transport = &mut self.transport;
        poll(&self.poll, || transport.connect(&reader, ShareMode::Shared))?;
        log::info!("connected to tag on {}", self.reader);
        Ok(self.into_state())
    }
}

impl Session<Connected> {
    /// Send a raw APDU. The caller decides what a non-success status means.
    pub fn exchange(&mut self, command: &CommandFrame) -> Result<ResponseFrame> {
        codec::exchange(&mut *self.transport, &mut self.buffer, command)
    }

    /// Encode and send a command.
    pub fn execute(&mut self, cmd: &Command) -> Result<ResponseFrame> {
        log::debug!("{}", cmd.name());
        self.exchange(&cmd.encode())
    }

    /// Reader status bytes (the ATR) for the connected tag.
    pub fn status_bytes(&mut self) -> Result<Vec<u8>> {
        codec::query_status(&mut *self.transport, &mut self.buffer)
    }

    pub fn uid(&mut self) -> Result<Uid> {
        let frame = self.execute(&Command::GetUid)?.ensure_success()?;
        let uid = Uid::try_from(frame.data())?;
        log::info!("uid: {}", uid);
        Ok(uid)
    }

    /// GET DATA for the ATS. `Ok(None)` when the tag answers `6A 81`
    /// (not an ISO 14443-4 tag).
    pub fn ats(&mut self) -> Result<Option<Ats>> {
        let frame = self.execute(&Command::GetAts)?;
        let not_supported = StatusWord::new(SW_FUNCTION_NOT_SUPPORTED[0], SW_FUNCTION_NOT_SUPPORTED[1]);
        if frame.status() == Some(not_supported) {
            log::warn!("ATS not supported by this tag");
            return Ok(None);
        }
        let frame = frame.ensure_success()?;
        Ok(Some(Ats::from_bytes(frame.data())))
    }

    /// Classify the tag from its status bytes, narrowing the Desfire/NTAG
    /// 424 ambiguity through the ATS when needed. The result is cached for
    /// the lifetime of the connection.
    pub fn identify(&mut self) -> Result<TagIdentity> {
        if let Some(identity) = self.identity {
            return Ok(identity);
        }

        let status = self.status_bytes()?;
        let mut identity = classify(&status);
        if identity.needs_ats() {
            match self.ats() {
                Ok(Some(ats)) => identity = identity.refine_with_ats(ats.as_bytes()),
                Ok(None) => {}
                // A refused GET ATS leaves the ambiguous identity as is
                Err(e) if !e.is_transport() => {
                    log::warn!("GET ATS failed, keeping {}: {}", identity, e);
                }
                Err(e) => return Err(e),
            }
        }

        log::info!("identified tag: {}", identity);
        self.identity = Some(identity);
        Ok(identity)
    }

    /// Cached result of `identify`, if it ran.
    pub fn identity(&self) -> Option<TagIdentity> {
        self.identity
    }

    pub fn em4423(&mut self) -> Em4423<'_> {
        Em4423::new(self)
    }

    pub fn disconnect(mut self) -> Result<Session<Disconnected>> {
        self.transport.disconnect()?;
        self.identity = None;
        log::debug!("disconnected from {}", self.reader);
        Ok(self.into_state())
    }
}
