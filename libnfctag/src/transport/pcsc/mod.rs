// libnfctag/src/transport/pcsc/mod.rs

#![cfg(feature = "pcsc")]

use std::ffi::CString;

use crate::transport::traits::Transport;
use crate::types::ShareMode;
use crate::{Error, Result};

use pcsc::{Card, Context, Disposition, Protocols, Scope};

/// PC/SC backed transport. It is feature-gated behind `--features pcsc`
/// and requires the `pcsc` crate (pcsc-lite on Linux, WinSCard on
/// Windows, PCSC.framework on macOS).
pub struct PcscTransport {
    context: Context,
    card: Option<Card>,
}

impl PcscTransport {
    /// Establish a PC/SC context.
    pub fn open() -> Result<Self> {
        let context = Context::establish(Scope::User).map_err(map_pcsc_error)?;
        Ok(Self {
            context,
            card: None,
        })
    }

    fn card(&self) -> Result<&Card> {
        self.card.as_ref().ok_or(Error::NotConnected)
    }
}

/// Fold the PC/SC codes the crate reasons about into dedicated variants;
/// anything else is carried through unchanged.
pub(crate) fn map_pcsc_error(err: pcsc::Error) -> Error {
    match err {
        pcsc::Error::NoSmartcard => Error::NoCard,
        pcsc::Error::RemovedCard => Error::CardRemoved,
        pcsc::Error::Timeout => Error::Timeout,
        pcsc::Error::NoReadersAvailable | pcsc::Error::UnknownReader => Error::ReaderNotFound,
        other => Error::Pcsc(other),
    }
}

impl Transport for PcscTransport {
    fn list_readers(&mut self) -> Result<Vec<String>> {
        let readers = self
            .context
            .list_readers_owned()
            .map_err(map_pcsc_error)?;
        Ok(readers
            .into_iter()
            .map(|r| r.to_string_lossy().into_owned())
            .collect())
    }

    fn connect(&mut self, reader: &str, mode: ShareMode) -> Result<()> {
        // Drop any previous handle first so Direct -> Shared transitions work.
        self.disconnect()?;

        let name = CString::new(reader)
            .map_err(|_| Error::Transport(format!("reader name contains NUL: {:?}", reader)))?;
        let share = match mode {
            ShareMode::Direct => pcsc::ShareMode::Direct,
            ShareMode::Shared => pcsc::ShareMode::Shared,
        };
        // T=0 did not work with the ACR1581 contactless interface; T=1 does.
        let card = self
            .context
            .connect(&name, share, Protocols::T1)
            .map_err(map_pcsc_error)?;
        self.card = Some(card);
        Ok(())
    }

    fn transmit(&mut self, command: &[u8], recv: &mut [u8]) -> Result<usize> {
        let card = self.card()?;
        let response = card.transmit(command, recv).map_err(map_pcsc_error)?;
        Ok(response.len())
    }

    fn status(&mut self, recv: &mut [u8]) -> Result<usize> {
        let card = self.card()?;
        let status = card.status2_owned().map_err(map_pcsc_error)?;
        let atr = status.atr();
        if atr.len() > recv.len() {
            return Err(Error::InsufficientBuffer {
                needed: atr.len(),
                capacity: recv.len(),
            });
        }
        recv[..atr.len()].copy_from_slice(atr);
        Ok(atr.len())
    }

    fn control(&mut self, code: u32, command: &[u8], recv: &mut [u8]) -> Result<usize> {
        let card = self.card()?;
        let response = card
            .control(pcsc::ctl_code(code.into()), command, recv)
            .map_err(map_pcsc_error)?;
        Ok(response.len())
    }

    fn disconnect(&mut self) -> Result<()> {
        if let Some(card) = self.card.take() {
            card.disconnect(Disposition::LeaveCard)
                .map_err(|(_, e)| map_pcsc_error(e))?;
        }
        Ok(())
    }
}

impl Drop for PcscTransport {
    fn drop(&mut self) {
        if let Err(e) = self.disconnect() {
            log::warn!("failed to disconnect on drop: {}", e);
        }
    }
}
