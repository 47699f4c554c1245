// libnfctag/src/transport/traits.rs

use crate::types::ShareMode;
use crate::{Error, Result};

/// Transport trait abstracts the PC/SC reader away from protocol logic.
///
/// Receive-style methods write into a caller-owned buffer and return the
/// number of bytes written; they never own or resize that buffer.
pub trait Transport {
    /// Names of the readers currently attached
    fn list_readers(&mut self) -> Result<Vec<String>>;

    /// Connect to `reader`. Shared mode requires a tag in the field and
    /// fails with `Error::NoCard` otherwise.
    fn connect(&mut self, reader: &str, mode: ShareMode) -> Result<()>;

    /// Send a command APDU and write the response (data + status word)
    /// into `recv`.
    fn transmit(&mut self, command: &[u8], recv: &mut [u8]) -> Result<usize>;

    /// Write the ATR of the connected tag into `recv`.
    fn status(&mut self, recv: &mut [u8]) -> Result<usize>;

    /// Reader escape command (SCardControl). Default implementation
    /// reports the operation as unsupported.
    fn control(&mut self, code: u32, _command: &[u8], _recv: &mut [u8]) -> Result<usize> {
        Err(Error::UnsupportedOperation(format!(
            "control code {} not supported by this transport",
            code
        )))
    }

    /// Release the current connection. Disconnecting twice is not an error.
    fn disconnect(&mut self) -> Result<()>;
}
