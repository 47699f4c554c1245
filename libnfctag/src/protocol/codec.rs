// libnfctag/src/protocol/codec.rs

use crate::Result;
use crate::transport::Transport;
use crate::utils::bytes_to_hex_spaced;

use super::apdu::CommandFrame;
use super::buffer::ResponseBuffer;
use super::response::ResponseFrame;

/// Send one command APDU and collect its response.
///
/// The buffer is zeroed across its full capacity before the transport
/// writes to it, and the transport always receives the full capacity.
/// A transport failure is returned as-is; any transport success yields a
/// `ResponseFrame` whose status word the caller checks (see
/// `ResponseFrame::ensure_success`).
///
/// Both directions are echoed to the log in spaced hex, whatever the
/// status word says.
pub fn exchange(
    transport: &mut dyn Transport,
    buffer: &mut ResponseBuffer,
    command: &CommandFrame,
) -> Result<ResponseFrame> {
    let sent = command.as_bytes();
    let result = buffer.fill_with(|recv| transport.transmit(sent, recv));

    log::debug!("> {}", bytes_to_hex_spaced(sent));
    match result {
        Ok(received) => {
            log::debug!("< {}", bytes_to_hex_spaced(received));
            Ok(ResponseFrame::new(received.to_vec()))
        }
        Err(e) => {
            log::debug!("< transport error: {}", e);
            Err(e)
        }
    }
}

/// Same as `exchange` but for the status query: the ATR is read into the
/// shared buffer under the same zero-then-fill discipline.
pub fn query_status(transport: &mut dyn Transport, buffer: &mut ResponseBuffer) -> Result<Vec<u8>> {
    let atr = buffer.fill_with(|recv| transport.status(recv))?;
    log::debug!("status: {}", bytes_to_hex_spaced(atr));
    Ok(atr.to_vec())
}

/// Reader escape command over a Direct connection.
pub fn control(
    transport: &mut dyn Transport,
    buffer: &mut ResponseBuffer,
    code: u32,
    command: &[u8],
) -> Result<Vec<u8>> {
    log::debug!("> [ctl {}] {}", code, bytes_to_hex_spaced(command));
    let received = buffer.fill_with(|recv| transport.control(code, command, recv))?;
    log::debug!("< {}", bytes_to_hex_spaced(received));
    Ok(received.to_vec())
}
