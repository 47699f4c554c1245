// libnfctag/src/em4423/operations.rs

use crate::constants::{EM4423_FIRST_USER_PAGE, EM4423_MEMORY_BYTES, EM4423_PAGE_SIZE};
use crate::em4423::memory::Em4423Memory;
use crate::ndef::{LANG_EN, TextRecord, decode_text_record, encode_short_text_record};
use crate::protocol::Command;
use crate::protocol::parser::page_at;
use crate::session::{Connected, Session};
use crate::types::{Page, PageData};
use crate::{Error, Result};

/// Write one user-memory page (0x04..=0x3F). The address is checked before
/// anything is sent.
pub fn write_page(session: &mut Session<Connected>, page: u8, data: PageData) -> Result<()> {
    let page = Page::writable(page).inspect_err(|_| {
        log::warn!(
            "page 0x{:02X} is not a user memory page, refusing to write there",
            page
        )
    })?;

    log::debug!("writing {} to page {}", data.to_hex(), page);
    let frame = session.execute(&Command::WritePage {
        page: page.as_u8(),
        data,
    })?;

    if !frame.is_success() {
        log::warn!("tag refused write to page {}", page);
        return Err(Error::WriteRejected {
            page: page.as_u8(),
            status: frame.status(),
        });
    }

    log::info!("wrote page {}", page);
    Ok(())
}

/// Read one page (0x00..=0x62).
pub fn read_page(session: &mut Session<Connected>, page: u8) -> Result<PageData> {
    let page = Page::readable(page).inspect_err(|_| {
        log::warn!(
            "page 0x{:02X} is not a valid page, 0x62 is the last one",
            page
        )
    })?;

    log::debug!("reading page {}", page);
    let frame = session.execute(&Command::ReadPage { page: page.as_u8() })?;

    let rejected = || Error::ReadRejected {
        page: page.as_u8(),
        status: frame.status(),
    };
    if !frame.is_success() {
        log::error!("failed to read page {}", page);
        return Err(rejected());
    }
    let data = page_at(frame.data(), 0).map_err(|_| {
        log::error!(
            "page {} answered with only {} data bytes",
            page,
            frame.data().len()
        );
        rejected()
    })?;

    log::info!("page {}: {}", page, data.to_hex());
    Ok(data)
}

/// Read the whole tag (99 pages) with a single extended-length READ BINARY.
pub fn fast_read(session: &mut Session<Connected>) -> Result<Em4423Memory> {
    log::debug!("fast reading {} bytes", EM4423_MEMORY_BYTES);
    let frame = session.execute(&Command::FastRead {
        length: EM4423_MEMORY_BYTES,
    })?;

    if !frame.is_success() || frame.data().len() < Em4423Memory::BYTES {
        log::error!(
            "fast read failed ({} data bytes, status {:?})",
            frame.data().len(),
            frame.status()
        );
        return Err(Error::FastReadRejected {
            status: frame.status(),
        });
    }

    let memory = Em4423Memory::from_bytes(frame.data())?;
    log::info!("fast read {} pages", memory.pages().len());
    Ok(memory)
}

/// Write `bytes` to consecutive pages starting at `start_page`. The length
/// must be a multiple of 4 and every target page must be user memory; both
/// are checked before the first write. Returns the number of pages written.
pub fn write_user_memory(
    session: &mut Session<Connected>,
    start_page: u8,
    bytes: &[u8],
) -> Result<usize> {
    if bytes.len() % EM4423_PAGE_SIZE != 0 {
        return Err(Error::InvalidLength {
            expected: bytes.len().next_multiple_of(EM4423_PAGE_SIZE),
            actual: bytes.len(),
        });
    }

    let count = bytes.len() / EM4423_PAGE_SIZE;
    let pages = (0..count)
        .map(|i| {
            let page = u8::try_from(start_page as usize + i).unwrap_or(u8::MAX);
            Page::writable(page)
        })
        .collect::<Result<Vec<_>>>()
        .inspect_err(|e| log::warn!("refusing to write {} pages from page 0x{:02X}: {}", count, start_page, e))?;

    for (i, page) in pages.iter().enumerate() {
        let data = page_at(bytes, i * EM4423_PAGE_SIZE)?;
        write_page(session, page.as_u8(), data)?;
    }
    Ok(count)
}

/// Encode `text` as an NDEF Text record ("en") and write it from page 0x04.
pub fn write_ndef_text(session: &mut Session<Connected>, text: &[u8]) -> Result<usize> {
    let encoded = encode_short_text_record(text, LANG_EN)?;
    log::debug!(
        "ndef text record: {} bytes, {} padded",
        encoded.unpadded_len(),
        encoded.len()
    );
    write_user_memory(session, EM4423_FIRST_USER_PAGE, encoded.as_bytes())
}

/// Fast-read the tag and decode the Text record at the start of user memory.
pub fn read_ndef_text(session: &mut Session<Connected>) -> Result<TextRecord> {
    let memory = fast_read(session)?;
    decode_text_record(&memory.user_memory())
}
