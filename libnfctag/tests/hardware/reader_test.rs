#![cfg(feature = "pcsc")]

use libnfctag::Result;
use serial_test::serial;

use super::common;

// These tests require a real ACR1581 and, where noted, an EM4423 tag on
// the reader. They are marked `#[ignore]` so CI does not attempt to run
// them. Run manually with:
//
// cargo test -p libnfctag --test hardware --features pcsc -- --ignored

#[test]
#[ignore]
#[serial]
fn list_readers_and_disable_buzzer() -> Result<()> {
    let Some(mut session) = common::open_first_reader()? else {
        return Ok(());
    };
    assert!(!session.list_readers()?.is_empty());
    session.disable_buzzer()
}

#[test]
#[ignore]
#[serial]
fn identify_tag_on_reader() -> Result<()> {
    let Some(session) = common::open_first_reader()? else {
        return Ok(());
    };
    let mut tag = session.wait_for_tag()?;
    let uid = tag.uid()?;
    assert!(!uid.is_empty());
    let _identity = tag.identify()?;
    tag.disconnect()?;
    Ok(())
}

#[test]
#[ignore]
#[serial]
fn em4423_fast_read_is_idempotent() -> Result<()> {
    let Some(session) = common::open_first_reader()? else {
        return Ok(());
    };
    let mut tag = session.wait_for_tag()?;
    let first = tag.em4423().fast_read()?;
    let second = tag.em4423().fast_read()?;
    assert_eq!(first, second);
    Ok(())
}
