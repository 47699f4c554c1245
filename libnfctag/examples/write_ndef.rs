// Write an NDEF Text record to an EM4423 tag and read it back.
//
// Run with: cargo run -p libnfctag --example write_ndef --features pcsc -- "Hello, world!"

use anyhow::Context;
use libnfctag::prelude::*;
use libnfctag::transport::PcscTransport;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let text = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Hello, world!".to_string());

    let transport = PcscTransport::open().context("failed to establish PC/SC context")?;
    let mut session = SessionBuilder::new()
        .with_transport(Box::new(transport))
        .build()?;
    let _ = session.disable_buzzer();

    println!("Waiting for an EM4423 tag on {} ...", session.reader());
    let mut tag = session.wait_for_tag()?;

    let pages = tag
        .em4423()
        .write_ndef_text(text.as_bytes())
        .with_context(|| format!("failed to write {:?}", text))?;
    println!("Wrote {} pages", pages);

    let record = tag.em4423().read_ndef_text()?;
    println!("Read back: {}", String::from_utf8_lossy(record.text()));

    tag.disconnect()?;
    Ok(())
}
