// Read-side demo for an ACR1581 with a tag on it: silences the buzzer,
// waits for a tag, prints its UID and type, and dumps EM4423 memory.
//
// Run with: RUST_LOG=info cargo run -p libnfctag --example read_tag --features pcsc

use libnfctag::prelude::*;
use libnfctag::transport::PcscTransport;

fn main() -> Result<()> {
    env_logger::init();

    let transport = PcscTransport::open()?;
    let mut session = SessionBuilder::new()
        .with_transport(Box::new(transport))
        .build()?;

    for reader in session.list_readers()? {
        println!("reader: {}", reader);
    }
    if let Err(e) = session.disable_buzzer() {
        eprintln!("could not disable buzzer: {}", e);
    }

    println!("Waiting for a tag on {} ...", session.reader());
    let mut tag = session.wait_for_tag()?;

    println!("UID: {}", tag.uid()?);
    let identity = tag.identify()?;
    println!("Tag: {}", identity);

    match tag.em4423().fast_read() {
        Ok(memory) => {
            print!("{}", memory);
            match libnfctag::ndef::decode_text_record(&memory.user_memory()) {
                Ok(record) => println!("NDEF text: {}", String::from_utf8_lossy(record.text())),
                Err(e) => println!("No NDEF text record: {}", e),
            }
        }
        Err(e) => println!("Fast read failed (not an EM4423?): {}", e),
    }

    tag.disconnect()?;
    Ok(())
}
