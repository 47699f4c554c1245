// fixtures.rs — provides commonly used test payloads and status bytes

/// PC/SC storage-card ATR with the given card name in bytes 13/14.
pub fn storage_atr(name_hi: u8, name_lo: u8) -> Vec<u8> {
    vec![
        0x3B, 0x8F, 0x80, 0x01, 0x80, 0x4F, 0x0C, 0xA0, 0x00, 0x00, 0x03, 0x06, 0x03, name_hi,
        name_lo, 0x00, 0x00, 0x00, 0x00, 0x68,
    ]
}

/// ATR of an ISO 14443-4 tag (Desfire EV3 or NTAG 424 DNA).
pub fn iso14443_4_atr() -> Vec<u8> {
    hex::decode("3B8180018080000000000000000000").expect("valid hex")
}

pub fn desfire_ev3_ats() -> Vec<u8> {
    vec![0x06, 0x75, 0x77, 0x81, 0x02, 0x80]
}

pub fn ntag424_ats() -> Vec<u8> {
    vec![0x06, 0x77, 0x77, 0x71, 0x02, 0x80]
}

pub fn sample_uid() -> Vec<u8> {
    vec![0x04, 0x5A, 0x3B, 0x12, 0x9C, 0x6F, 0x80]
}

/// 396 bytes of EM4423 memory: page N holds `[N, N, N, N]`.
pub fn em4423_memory() -> Vec<u8> {
    (0u8..99).flat_map(|p| [p; 4]).collect()
}

/// `em4423_memory()` with user memory cleared and `record` written from
/// page 0x04.
pub fn em4423_memory_with(record: &[u8]) -> Vec<u8> {
    let mut mem = em4423_memory();
    mem[16..].fill(0);
    mem[16..16 + record.len()].copy_from_slice(record);
    mem
}
