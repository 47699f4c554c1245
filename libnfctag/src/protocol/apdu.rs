// libnfctag/src/protocol/apdu.rs

/// Command APDU. Immutable once built; the encoded bytes are produced at
/// construction time.
///
/// Forms:
/// - case 2 short:    `[CLA, INS, P1, P2, Le]`
/// - case 2 extended: `[CLA, INS, P1, P2, 0x00, Le_hi, Le_lo]`
/// - case 3 short:    `[CLA, INS, P1, P2, Lc, data..]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFrame {
    bytes: Vec<u8>,
}

impl CommandFrame {
    /// Command carrying data (case 3). Lc is a single byte, so `N` is
    /// limited to 255 at compile time.
    pub fn with_data<const N: usize>(cla: u8, ins: u8, p1: u8, p2: u8, data: &[u8; N]) -> Self {
        const { assert!(N <= u8::MAX as usize, "short Lc holds at most 255 bytes") };

        let mut bytes = Vec::with_capacity(5 + N);
        bytes.extend_from_slice(&[cla, ins, p1, p2, N as u8]);
        bytes.extend_from_slice(data);
        Self { bytes }
    }

    /// Command expecting `le` response bytes (case 2, short Le).
    pub fn read(cla: u8, ins: u8, p1: u8, p2: u8, le: u8) -> Self {
        Self {
            bytes: vec![cla, ins, p1, p2, le],
        }
    }

    /// Command expecting up to 65535 response bytes (case 2, extended Le).
    pub fn read_extended(cla: u8, ins: u8, p1: u8, p2: u8, le: u16) -> Self {
        let [hi, lo] = le.to_be_bytes();
        Self {
            bytes: vec![cla, ins, p1, p2, 0x00, hi, lo],
        }
    }

    pub fn cla(&self) -> u8 {
        self.bytes[0]
    }

    pub fn ins(&self) -> u8 {
        self.bytes[1]
    }

    pub fn p1(&self) -> u8 {
        self.bytes[2]
    }

    pub fn p2(&self) -> u8 {
        self.bytes[3]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl AsRef<[u8]> for CommandFrame {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
