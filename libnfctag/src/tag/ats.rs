// libnfctag/src/tag/ats.rs

use crate::protocol::parser::has_prefix;
use crate::tag::TagIdentity;

/// Known 6-byte ATS prefixes
pub const ATS_SIGNATURES: &[([u8; 6], TagIdentity)] = &[
    ([0x06, 0x75, 0x77, 0x81, 0x02, 0x80], TagIdentity::DesfireEv3),
    ([0x06, 0x77, 0x77, 0x71, 0x02, 0x80], TagIdentity::Ntag424Dna),
];

/// Resolve a Desfire/NTAG 424 DNA tag from its ATS. `None` when the ATS
/// matches no known signature.
pub fn disambiguate_via_ats(ats: &[u8]) -> Option<TagIdentity> {
    ATS_SIGNATURES
        .iter()
        .find(|(signature, _)| has_prefix(ats, signature))
        .map(|(_, identity)| *identity)
}
