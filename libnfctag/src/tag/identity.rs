// libnfctag/src/tag/identity.rs

use derive_more::Display;

/// Tag family as far as the reader's status/ATS bytes let us tell.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagIdentity {
    #[display(fmt = "Mifare Classic 1k")]
    MifareClassic1K,
    #[display(fmt = "Mifare Classic 4k")]
    MifareClassic4K,
    #[display(fmt = "Mifare Ultralight or NTAG2xx")]
    MifareUltralightOrNTAG2xx,
    #[display(fmt = "Mifare Mini")]
    MifareMini,
    #[display(fmt = "Topaz/Jewel")]
    Topaz,
    #[display(fmt = "FeliCa 212K")]
    FeliCa212K,
    #[display(fmt = "FeliCa 424K")]
    FeliCa424K,
    #[display(fmt = "Mifare Desfire EV3 8k or NTAG 424 DNA TT")]
    DesfireOrNTAG424DNA,
    /// Resolved from `DesfireOrNTAG424DNA` by the ATS
    #[display(fmt = "Mifare Desfire EV3 8k")]
    DesfireEv3,
    /// Resolved from `DesfireOrNTAG424DNA` by the ATS
    #[display(fmt = "NTAG 424 DNA TT")]
    Ntag424Dna,
    /// The reader flagged the card name as unknown (0xFF)
    #[display(fmt = "UNKNOWN TAG")]
    Unknown,
    #[display(fmt = "UNIDENTIFIED TAG")]
    Unidentified,
}

impl TagIdentity {
    /// Only the Desfire/NTAG 424 ambiguity can be narrowed by an ATS.
    pub fn needs_ats(&self) -> bool {
        matches!(self, TagIdentity::DesfireOrNTAG424DNA)
    }

    /// Apply the ATS signature table if this identity is the ambiguous
    /// one; every other identity is returned unchanged, as is the
    /// ambiguous one when no signature matches.
    pub fn refine_with_ats(self, ats: &[u8]) -> TagIdentity {
        if !self.needs_ats() {
            return self;
        }
        super::ats::disambiguate_via_ats(ats).unwrap_or(self)
    }

    /// False for `Unknown` and `Unidentified`.
    pub fn is_identified(&self) -> bool {
        !matches!(self, TagIdentity::Unknown | TagIdentity::Unidentified)
    }
}
