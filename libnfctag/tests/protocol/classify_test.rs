use libnfctag::tag::{CLASSIFICATION_RULES, TagIdentity, classify, disambiguate_via_ats};

use super::common::fixtures;

#[test]
fn card_name_table() {
    let cases = [
        ((0x00, 0x01), TagIdentity::MifareClassic1K),
        ((0x00, 0x02), TagIdentity::MifareClassic4K),
        ((0x00, 0x03), TagIdentity::MifareUltralightOrNTAG2xx),
        ((0x00, 0x26), TagIdentity::MifareMini),
        ((0xF0, 0x04), TagIdentity::Topaz),
        ((0xF0, 0x11), TagIdentity::FeliCa212K),
        ((0xF0, 0x12), TagIdentity::FeliCa424K),
        ((0xFF, 0x00), TagIdentity::Unknown),
        ((0x12, 0x34), TagIdentity::Unidentified),
    ];
    for ((hi, lo), expected) in cases {
        assert_eq!(
            classify(&fixtures::storage_atr(hi, lo)),
            expected,
            "{:02X} {:02X}",
            hi,
            lo
        );
    }
}

#[test]
fn iso14443_4_prefix_and_ats() {
    let atr = fixtures::iso14443_4_atr();
    assert_eq!(classify(&atr), TagIdentity::DesfireOrNTAG424DNA);
    assert_eq!(
        classify(&atr).refine_with_ats(&fixtures::desfire_ev3_ats()),
        TagIdentity::DesfireEv3
    );
    assert_eq!(
        classify(&atr).refine_with_ats(&fixtures::ntag424_ats()),
        TagIdentity::Ntag424Dna
    );
    assert_eq!(disambiguate_via_ats(&[0x06, 0x75]), None);
}

#[test]
fn short_status_is_unidentified() {
    assert_eq!(classify(&[]), TagIdentity::Unidentified);
    assert_eq!(
        classify(&fixtures::iso14443_4_atr()[..14]),
        TagIdentity::Unidentified
    );
}

#[test]
fn card_name_rules_come_first() {
    assert_eq!(CLASSIFICATION_RULES[0].1, TagIdentity::MifareClassic1K);
    // ISO 14443-4 prefix with a Classic 1K card name still reads as Classic 1K
    let mut atr = fixtures::iso14443_4_atr();
    atr[13] = 0x00;
    atr[14] = 0x01;
    assert_eq!(classify(&atr), TagIdentity::MifareClassic1K);
}
