// libnfctag/src/constants.rs
//! Common protocol constants used across the crate

/// Receive buffer capacity used for every exchange.
pub const RESPONSE_BUFFER_CAPACITY: usize = 2048;

/// Success status word: 0x90 0x00
pub const SW_SUCCESS: [u8; 2] = [0x90, 0x00];

/// Status word returned when the reader does not support the requested data
pub const SW_FUNCTION_NOT_SUPPORTED: [u8; 2] = [0x6A, 0x81];

/// PC/SC pseudo-APDU class byte
pub const CLA_PSEUDO: u8 = 0xFF;

/// READ BINARY / UPDATE BINARY / GET DATA instructions
pub const INS_READ_BINARY: u8 = 0xB0;
pub const INS_UPDATE_BINARY: u8 = 0xD6;
pub const INS_GET_DATA: u8 = 0xCA;

/// GET DATA P1 selectors
pub const GET_DATA_UID: u8 = 0x00;
pub const GET_DATA_ATS: u8 = 0x01;

/// EM4423 geometry: 4-byte pages, 0x00..=0x62 addressable, 0x04..=0x3F user memory
pub const EM4423_PAGE_SIZE: usize = 4;
pub const EM4423_FIRST_PAGE: u8 = 0x00;
pub const EM4423_LAST_PAGE: u8 = 0x62;
pub const EM4423_FIRST_USER_PAGE: u8 = 0x04;
pub const EM4423_LAST_USER_PAGE: u8 = 0x3F;
pub const EM4423_PAGE_COUNT: usize = 99;
pub const EM4423_USER_PAGE_COUNT: usize = 60;

/// Fast-read length: 99 pages * 4 bytes = 0x018C. Larger values wrap back to page 0.
pub const EM4423_MEMORY_BYTES: u16 = 0x018C;

/// NDEF Text TLV container bytes
pub const NDEF_TLV_HEADER: u8 = 0x03;
pub const NDEF_RECORD_HEADER: u8 = 0xD1;
pub const NDEF_TYPE_LENGTH: u8 = 0x01;
pub const NDEF_RECORD_TYPE_TEXT: u8 = 0x54;
pub const NDEF_TEXT_STATUS: u8 = 0x02;
pub const NDEF_TLV_TERMINATOR: u8 = 0xFE;

/// Longest text that keeps the single-byte payload length within 255
pub const NDEF_MAX_SHORT_TEXT_LEN: usize = 252;

/// Classification offsets inside a PC/SC status (ATR) response
pub const STATUS_DISCRIMINATOR_OFFSET: usize = 13;
pub const STATUS_MIN_CLASSIFY_LEN: usize = 15;

/// ACR1581 escape command that silences the buzzer, sent with control code 3500
pub const ACR_CONTROL_CODE: u32 = 3500;
pub const ACR_BUZZER_OFF: [u8; 6] = [0xE0, 0x00, 0x00, 0x21, 0x01, 0x01];
