// libnfctag/src/lib.rs

//! libnfctag
//!
//! APDU codec and tag-identification layer for contactless tags behind a
//! PC/SC reader: EM4423 page access, NDEF text records and tag
//! classification from ATR/ATS bytes.
#![warn(missing_docs)]

pub mod constants;
pub mod em4423;
pub mod error;
pub mod ndef;
pub mod prelude;
pub mod protocol;
pub mod session;
pub mod tag;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
