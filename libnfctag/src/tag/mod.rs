// libnfctag/src/tag/mod.rs

//! Tag identification from reader status and ATS bytes.

pub mod ats;
pub mod classify;
mod identity;

pub use ats::disambiguate_via_ats;
pub use classify::{CLASSIFICATION_RULES, Rule, classify};
pub use identity::TagIdentity;
