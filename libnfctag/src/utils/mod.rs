//! Utilities for libnfctag: hex formatting for diagnostics and poll timing.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
