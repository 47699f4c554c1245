// libnfctag/src/protocol/mod.rs

pub mod apdu;
pub mod buffer;
pub mod codec;
pub mod commands;
pub mod parser;
pub mod response;

pub use apdu::CommandFrame;
pub use buffer::ResponseBuffer;
pub use commands::*;
pub use response::ResponseFrame;
