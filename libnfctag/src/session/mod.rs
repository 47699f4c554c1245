// libnfctag/src/session/mod.rs

pub mod builder;
pub mod handle;
pub mod poll;

pub use builder::SessionBuilder;
pub use handle::{Connected, Disconnected, Session};
pub use poll::PollConfig;
