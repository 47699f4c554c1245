//! Timing helpers for the card-presence poll.

use std::time::Duration;

/// Delay between connect attempts while waiting for a tag. Values much
/// lower than this make some readers never report the card.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 50;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Convenience: default poll interval as Duration.
pub fn default_poll_interval() -> Duration {
    ms(DEFAULT_POLL_INTERVAL_MS)
}
