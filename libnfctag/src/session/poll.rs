// libnfctag/src/session/poll.rs

use std::time::Duration;

use crate::Result;
use crate::utils::default_poll_interval;

/// Card-presence poll settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    /// Delay between connect attempts
    pub interval: Duration,
    /// Give up after this many attempts; `None` polls until a tag shows up
    /// or a non-retryable error occurs.
    pub max_attempts: Option<usize>,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: default_poll_interval(),
            max_attempts: None,
        }
    }
}

/// Run `attempt` until it succeeds, sleeping `config.interval` between
/// tries. Retryable errors are logged once at warn level; anything else
/// ends the loop immediately. When `max_attempts` runs out the last
/// retryable error is returned.
pub(crate) fn poll<T, F>(config: &PollConfig, mut attempt: F) -> Result<T>
where
    F: FnMut() -> Result<T>,
{
    let mut attempts = 0usize;
    let mut warned = false;
    loop {
        attempts += 1;
        match attempt() {
            Ok(value) => {
                log::debug!("poll succeeded after {} attempt(s)", attempts);
                return Ok(value);
            }
            Err(e) if e.is_retryable() => {
                if !warned {
                    log::warn!("waiting for tag: {}", e);
                    warned = true;
                }
                if config.max_attempts.is_some_and(|max| attempts >= max) {
                    log::debug!("giving up after {} attempt(s)", attempts);
                    return Err(e);
                }
                std::thread::sleep(config.interval);
            }
            Err(e) => {
                log::error!("poll aborted: {}", e);
                return Err(e);
            }
        }
    }
}
