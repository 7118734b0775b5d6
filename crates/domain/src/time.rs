//! Time helpers for sequence timeouts.

use std::time::Duration;

use chrono::{DateTime, Utc};

/// UTC timestamp recorded when a sequence run starts.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Whether strictly more than `timeout` has passed between `since` and `now`.
///
/// A clock that went backwards counts as no time elapsed.
#[must_use]
pub fn has_elapsed(since: Timestamp, now: Timestamp, timeout: Duration) -> bool {
    match (now - since).to_std() {
        Ok(elapsed) => elapsed > timeout,
        Err(_) => false,
    }
}
