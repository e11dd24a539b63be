// rfidrw-rs/rfidrw/src/utils/timeout.rs

//! Timeout and delay helpers.

use std::time::Duration;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Block the calling thread for `delay`. Zero delays return at once, which
/// keeps mock-driven tests fast.
pub fn settle(delay: Duration) {
    if !delay.is_zero() {
        log::trace!("settle {:?}", delay);
        std::thread::sleep(delay);
    }
}
