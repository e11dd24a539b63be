// rfidrw-rs/rfidrw/src/utils/mod.rs

//! Small helpers shared across the crate: hex formatting for logs and
//! display, and millisecond/delay helpers for the transaction phases.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
