// rfidrw-rs/rfidrw/src/lib.rs

//! rfidrw
//!
//! Pure Rust driver for USB 125 kHz RFID reader/writers (vendor 0x6688).
//! Frames commands, runs the reader's two-phase interrupt exchange, retries
//! flaky EM4100 reads and encodes EM4100 tag layouts.
#![warn(missing_docs)]

pub mod config;
pub mod constants;
pub mod device;
pub mod em4100;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod retry;
pub mod test_support;
pub mod transaction;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
