// rfidrw-rs/rfidrw/src/prelude.rs

pub use crate::config::{ReaderConfig, SettleDelays};
pub use crate::device::{Device, DeviceBuilder, Initialized, Uninitialized};
pub use crate::protocol::{Command, InboundFrame, OutboundFrame, Response};
pub use crate::retry::{RetryOutcome, RetryPolicy};
pub use crate::transaction::{Orchestrator, TransactionState};
pub use crate::transport::Transport;
pub use crate::{Direction, Error, Result, TagId, TagRead, TransferId, TransferStatus};

#[cfg(feature = "async")]
pub use crate::device::AsyncDevice;
#[cfg(feature = "usb")]
pub use crate::transport::UsbTransport;

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, bytes_to_hex_upper, ms, parse_hex};
