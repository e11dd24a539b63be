// rfidrw-rs/rfidrw/src/error.rs

use thiserror::Error;

use crate::protocol::FramingError;
use crate::types::TransferStatus;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("device not found")]
    DeviceNotFound,

    // rusb stays optional so the codec builds without libusb
    #[cfg(feature = "usb")]
    #[error("usb error: {0}")]
    Usb(#[from] rusb::Error),

    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("payload too large: at most {max} bytes, got {actual}")]
    PayloadTooLarge { max: usize, actual: usize },

    #[error("malformed frame: {}", describe_issues(.0))]
    Framing(Vec<FramingError>),

    #[error("transfer failed: {status}")]
    Transfer { status: TransferStatus },

    #[error("no transfer pending")]
    NoPendingTransfer,

    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse { expected: u8, actual: u8 },

    #[error("em4100 parity mismatch in {kind} {index}")]
    ParityMismatch { kind: &'static str, index: usize },

    #[error("em4100 layout error: {0}")]
    Em4100Layout(String),

    #[error("operation timed out")]
    Timeout,

    #[cfg(feature = "async")]
    #[error("background task failed: {0}")]
    Task(String),
}

impl Error {
    /// Whether a transaction attempt that failed with this error may be
    /// repeated on a flaky link.
    pub fn is_transient(&self) -> bool {
        match self {
            Error::Transfer { .. }
            | Error::Timeout
            | Error::NoPendingTransfer
            | Error::Framing(_) => true,
            #[cfg(feature = "usb")]
            Error::Usb(e) => matches!(
                e,
                rusb::Error::Timeout
                    | rusb::Error::Pipe
                    | rusb::Error::Io
                    | rusb::Error::Overflow
                    | rusb::Error::Busy
                    | rusb::Error::Interrupted
            ),
            _ => false,
        }
    }
}

fn describe_issues(issues: &[FramingError]) -> String {
    issues
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, Error>;
