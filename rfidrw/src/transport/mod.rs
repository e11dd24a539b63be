// rfidrw-rs/rfidrw/src/transport/mod.rs

pub mod mock;
pub mod threaded;
pub mod traits;
#[cfg(feature = "usb")]
pub mod usb;

pub use mock::{CompletionOrder, MockReply, MockTransport};
pub use threaded::{InterruptIo, ThreadedTransport};
pub use traits::{Completion, CompletionHandler, Transport, TransferRequest};
#[cfg(feature = "usb")]
pub use usb::UsbTransport;
