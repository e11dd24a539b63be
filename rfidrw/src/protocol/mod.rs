// rfidrw-rs/rfidrw/src/protocol/mod.rs

pub mod checksum;
pub mod commands;
pub mod frame;
pub mod parser;
pub mod responses;

pub use checksum::xor_checksum;
pub use commands::*;
pub use frame::{FramingError, InboundFrame, OutboundFrame};
pub use responses::*;
