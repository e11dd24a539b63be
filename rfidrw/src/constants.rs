// rfidrw-rs/rfidrw/src/constants.rs
//! Common protocol constants used across the crate

/// USB vendor id of the reader/writer
pub const VENDOR_ID: u16 = 0x6688;

/// USB product id of the reader/writer
pub const PRODUCT_ID: u16 = 0x6850;

/// Interrupt IN endpoint (device -> host)
pub const ENDPOINT_IN: u8 = 0x85;

/// Interrupt OUT endpoint (host -> device)
pub const ENDPOINT_OUT: u8 = 0x03;

/// Endpoint marker the device writes at offset 0 of every answer
pub const INBOUND_ENDPOINT_MARKER: u8 = 0x05;

/// Frame start marker
pub const MESSAGE_START_MARKER: u8 = 0x01;

/// Frame end marker
pub const MESSAGE_END_MARKER: u8 = 0x04;

/// Bytes of framing around a payload: start, length, command, checksum, end
pub const MESSAGE_STRUCTURE_SIZE: usize = 5;

/// Outbound (host -> device) frame length
pub const OUTBOUND_FRAME_LEN: usize = 24;

/// Inbound (device -> host) frame length
pub const INBOUND_FRAME_LEN: usize = 48;

/// Largest payload that fits an outbound frame (24 - tag - 5 framing bytes)
pub const MAX_PAYLOAD_LEN: usize = OUTBOUND_FRAME_LEN - 1 - MESSAGE_STRUCTURE_SIZE;

/// Largest message size an inbound frame can describe
pub const MAX_INBOUND_MESSAGE_SIZE: usize = INBOUND_FRAME_LEN - 1;

/// Offset of the tag id inside an EM4100 answer frame
pub const EM4100_ID_OFFSET: usize = 5;

/// Length of an EM4100 tag id
pub const EM4100_ID_LEN: usize = 5;

/// Commands (host -> device)
pub const CMD_BUZZER: u8 = 0x03;
pub const CMD_EM4100_READ: u8 = 0x10;
pub const CMD_TAG_COMMAND: u8 = 0x13;

/// Answers (device -> host)
pub const CMD_EM4100_ANSWER: u8 = 0x90;
pub const CMD_TAG_COMMAND_ANSWER: u8 = 0x93;
