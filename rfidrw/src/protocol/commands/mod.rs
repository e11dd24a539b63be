// rfidrw-rs/rfidrw/src/protocol/commands/mod.rs

pub mod buzzer;
pub mod em4100;
pub mod tag;

pub use buzzer::encode_buzzer;
pub use em4100::encode_em4100_read;
pub use tag::encode_tag_command;

use crate::Result;
use crate::constants::{
    CMD_BUZZER, CMD_EM4100_ANSWER, CMD_EM4100_READ, CMD_TAG_COMMAND, CMD_TAG_COMMAND_ANSWER,
};
use crate::protocol::frame::OutboundFrame;

/// High-level Command enum. New commands should be added here and
/// their payload encoder placed in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Sound the buzzer for `duration` device ticks.
    Buzzer { duration: u8 },
    /// Ask the reader for the EM4100 id currently in the field.
    Em4100Read,
    /// Raw tag command (0x13). Only the framing is handled here.
    TagCommand { payload: Vec<u8> },
}

impl Command {
    /// Return the command code understood by the reader firmware.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::Buzzer { .. } => CMD_BUZZER,
            Self::Em4100Read => CMD_EM4100_READ,
            Self::TagCommand { .. } => CMD_TAG_COMMAND,
        }
    }

    /// Answer code the reader uses for this command, if it sends one.
    pub fn expected_response(&self) -> Option<u8> {
        match self {
            Self::Buzzer { .. } => None,
            Self::Em4100Read => Some(CMD_EM4100_ANSWER),
            Self::TagCommand { .. } => Some(CMD_TAG_COMMAND_ANSWER),
        }
    }

    /// Encode the command parameters (without framing).
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::Buzzer { duration } => encode_buzzer(*duration),
            Self::Em4100Read => encode_em4100_read(),
            Self::TagCommand { payload } => encode_tag_command(payload),
        }
    }

    /// Wrap the command into an outbound frame.
    pub fn to_frame(&self) -> Result<OutboundFrame> {
        OutboundFrame::new(self.command_code(), &self.encode())
    }
}
