// rfidrw-rs/rfidrw/src/protocol/responses/mod.rs

pub mod em4100;
pub mod tag;

pub use em4100::decode_em4100;
pub use tag::decode_tag_command;

use crate::constants::{CMD_EM4100_ANSWER, CMD_TAG_COMMAND_ANSWER};
use crate::protocol::frame::InboundFrame;
use crate::protocol::parser;
use crate::types::TagId;

/// High-level Response enum. Per-answer decoders live in
/// `protocol::responses::<name>.rs` and are dispatched here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// EM4100 answer (0x90). `tag` is `None` when the reader saw no card.
    Em4100Id { status: u8, tag: Option<TagId> },
    /// Tag command answer (0x93), payload left undecoded.
    TagCommandAnswer { payload: Vec<u8> },
    /// Any other answer code.
    Other { code: u8, payload: Vec<u8> },
}

impl Response {
    /// Decode an inbound frame. When `expected` is given the response code
    /// must match it.
    pub fn decode(expected: Option<u8>, frame: &InboundFrame) -> crate::Result<Self> {
        if let Some(code) = expected {
            parser::expect_response_code(frame.command(), code)?;
        }

        match frame.command() {
            CMD_EM4100_ANSWER => {
                let (status, tag) = em4100::decode_em4100(frame)?;
                Ok(Self::Em4100Id { status, tag })
            }
            CMD_TAG_COMMAND_ANSWER => Ok(Self::TagCommandAnswer {
                payload: tag::decode_tag_command(frame),
            }),
            code => Ok(Self::Other {
                code,
                payload: frame.payload().to_vec(),
            }),
        }
    }

    /// Return the response code byte associated with this response variant.
    pub fn response_code(&self) -> u8 {
        match self {
            Response::Em4100Id { .. } => CMD_EM4100_ANSWER,
            Response::TagCommandAnswer { .. } => CMD_TAG_COMMAND_ANSWER,
            Response::Other { code, .. } => *code,
        }
    }
}
