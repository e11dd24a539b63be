// rfidrw-rs/rfidrw/src/protocol/responses/em4100.rs

use crate::constants::{CMD_EM4100_ANSWER, EM4100_ID_LEN};
use crate::protocol::frame::InboundFrame;
use crate::protocol::parser;
use crate::types::TagId;
use crate::Result;

/// Decode an EM4100 answer (response code = 0x90)
/// Payload layout: status(1) + id(5). A short answer (size 6) means the
/// reader did not see a card.
pub fn decode_em4100(frame: &InboundFrame) -> Result<(u8, Option<TagId>)> {
    parser::expect_response_code(frame.command(), CMD_EM4100_ANSWER)?;

    let payload = frame.payload();
    let status = payload.first().copied().unwrap_or(0);
    if frame.response_length() < EM4100_ID_LEN as isize {
        return Ok((status, None));
    }

    let tag = parser::tag_id_at(payload, 1)?;
    Ok((status, Some(tag)))
}
