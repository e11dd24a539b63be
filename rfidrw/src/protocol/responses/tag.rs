// rfidrw-rs/rfidrw/src/protocol/responses/tag.rs

use crate::protocol::frame::InboundFrame;

/// Decode a tag command answer (response code = 0x93). The contents are
/// card-family specific and returned as-is.
pub fn decode_tag_command(frame: &InboundFrame) -> Vec<u8> {
    frame.payload().to_vec()
}
