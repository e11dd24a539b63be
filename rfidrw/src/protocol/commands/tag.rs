// rfidrw-rs/rfidrw/src/protocol/commands/tag.rs

/// Encode a generic tag command payload (command code 0x13). The bytes are
/// passed through; length is checked when the frame is built.
pub fn encode_tag_command(payload: &[u8]) -> Vec<u8> {
    payload.to_vec()
}
