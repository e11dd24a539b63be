// rfidrw-rs/rfidrw/src/protocol/commands/em4100.rs

/// Encode EM4100 read command payload (command code 0x10). The command
/// carries no parameters.
pub fn encode_em4100_read() -> Vec<u8> {
    Vec::new()
}
