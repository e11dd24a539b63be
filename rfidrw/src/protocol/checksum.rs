// rfidrw-rs/rfidrw/src/protocol/checksum.rs

/// Compute the frame checksum: running XOR over start marker, length,
/// command and payload bytes.
pub fn xor_checksum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |acc, &b| acc ^ b)
}
