// fixtures.rs: provides commonly used test ids, layouts and answer frames

use rfidrw::constants::INBOUND_FRAME_LEN;
use rfidrw::test_support;
use rfidrw::types::TagId;

pub fn sample_tag_bytes() -> [u8; 5] {
    [0x12, 0x34, 0x56, 0x78, 0x9A]
}

pub fn sample_tag() -> TagId {
    TagId::from_bytes(sample_tag_bytes())
}

/// EM4100 layout of `sample_tag_bytes()`.
pub fn sample_layout() -> [u8; 9] {
    let bytes = hex::decode("FFFF8CA64A98F8CA96").unwrap();
    let mut out = [0u8; 9];
    out.copy_from_slice(&bytes);
    out
}

pub fn tag_answer() -> [u8; INBOUND_FRAME_LEN] {
    test_support::em4100_answer(sample_tag_bytes())
}

pub fn no_tag_answer() -> [u8; INBOUND_FRAME_LEN] {
    test_support::em4100_no_tag()
}

/// Tag-command answer (0x93) with the given payload.
pub fn tag_command_answer(payload: &[u8]) -> [u8; INBOUND_FRAME_LEN] {
    test_support::inbound_frame_bytes(0x93, payload)
}
