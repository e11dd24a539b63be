#[path = "../common/mod.rs"]
mod common;

use rfidrw::protocol::xor_checksum;

#[test]
fn xor_checksum_examples() {
    assert_eq!(xor_checksum(&[]), 0x00);
    assert_eq!(xor_checksum(&[0x01, 0x05, 0x10]), 0x14);
    assert_eq!(xor_checksum(&[0x01, 0x06, 0x03, 0x09]), 0x0d);
    assert_eq!(xor_checksum(&[0xff, 0xff]), 0x00);
}
