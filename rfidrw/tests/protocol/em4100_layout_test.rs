#[path = "../common/mod.rs"]
mod common;

use rfidrw::Error;
use rfidrw::em4100;

#[test]
fn sample_tag_layout() {
    let layout = em4100::encode(&common::fixtures::sample_tag_bytes());
    assert_eq!(layout, common::fixtures::sample_layout());
    assert_eq!(hex::encode_upper(layout), "FFFF8CA64A98F8CA96");
}

#[test]
fn layout_decodes_back() {
    let raw = em4100::decode(&common::fixtures::sample_layout()).unwrap();
    assert_eq!(raw, common::fixtures::sample_tag_bytes());
}

#[test]
fn column_parity_error_detected() {
    let mut layout = common::fixtures::sample_layout();
    // last byte: C3 C2 C1 C0 stop ... ; flip C3
    layout[8] ^= 0x10;
    assert!(matches!(
        em4100::decode(&layout),
        Err(Error::ParityMismatch {
            kind: "column",
            index: 0
        })
    ));
}

#[test]
fn stop_bit_error_detected() {
    let mut layout = em4100::encode(&[0; 5]);
    layout[8] |= 0x01;
    assert!(matches!(em4100::decode(&layout), Err(Error::Em4100Layout(_))));
}
