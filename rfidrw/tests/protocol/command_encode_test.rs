#[path = "../common/mod.rs"]
mod common;

use rfidrw::Error;
use rfidrw::constants::{MAX_PAYLOAD_LEN, OUTBOUND_FRAME_LEN};
use rfidrw::protocol::Command;

#[test]
fn em4100_read_frame_bytes() {
    let buf = Command::Em4100Read.to_frame().unwrap().encode();
    let mut expected = [0u8; OUTBOUND_FRAME_LEN];
    expected[..6].copy_from_slice(&hex::decode("030105101404").unwrap());
    assert_eq!(buf, expected);
}

#[test]
fn buzzer_frame_bytes() {
    let buf = Command::Buzzer { duration: 9 }.to_frame().unwrap().encode();
    assert_eq!(hex::encode(&buf[..7]), "03010603090d04");
}

#[test]
fn tag_command_frame_carries_payload() {
    let cmd = Command::TagCommand {
        payload: vec![0xA0, 0xA1, 0xA2],
    };
    let buf = cmd.to_frame().unwrap().encode();
    assert_eq!(buf[2], 8);
    assert_eq!(buf[3], 0x13);
    assert_eq!(&buf[4..7], &[0xA0, 0xA1, 0xA2]);
    assert_eq!(buf[8], 0x04);
}

#[test]
fn oversized_tag_command_rejected() {
    let cmd = Command::TagCommand {
        payload: vec![0; MAX_PAYLOAD_LEN + 1],
    };
    assert!(matches!(
        cmd.to_frame(),
        Err(Error::PayloadTooLarge { .. })
    ));
}
