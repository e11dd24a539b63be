#[path = "../common/mod.rs"]
mod common;

use rfidrw::protocol::Response;
use rfidrw::transaction::TransactionState;

#[test]
fn buzz_sends_single_frame() {
    let mock = common::helpers::scripted_mock(&[&[]]);
    let mut dev = common::helpers::device_on(&mock);

    dev.buzz(9).unwrap();
    assert_eq!(dev.last_state(), TransactionState::Complete);

    let sent = mock.lock().sent.clone();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].len(), 24);
    assert_eq!(hex::encode(&sent[0][..7]), "03010603090d04");
}

#[test]
fn buzz_then_read() {
    let tag = common::fixtures::tag_answer();
    let mock = common::helpers::scripted_mock(&[&[], &tag]);
    let mut dev = common::helpers::device_on(&mock);

    dev.buzz(3).unwrap();
    let read = dev.read_tag().unwrap();
    assert_eq!(read.tag(), Some(&common::fixtures::sample_tag()));
}

#[test]
fn tag_command_round_trip() {
    let answer = common::fixtures::tag_command_answer(&[0x00, 0x42]);
    let mock = common::helpers::scripted_mock(&[&answer]);
    let mut dev = common::helpers::device_on(&mock);

    let resp = dev.tag_command(&[0x01]).unwrap();
    assert_eq!(
        resp,
        Response::TagCommandAnswer {
            payload: vec![0x00, 0x42]
        }
    );

    let transport = dev.finish();
    drop(transport);
    assert_eq!(mock.lock().pending_count(), 0);
}
