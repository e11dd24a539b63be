#[path = "../common/mod.rs"]
mod common;

use rfidrw::protocol::{FramingError, InboundFrame, OutboundFrame};

#[test]
fn outbound_encode_decode() {
    let frame = OutboundFrame::new(0x13, &[0xde, 0xad]).unwrap();
    let buf = frame.encode();
    let decoded = OutboundFrame::decode(&buf).unwrap();
    assert_eq!(decoded, frame);
}

#[test]
fn clean_em4100_answer() {
    common::init_logging();
    let raw = common::fixtures::tag_answer();
    assert_eq!(&raw[..4], &[0x05, 0x01, 0x0B, 0x90]);

    let frame = InboundFrame::parse(&raw);
    assert!(frame.is_well_formed());
    assert_eq!(frame.command(), 0x90);
    assert_eq!(frame.tag_id(), Some(common::fixtures::sample_tag()));
}

#[test]
fn bad_start_marker_is_the_only_issue() {
    common::init_logging();
    let mut raw = common::fixtures::tag_answer();
    raw[1] = 0x02;
    let frame = InboundFrame::parse(&raw);
    assert_eq!(
        frame.issues(),
        &[FramingError::BadStartMarker { actual: 0x02 }]
    );
    // best-effort fields are still there
    assert_eq!(frame.command(), 0x90);
    assert_eq!(frame.tag_id(), Some(common::fixtures::sample_tag()));
}

#[test]
fn missing_end_marker_recorded() {
    common::init_logging();
    let mut raw = common::fixtures::tag_answer();
    raw[11] = 0x00;
    let frame = InboundFrame::parse(&raw);
    assert_eq!(
        frame.issues(),
        &[FramingError::BadEndMarker { actual: Some(0x00) }]
    );
    assert!(frame.validate().is_err());
}

#[test]
fn no_tag_answer_is_short() {
    let frame = InboundFrame::parse(&common::fixtures::no_tag_answer());
    assert!(frame.is_well_formed());
    assert_eq!(frame.response_length(), 0);
    assert!(frame.tag_id().is_none());
}
