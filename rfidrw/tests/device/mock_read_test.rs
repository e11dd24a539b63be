#[path = "../common/mod.rs"]
mod common;

use rfidrw::config::ReaderConfig;
use rfidrw::transaction::TransactionState;
use rfidrw::transport::CompletionOrder;
use rfidrw::types::{TagRead, TransferStatus};

#[test]
fn read_tag_via_mock_device() {
    common::init_logging();
    let answer = common::fixtures::tag_answer();
    let mock = common::helpers::scripted_mock(&[&answer]);
    let mut dev = common::helpers::device_on(&mock);

    let read = dev.read_tag().unwrap();
    assert_eq!(read, TagRead::Tag(common::fixtures::sample_tag()));
    assert_eq!(read.to_string(), "123456789A");

    // armed inbound, command, phase-two inbound
    assert_eq!(mock.lock().submitted.len(), 3);
}

#[test]
fn no_tag_after_ten_attempts() {
    common::init_logging();
    let answer = common::fixtures::no_tag_answer();
    let answers: Vec<&[u8]> = (0..10).map(|_| &answer[..]).collect();
    let mock = common::helpers::scripted_mock(&answers);
    let mut dev = common::helpers::device_on(&mock);

    let read = dev.read_tag().unwrap();
    assert_eq!(read, TagRead::NoTag);
    assert_eq!(read.to_string(), "NOTAG");

    let sent = mock.lock().sent.clone();
    assert_eq!(sent.len(), 10);
    assert!(sent.iter().all(|s| s[3] == 0x10));
}

#[test]
fn tag_found_on_last_attempt() {
    let no_tag = common::fixtures::no_tag_answer();
    let tag = common::fixtures::tag_answer();
    let mut answers: Vec<&[u8]> = (0..9).map(|_| &no_tag[..]).collect();
    answers.push(&tag);
    let mock = common::helpers::scripted_mock(&answers);
    let mut dev = common::helpers::device_on(&mock);

    assert!(dev.read_tag().unwrap().is_tag());
    assert_eq!(mock.lock().sent.len(), 10);
}

#[test]
fn fewer_attempts_configured() {
    let no_tag = common::fixtures::no_tag_answer();
    let tag = common::fixtures::tag_answer();
    let mock = common::helpers::scripted_mock(&[&no_tag, &no_tag, &tag]);
    let mut dev = common::helpers::device_with_config(
        &mock,
        ReaderConfig::immediate().with_max_attempts(2),
    );

    assert_eq!(dev.read_tag().unwrap(), TagRead::NoTag);
    assert_eq!(mock.lock().sent.len(), 2);
}

#[test]
fn stalled_reader_reports_no_tag() {
    let mock = common::helpers::scripted_mock(&[]);
    {
        let mut m = mock.lock();
        m.set_order(CompletionOrder::Lifo);
        for _ in 0..10 {
            m.push_out_status(TransferStatus::Stall);
        }
    }
    let mut dev = common::helpers::device_on(&mock);
    assert_eq!(dev.read_tag().unwrap(), TagRead::NoTag);
    assert_eq!(
        dev.last_state(),
        TransactionState::Failed(TransferStatus::Stall)
    );
    assert_eq!(mock.lock().sent.len(), 10);
}
