#[path = "../common/mod.rs"]
mod common;

use rfidrw::Error;
use rfidrw::config::ReaderConfig;
use rfidrw::protocol::Command;
use rfidrw::test_support::seed_transaction;
use rfidrw::transaction::{Orchestrator, TransactionState};
use rfidrw::transport::{CompletionOrder, MockTransport};
use rfidrw::types::TransferStatus;

#[test]
fn two_exchanges_back_to_back() {
    common::init_logging();
    let first = common::fixtures::tag_answer();
    let second = common::fixtures::no_tag_answer();
    let mut mock = MockTransport::new();
    seed_transaction(&mut mock, &first);
    seed_transaction(&mut mock, &second);

    let mut o = Orchestrator::new(ReaderConfig::immediate());
    let frame = Command::Em4100Read.to_frame().unwrap();

    let mut dest = [0u8; 48];
    o.execute(&mut mock, &frame, &mut dest).unwrap();
    assert_eq!(dest, first);

    o.execute(&mut mock, &frame, &mut dest).unwrap();
    assert_eq!(dest, second);
    assert_eq!(mock.sent.len(), 2);
    assert!(o.in_flight().is_empty());
}

#[test]
fn phase_one_waits_for_both_completions() {
    let answer = common::fixtures::tag_answer();
    let mut mock = MockTransport::new();
    mock.set_order(CompletionOrder::Lifo);
    seed_transaction(&mut mock, &answer);

    let mut o = Orchestrator::new(ReaderConfig::immediate());
    let frame = Command::Em4100Read.to_frame().unwrap();
    let mut dest = [0u8; 48];
    o.execute(&mut mock, &frame, &mut dest).unwrap();

    // OUT first, armed IN second, then the phase-two IN
    assert_eq!(mock.events_handled, 3);
    assert_eq!(dest, answer);
}

#[test]
fn cancelled_transfer_fails_exchange() {
    let mut mock = MockTransport::new();
    mock.push_in_status(TransferStatus::Cancelled);

    let mut o = Orchestrator::new(ReaderConfig::immediate());
    let frame = Command::Buzzer { duration: 9 }.to_frame().unwrap();
    let mut dest = [0u8; 48];
    let err = o.execute(&mut mock, &frame, &mut dest).unwrap_err();
    assert!(matches!(
        err,
        Error::Transfer {
            status: TransferStatus::Cancelled
        }
    ));
    assert_eq!(
        o.last_state(),
        TransactionState::Failed(TransferStatus::Cancelled)
    );
}
