#[path = "../common/mod.rs"]
mod common;

use std::sync::mpsc;

use rfidrw::Error;
use rfidrw::transport::{MockTransport, Transport, TransferRequest};
use rfidrw::types::TransferStatus;

#[test]
fn event_failure_and_recovery() {
    let mut m = MockTransport::new();
    m.set_event_failures(1);

    let (tx, rx) = mpsc::channel();
    m.submit_transfer(
        TransferRequest::inbound(0x85, 48, 1000),
        Box::new(move |c| {
            let _ = tx.send(c.status);
        }),
    )
    .unwrap();

    // First pump fails (simulated)
    assert!(matches!(m.handle_events(), Err(Error::Timeout)));
    assert!(rx.try_recv().is_err());

    // Second pump resolves the transfer
    m.handle_events().unwrap();
    assert_eq!(rx.try_recv().unwrap(), TransferStatus::TimedOut);
}

#[test]
fn scripted_in_status() {
    let mut m = MockTransport::new();
    m.push_in_status(TransferStatus::NoDevice);

    let (tx, rx) = mpsc::channel();
    m.submit_transfer(
        TransferRequest::inbound(0x85, 48, 0),
        Box::new(move |c| {
            let _ = tx.send((c.status, c.actual_length));
        }),
    )
    .unwrap();
    m.handle_events().unwrap();
    assert_eq!(rx.try_recv().unwrap(), (TransferStatus::NoDevice, 0));
}
