#[path = "../common/mod.rs"]
mod common;

use std::sync::mpsc;

use rfidrw::transport::{MockTransport, Transport, TransferRequest};
use rfidrw::types::{Direction, TransferStatus};

#[test]
fn mock_transport_submit_and_complete() {
    let mut m = MockTransport::new();
    m.push_response(vec![0x05, 0x01]);

    let (tx, rx) = mpsc::channel();
    let tx_in = tx.clone();
    m.submit_transfer(
        TransferRequest::outbound(0x03, &[0xAA], 1000),
        Box::new(move |c| {
            let _ = tx.send(c);
        }),
    )
    .unwrap();
    m.submit_transfer(
        TransferRequest::inbound(0x85, 48, 1000),
        Box::new(move |c| {
            let _ = tx_in.send(c);
        }),
    )
    .unwrap();

    assert_eq!(m.sent, vec![vec![0xAA]]);
    m.handle_events().unwrap();
    m.handle_events().unwrap();

    let out = rx.try_recv().unwrap();
    assert_eq!(Direction::of_endpoint(out.endpoint), Direction::Out);
    assert_eq!(out.status, TransferStatus::Completed);

    let inb = rx.try_recv().unwrap();
    assert_eq!(inb.actual_length, 2);
    assert_eq!(inb.data(), &[0x05, 0x01]);
}

#[test]
fn handle_events_without_pending_fails() {
    let mut m = MockTransport::new();
    assert!(m.handle_events().is_err());
}
