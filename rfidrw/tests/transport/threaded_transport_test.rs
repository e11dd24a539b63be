#[path = "../common/mod.rs"]
mod common;

use std::sync::Arc;

use rfidrw::config::ReaderConfig;
use rfidrw::constants::{CMD_BUZZER, CMD_EM4100_READ, ENDPOINT_IN, ENDPOINT_OUT};
use rfidrw::device::Device;
use rfidrw::test_support::{SimulatedReader, em4100_answer, inbound_frame_bytes};
use rfidrw::transport::ThreadedTransport;
use rfidrw::transaction::TransactionState;
use rfidrw::types::TagRead;

fn reader_with_tag(id: [u8; 5]) -> Arc<SimulatedReader> {
    Arc::new(SimulatedReader::new(move |cmd| {
        if cmd == CMD_EM4100_READ {
            em4100_answer(id).to_vec()
        } else {
            inbound_frame_bytes(cmd | 0x80, &[]).to_vec()
        }
    }))
}

#[test]
fn buzzer_then_read_on_blocking_reader() {
    common::init_logging();
    let sim = reader_with_tag(common::fixtures::sample_tag_bytes());
    let transport = ThreadedTransport::new(Arc::clone(&sim), ENDPOINT_IN, ENDPOINT_OUT);
    let mut dev = Device::new_with_transport(Box::new(transport), ReaderConfig::immediate())
        .unwrap()
        .initialize()
        .unwrap();

    dev.beep().unwrap();
    assert_eq!(dev.last_state(), TransactionState::Complete);
    assert_eq!(sim.commands().len(), 1);

    let read = dev.read_tag().unwrap();
    assert_eq!(read, TagRead::Tag(common::fixtures::sample_tag()));

    // one command per exchange, answered in order
    let commands = sim.commands();
    assert_eq!(commands.len(), 2);
    assert_eq!(commands[0][3], CMD_BUZZER);
    assert_eq!(commands[1][3], CMD_EM4100_READ);

    let _transport = dev.finish();
}

#[test]
fn empty_reports_read_as_no_tag() {
    let sim = Arc::new(SimulatedReader::new(|_| Vec::new()));
    let transport = ThreadedTransport::new(Arc::clone(&sim), ENDPOINT_IN, ENDPOINT_OUT);
    let config = ReaderConfig::immediate().with_max_attempts(2);
    let mut dev = Device::new_with_transport(Box::new(transport), config)
        .unwrap()
        .initialize()
        .unwrap();

    // Zero-length completions succeed but are never delivered
    assert_eq!(dev.read_tag().unwrap(), TagRead::NoTag);
    assert_eq!(sim.commands().len(), 2);
    assert_eq!(dev.last_state(), TransactionState::Complete);
}
