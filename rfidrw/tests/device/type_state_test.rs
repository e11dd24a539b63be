#[path = "../common/mod.rs"]
mod common;

use rfidrw::config::ReaderConfig;
use rfidrw::device::{Device, DeviceBuilder};
use rfidrw::transaction::TransactionState;
use rfidrw::transport::{MockTransport, Transport};

#[test]
fn initialize_transitions_and_config() {
    let boxed: Box<dyn Transport> = Box::new(MockTransport::new());
    let config = ReaderConfig::immediate().with_max_attempts(5);
    let device = Device::new_with_transport(boxed, config).unwrap();

    // Uninitialized device exposes its configuration
    assert_eq!(device.config().max_attempts, 5);

    // Transition to initialized
    let initialized = device.initialize().unwrap();
    assert_eq!(initialized.config().max_attempts, 5);
    assert_eq!(initialized.last_state(), TransactionState::Idle);
}

#[test]
fn builder_uses_defaults() {
    let device = DeviceBuilder::new()
        .with_transport(Box::new(MockTransport::new()))
        .build_uninitialized()
        .unwrap();
    assert_eq!(*device.config(), ReaderConfig::default());
    assert_eq!(device.config().settle.before_inbound_ms, 100);
}
