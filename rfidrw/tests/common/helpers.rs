// helpers.rs: scripted mock devices

use rfidrw::config::ReaderConfig;
use rfidrw::device::{Device, Initialized};
use rfidrw::test_support::{SharedMock, seed_transaction};
use rfidrw::transport::MockTransport;

/// A mock scripted with one successful exchange per answer.
pub fn scripted_mock(answers: &[&[u8]]) -> SharedMock {
    let mut mock = MockTransport::new();
    for answer in answers {
        seed_transaction(&mut mock, answer);
    }
    SharedMock::new(mock)
}

/// Initialized device on top of `mock`, without settling delays.
pub fn device_on(mock: &SharedMock) -> Device<Initialized> {
    device_with_config(mock, ReaderConfig::immediate())
}

pub fn device_with_config(mock: &SharedMock, config: ReaderConfig) -> Device<Initialized> {
    Device::new_with_transport(Box::new(mock.clone()), config)
        .unwrap()
        .initialize()
        .unwrap()
}
