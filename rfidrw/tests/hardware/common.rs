#![cfg(feature = "usb")]

//! Helpers for tests against a real reader.
//!
//! Opening returns `Ok(None)` when no reader is plugged in, so the tests
//! pass on machines without hardware.

use rfidrw::config::ReaderConfig;
use rfidrw::device::{Device, Initialized};
use rfidrw::transport::UsbTransport;
use rfidrw::{Error, Result};

/// Open and initialize the first reader on the bus.
///
/// - Ok(Some(device)) : reader found and initialized
/// - Ok(None) : no reader (acceptable in CI)
/// - Err(e) : any other failure
pub fn open_and_initialize_device() -> Result<Option<Device<Initialized>>> {
    match UsbTransport::open() {
        Ok(transport) => {
            let device = Device::new_with_transport(Box::new(transport), ReaderConfig::default())?;
            Ok(Some(device.initialize()?))
        }
        Err(Error::DeviceNotFound) => Ok(None),
        Err(e) => Err(e),
    }
}
