// rfidrw-rs/rfidrw/src/device/builder.rs

use crate::config::{ReaderConfig, SettleDelays};
use crate::device::handle::{Device, Uninitialized};
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct a Device with optional configuration.
#[derive(Default)]
pub struct DeviceBuilder {
    transport: Option<Box<dyn Transport>>,
    config: ReaderConfig,
}

impl DeviceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_config(mut self, config: ReaderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn max_attempts(mut self, max_attempts: usize) -> Self {
        self.config = self.config.with_max_attempts(max_attempts);
        self
    }

    pub fn settle_delays(mut self, settle: SettleDelays) -> Self {
        self.config = self.config.with_settle_delays(settle);
        self
    }

    /// Open the first reader on the bus unless a transport was provided.
    #[cfg(feature = "usb")]
    pub fn open_usb(mut self) -> Result<Self> {
        if self.transport.is_none() {
            self.transport = Some(Box::new(crate::transport::UsbTransport::open()?));
        }
        Ok(self)
    }

    /// Consume the builder and return an uninitialized Device.
    /// Requires a transport to be provided; otherwise returns DeviceNotFound.
    pub fn build_uninitialized(self) -> Result<Device<Uninitialized>> {
        match self.transport {
            Some(t) => Device::new_with_transport(t, self.config),
            None => Err(Error::DeviceNotFound),
        }
    }

    /// Build and initialize in one go.
    pub fn build(self) -> Result<Device<crate::device::Initialized>> {
        self.build_uninitialized()?.initialize()
    }
}
