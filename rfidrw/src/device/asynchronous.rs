// rfidrw-rs/rfidrw/src/device/asynchronous.rs

#![cfg(feature = "async")]

use std::sync::{Arc, Mutex};

use crate::device::handle::{Device, Initialized};
use crate::protocol::Response;
use crate::types::TagRead;
use crate::{Error, Result};

/// Tokio-facing wrapper around an initialized device. Every call runs the
/// blocking exchange on the blocking pool; calls are serialized by the
/// device lock.
#[derive(Clone)]
pub struct AsyncDevice {
    inner: Arc<Mutex<Device<Initialized>>>,
}

impl AsyncDevice {
    pub fn new(device: Device<Initialized>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(device)),
        }
    }

    async fn with_device<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Device<Initialized>) -> Result<T> + Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || {
            let mut device = inner
                .lock()
                .map_err(|_| Error::Task("device lock poisoned".into()))?;
            f(&mut *device)
        })
        .await
        .map_err(|e| Error::Task(e.to_string()))?
    }

    pub async fn read_tag(&self) -> Result<TagRead> {
        self.with_device(|d| d.read_tag()).await
    }

    pub async fn buzz(&self, duration: u8) -> Result<()> {
        self.with_device(move |d| d.buzz(duration)).await
    }

    pub async fn tag_command(&self, payload: Vec<u8>) -> Result<Response> {
        self.with_device(move |d| d.tag_command(&payload)).await
    }

    /// Recover the device once no other clone is alive.
    pub fn into_inner(self) -> Result<Device<Initialized>> {
        let mutex = Arc::try_unwrap(self.inner)
            .map_err(|_| Error::Task("device still shared".into()))?;
        mutex
            .into_inner()
            .map_err(|_| Error::Task("device lock poisoned".into()))
    }
}
