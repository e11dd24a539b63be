// rfidrw-rs/rfidrw/src/transport/usb/mod.rs

#![cfg(feature = "usb")]

use std::sync::Arc;
use std::time::Duration;

use crate::constants::{ENDPOINT_IN, ENDPOINT_OUT, PRODUCT_ID, VENDOR_ID};
use crate::transport::threaded::{InterruptIo, ThreadedTransport};
use crate::transport::traits::{CompletionHandler, Transport, TransferRequest};
use crate::types::{TransferId, TransferStatus};
use crate::{Error, Result};

use rusb::UsbContext;
use rusb::{Context, DeviceHandle};

mod descriptor;
use descriptor::find_interrupt_endpoints;

/// Claimed device handle shared by the transfer workers.
pub struct UsbIo {
    handle: DeviceHandle<Context>,
}

impl InterruptIo for UsbIo {
    fn write_interrupt(
        &self,
        endpoint: u8,
        data: &[u8],
        timeout: Duration,
    ) -> std::result::Result<usize, TransferStatus> {
        self.handle
            .write_interrupt(endpoint, data, timeout)
            .map_err(status_of)
    }

    fn read_interrupt(
        &self,
        endpoint: u8,
        buf: &mut [u8],
        timeout: Duration,
    ) -> std::result::Result<usize, TransferStatus> {
        self.handle
            .read_interrupt(endpoint, buf, timeout)
            .map_err(status_of)
    }
}

/// rusb-backed transport. Each transfer is a blocking interrupt read or
/// write on its own worker thread, so the inbound transfer armed before a
/// command stays pending while the command is written.
pub struct UsbTransport {
    inner: ThreadedTransport<UsbIo>,
    interface: u8,
}

impl UsbTransport {
    /// Open the first reader (vendor 0x6688) found on the bus.
    pub fn open() -> Result<Self> {
        let ctx = Context::new()?;
        let mut found = 0usize;
        let mut opened = None;

        for device in ctx.devices()?.iter() {
            let dd = match device.device_descriptor() {
                Ok(dd) => dd,
                Err(e) => {
                    log::warn!("failed to get device descriptor: {}", e);
                    continue;
                }
            };
            if dd.vendor_id() != VENDOR_ID {
                continue;
            }
            found += 1;
            if dd.product_id() != PRODUCT_ID {
                log::debug!("unknown product id {:#06x}, trying anyway", dd.product_id());
            }
            if opened.is_none() {
                let handle = device.open()?;
                let (in_ep, out_ep, iface) = find_interrupt_endpoints(&device);
                opened = Some((handle, in_ep, out_ep, iface));
            }
        }
        log::debug!("found {} reader(s)", found);

        let (mut handle, in_ep, out_ep, iface) = opened.ok_or(Error::DeviceNotFound)?;
        let interface = iface.unwrap_or(0);

        // The HID driver grabs the reader on Linux; release it so the
        // interface can be claimed. NotFound / NotSupported mean there is
        // nothing to detach.
        match handle.detach_kernel_driver(interface) {
            Ok(()) | Err(rusb::Error::NotFound) | Err(rusb::Error::NotSupported) => {}
            Err(e) => return Err(e.into()),
        }
        handle.claim_interface(interface)?;

        Ok(UsbTransport {
            inner: ThreadedTransport::new(
                Arc::new(UsbIo { handle }),
                in_ep.unwrap_or(ENDPOINT_IN),
                out_ep.unwrap_or(ENDPOINT_OUT),
            ),
            interface,
        })
    }

    /// Release the claimed interface. Fails with `Usb(Busy)` while a
    /// transfer worker still runs. Dropping the transport also closes the
    /// device handle.
    pub fn release(&mut self) -> Result<()> {
        let io = self.inner.io_mut().ok_or(Error::Usb(rusb::Error::Busy))?;
        io.handle.release_interface(self.interface)?;
        Ok(())
    }
}

/// Map a rusb error onto the terminal status libusb would report.
fn status_of(e: rusb::Error) -> TransferStatus {
    match e {
        rusb::Error::Timeout => TransferStatus::TimedOut,
        rusb::Error::NoDevice => TransferStatus::NoDevice,
        rusb::Error::Pipe => TransferStatus::Stall,
        rusb::Error::Overflow => TransferStatus::Overflow,
        rusb::Error::Interrupted => TransferStatus::Cancelled,
        _ => TransferStatus::Error,
    }
}

impl Transport for UsbTransport {
    fn submit_transfer(
        &mut self,
        request: TransferRequest,
        on_complete: CompletionHandler,
    ) -> Result<TransferId> {
        self.inner.submit_transfer(request, on_complete)
    }

    fn handle_events(&mut self) -> Result<()> {
        self.inner.handle_events()
    }

    fn cancel_transfer(&mut self, id: TransferId) -> Result<()> {
        self.inner.cancel_transfer(id)
    }

    fn in_endpoint(&self) -> u8 {
        self.inner.in_endpoint()
    }

    fn out_endpoint(&self) -> u8 {
        self.inner.out_endpoint()
    }
}
