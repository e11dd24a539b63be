// rfidrw-rs/rfidrw/src/transport/threaded.rs

//! Transfer-per-thread transport over blocking interrupt I/O.
//!
//! Every submitted transfer runs on its own worker thread, so an inbound
//! read left pending does not hold back an outbound write submitted after
//! it. Workers post finished transfers to a completion channel;
//! `handle_events` blocks on that channel and runs the completion handler
//! on the pumping thread.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use crate::transport::traits::{Completion, CompletionHandler, Transport, TransferRequest};
use crate::types::{Direction, TransferId, TransferStatus};
use crate::{Error, Result};

/// Blocking interrupt transfers on one device. A zero timeout waits
/// without limit, as with libusb.
pub trait InterruptIo: Send + Sync + 'static {
    fn write_interrupt(
        &self,
        endpoint: u8,
        data: &[u8],
        timeout: Duration,
    ) -> std::result::Result<usize, TransferStatus>;

    fn read_interrupt(
        &self,
        endpoint: u8,
        buf: &mut [u8],
        timeout: Duration,
    ) -> std::result::Result<usize, TransferStatus>;
}

/// Run one request to its terminal status.
fn perform<I: InterruptIo>(io: &I, id: TransferId, request: TransferRequest) -> Completion {
    let TransferRequest {
        endpoint,
        mut buffer,
        length,
        timeout_ms,
    } = request;
    let timeout = Duration::from_millis(timeout_ms);
    let len = length.min(buffer.len());
    let result = match Direction::of_endpoint(endpoint) {
        Direction::Out => io.write_interrupt(endpoint, &buffer[..len], timeout),
        Direction::In => io.read_interrupt(endpoint, &mut buffer[..len], timeout),
    };
    let (status, actual_length) = match result {
        Ok(n) => (TransferStatus::Completed, n),
        Err(status) => {
            log::debug!("transfer {} on {:#04x} ended {}", id, endpoint, status);
            (status, 0)
        }
    };
    Completion {
        id,
        endpoint,
        status,
        buffer,
        actual_length,
    }
}

pub struct ThreadedTransport<I: InterruptIo> {
    io: Arc<I>,
    in_ep: u8,
    out_ep: u8,
    done_tx: Sender<Completion>,
    done_rx: Receiver<Completion>,
    handlers: HashMap<TransferId, CompletionHandler>,
    next_id: u64,
}

impl<I: InterruptIo> ThreadedTransport<I> {
    pub fn new(io: Arc<I>, in_ep: u8, out_ep: u8) -> Self {
        let (done_tx, done_rx) = mpsc::channel();
        Self {
            io,
            in_ep,
            out_ep,
            done_tx,
            done_rx,
            handlers: HashMap::new(),
            next_id: 0,
        }
    }

    /// Exclusive access to the device, only while no worker holds it.
    pub fn io_mut(&mut self) -> Option<&mut I> {
        Arc::get_mut(&mut self.io)
    }

    /// Transfers whose handler has not run yet.
    pub fn pending_count(&self) -> usize {
        self.handlers.len()
    }
}

impl<I: InterruptIo> Transport for ThreadedTransport<I> {
    fn submit_transfer(
        &mut self,
        request: TransferRequest,
        on_complete: CompletionHandler,
    ) -> Result<TransferId> {
        if request.length > request.buffer.len() {
            return Err(Error::InvalidLength {
                expected: request.buffer.len(),
                actual: request.length,
            });
        }
        self.next_id += 1;
        let id = TransferId::new(self.next_id);
        self.handlers.insert(id, on_complete);

        let io = Arc::clone(&self.io);
        let done = self.done_tx.clone();
        thread::spawn(move || {
            // The receiver is gone once the transport is dropped.
            let _ = done.send(perform(&*io, id, request));
        });
        Ok(id)
    }

    fn handle_events(&mut self) -> Result<()> {
        loop {
            if self.handlers.is_empty() {
                return Err(Error::NoPendingTransfer);
            }
            let completion = self
                .done_rx
                .recv()
                .map_err(|_| Error::NoPendingTransfer)?;
            match self.handlers.remove(&completion.id) {
                Some(handler) => {
                    handler(completion);
                    return Ok(());
                }
                None => log::trace!("dropping late completion of {}", completion.id),
            }
        }
    }

    /// A blocking transfer cannot be interrupted. Its handler runs now with
    /// `Cancelled`; whatever the worker reports later is dropped.
    fn cancel_transfer(&mut self, id: TransferId) -> Result<()> {
        if let Some(handler) = self.handlers.remove(&id) {
            handler(Completion {
                id,
                endpoint: 0,
                status: TransferStatus::Cancelled,
                buffer: Vec::new(),
                actual_length: 0,
            });
        }
        Ok(())
    }

    fn in_endpoint(&self) -> u8 {
        self.in_ep
    }

    fn out_endpoint(&self) -> u8 {
        self.out_ep
    }
}
