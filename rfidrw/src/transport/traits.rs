// rfidrw-rs/rfidrw/src/transport/traits.rs

use crate::Result;
use crate::types::{Direction, TransferId, TransferStatus};

/// Handler invoked exactly once when a submitted transfer finishes. Any
/// per-transfer context lives in the closure's captures.
pub type CompletionHandler = Box<dyn FnOnce(Completion) + Send + 'static>;

/// A single asynchronous interrupt transfer to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    pub endpoint: u8,
    /// OUT: bytes to send. IN: receive buffer (its contents are ignored).
    pub buffer: Vec<u8>,
    /// Number of bytes to transfer.
    pub length: usize,
    /// 0 means no timeout.
    pub timeout_ms: u64,
}

impl TransferRequest {
    pub fn outbound(endpoint: u8, data: &[u8], timeout_ms: u64) -> Self {
        Self {
            endpoint,
            buffer: data.to_vec(),
            length: data.len(),
            timeout_ms,
        }
    }

    pub fn inbound(endpoint: u8, length: usize, timeout_ms: u64) -> Self {
        Self {
            endpoint,
            buffer: vec![0u8; length],
            length,
            timeout_ms,
        }
    }

    pub fn direction(&self) -> Direction {
        Direction::of_endpoint(self.endpoint)
    }
}

/// What a completion handler is told about a finished transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub id: TransferId,
    pub endpoint: u8,
    pub status: TransferStatus,
    pub buffer: Vec<u8>,
    pub actual_length: usize,
}

impl Completion {
    /// Bytes actually transferred.
    pub fn data(&self) -> &[u8] {
        &self.buffer[..self.actual_length.min(self.buffer.len())]
    }
}

/// Transport trait abstracts the asynchronous USB primitive away from the
/// protocol and transaction logic.
pub trait Transport: Send {
    /// Queue a transfer. `on_complete` runs from within `handle_events`
    /// (or from the transport's own event thread) once it finishes.
    fn submit_transfer(
        &mut self,
        request: TransferRequest,
        on_complete: CompletionHandler,
    ) -> Result<TransferId>;

    /// Process pending transfer events, blocking until at least one
    /// completion handler has run. Fails with `NoPendingTransfer` when
    /// nothing is in flight.
    fn handle_events(&mut self) -> Result<()>;

    /// Cancel a transfer still in flight. Its handler then sees
    /// `TransferStatus::Cancelled`. Default: cancellation unsupported, no-op.
    fn cancel_transfer(&mut self, _id: TransferId) -> Result<()> {
        Ok(())
    }

    /// Interrupt IN endpoint used for answers.
    fn in_endpoint(&self) -> u8 {
        crate::constants::ENDPOINT_IN
    }

    /// Interrupt OUT endpoint used for commands.
    fn out_endpoint(&self) -> u8 {
        crate::constants::ENDPOINT_OUT
    }
}
