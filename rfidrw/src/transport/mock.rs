// rfidrw-rs/rfidrw/src/transport/mock.rs

use std::collections::VecDeque;

use crate::transport::traits::{Completion, CompletionHandler, Transport, TransferRequest};
use crate::types::{Direction, TransferId, TransferStatus};
use crate::{Error, Result};

/// Scripted outcome for the next IN transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockReply {
    /// Complete with these bytes (truncated to the requested length).
    Data(Vec<u8>),
    /// Finish with a non-data status.
    Status(TransferStatus),
}

/// Order in which `handle_events` resolves pending transfers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletionOrder {
    /// Oldest submission first, as the reader normally behaves.
    #[default]
    Fifo,
    /// Newest submission first.
    Lifo,
}

struct Pending {
    id: TransferId,
    request: TransferRequest,
    handler: CompletionHandler,
}

/// Mock transport for unit tests. It records sent payloads and answers IN
/// transfers from a queue. Each `handle_events` call resolves one pending
/// transfer.
#[derive(Default)]
pub struct MockTransport {
    pub sent: Vec<Vec<u8>>,
    pub responses: VecDeque<MockReply>,
    /// Statuses for upcoming OUT transfers; `Completed` when empty.
    pub out_statuses: VecDeque<TransferStatus>,
    pub order: CompletionOrder,
    /// Testing hook: number of handle_events calls that should fail with Timeout
    pub event_failures: usize,
    pub events_handled: usize,
    /// Record of every submitted request, in submission order.
    pub submitted: Vec<TransferRequest>,
    pending: VecDeque<Pending>,
    next_id: u64,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw answer for the next IN transfer.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push_back(MockReply::Data(resp));
    }

    /// Make the next IN transfer finish with `status`.
    pub fn push_in_status(&mut self, status: TransferStatus) {
        self.responses.push_back(MockReply::Status(status));
    }

    /// Make the next OUT transfer finish with `status`.
    pub fn push_out_status(&mut self, status: TransferStatus) {
        self.out_statuses.push_back(status);
    }

    pub fn set_order(&mut self, order: CompletionOrder) {
        self.order = order;
    }

    /// Set how many subsequent handle_events calls should fail (for tests).
    pub fn set_event_failures(&mut self, n: usize) {
        self.event_failures = n;
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn pending_inbound(&self) -> usize {
        self.pending
            .iter()
            .filter(|p| p.request.direction() == Direction::In)
            .count()
    }

    fn resolve(&mut self, pending: Pending) {
        let Pending {
            id,
            request,
            handler,
        } = pending;

        let (status, buffer, actual_length) = match request.direction() {
            Direction::Out => {
                let status = self
                    .out_statuses
                    .pop_front()
                    .unwrap_or(TransferStatus::Completed);
                let actual = if status.is_completed() {
                    request.length
                } else {
                    0
                };
                (status, request.buffer, actual)
            }
            Direction::In => match self.responses.pop_front() {
                Some(MockReply::Data(data)) => {
                    let actual = data.len().min(request.length);
                    let mut buf = request.buffer;
                    buf[..actual].copy_from_slice(&data[..actual]);
                    (TransferStatus::Completed, buf, actual)
                }
                Some(MockReply::Status(status)) => (status, request.buffer, 0),
                // Nothing scripted: the reader stays silent until the timeout.
                None => (TransferStatus::TimedOut, request.buffer, 0),
            },
        };

        handler(Completion {
            id,
            endpoint: request.endpoint,
            status,
            buffer,
            actual_length,
        });
    }
}

impl Transport for MockTransport {
    fn submit_transfer(
        &mut self,
        request: TransferRequest,
        on_complete: CompletionHandler,
    ) -> Result<TransferId> {
        self.next_id += 1;
        let id = TransferId::new(self.next_id);
        if request.direction() == Direction::Out {
            self.sent.push(request.buffer[..request.length].to_vec());
        }
        self.submitted.push(request.clone());
        self.pending.push_back(Pending {
            id,
            request,
            handler: on_complete,
        });
        Ok(id)
    }

    fn handle_events(&mut self) -> Result<()> {
        if self.event_failures > 0 {
            self.event_failures -= 1;
            return Err(Error::Timeout);
        }

        let next = match self.order {
            CompletionOrder::Fifo => self.pending.pop_front(),
            CompletionOrder::Lifo => self.pending.pop_back(),
        };
        let pending = next.ok_or(Error::NoPendingTransfer)?;
        self.resolve(pending);
        self.events_handled += 1;
        Ok(())
    }

    fn cancel_transfer(&mut self, id: TransferId) -> Result<()> {
        if let Some(pos) = self.pending.iter().position(|p| p.id == id) {
            if let Some(p) = self.pending.remove(pos) {
                (p.handler)(Completion {
                    id,
                    endpoint: p.request.endpoint,
                    status: TransferStatus::Cancelled,
                    buffer: p.request.buffer,
                    actual_length: 0,
                });
            }
        }
        Ok(())
    }
}
