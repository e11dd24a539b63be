// rfidrw-rs/rfidrw/src/transaction/mod.rs

//! Two-phase command/response exchange over an asynchronous transport.
//!
//! One exchange runs as follows:
//!
//! 1. An inbound transfer is kept armed between exchanges; the reader
//!    expects one to be pending before the first command arrives.
//! 2. The 24-byte command is submitted and events are pumped until two
//!    completions (the command plus the armed inbound) have been seen.
//! 3. A fresh 48-byte inbound transfer is submitted and events are pumped
//!    until it completes.
//!
//! Completion handlers never touch caller state directly. They post an
//! event onto a channel owned by the [`Orchestrator`], which dispatches it
//! on the pumping thread. Only successful 48-byte inbound completions are
//! copied into the caller's destination buffer.

mod state;

pub use state::TransactionState;
use state::Transaction;

use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use crate::config::ReaderConfig;
use crate::constants::INBOUND_FRAME_LEN;
use crate::protocol::OutboundFrame;
use crate::transport::{Completion, CompletionHandler, Transport, TransferRequest};
use crate::types::{Direction, TransferId};
use crate::utils::{bytes_to_hex_spaced, settle};
use crate::{Error, Result};

struct Event {
    deliver: bool,
    completion: Completion,
}

/// Drives exchanges against one transport. The orchestrator outlives single
/// exchanges because the armed inbound transfer does.
pub struct Orchestrator {
    config: ReaderConfig,
    tx: Sender<Event>,
    rx: Receiver<Event>,
    in_flight: Vec<(TransferId, Direction)>,
    backlog: VecDeque<Event>,
    last_state: TransactionState,
}

impl Orchestrator {
    pub fn new(config: ReaderConfig) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            config,
            tx,
            rx,
            in_flight: Vec::new(),
            backlog: VecDeque::new(),
            last_state: TransactionState::Idle,
        }
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// State the most recent exchange ended in.
    pub fn last_state(&self) -> TransactionState {
        self.last_state
    }

    /// Transfers submitted but not yet seen completing.
    pub fn in_flight(&self) -> &[(TransferId, Direction)] {
        &self.in_flight
    }

    pub fn inbound_armed(&self) -> bool {
        self.in_flight.iter().any(|(_, d)| *d == Direction::In)
    }

    fn handler(&self, deliver: bool) -> CompletionHandler {
        let tx = self.tx.clone();
        Box::new(move |completion| {
            // The receiver lives as long as the orchestrator; a send can
            // only fail once nobody is listening anymore.
            let _ = tx.send(Event {
                deliver,
                completion,
            });
        })
    }

    fn submit(
        &mut self,
        transport: &mut dyn Transport,
        request: TransferRequest,
        deliver: bool,
    ) -> Result<TransferId> {
        let direction = request.direction();
        let id = transport.submit_transfer(request, self.handler(deliver))?;
        log::trace!("submitted {} transfer {}", direction_name(direction), id);
        self.in_flight.push((id, direction));
        Ok(id)
    }

    /// Submit a 48-byte inbound transfer whose answer is delivered to the
    /// next exchange.
    pub fn arm_inbound(&mut self, transport: &mut dyn Transport) -> Result<TransferId> {
        let request = TransferRequest::inbound(
            transport.in_endpoint(),
            INBOUND_FRAME_LEN,
            self.config.in_timeout_ms,
        );
        self.submit(transport, request, true)
    }

    /// Run one exchange. On success `destination` holds the last 48-byte
    /// answer delivered while the exchange ran (it is left untouched if
    /// none arrived).
    pub fn execute(
        &mut self,
        transport: &mut dyn Transport,
        frame: &OutboundFrame,
        destination: &mut [u8; INBOUND_FRAME_LEN],
    ) -> Result<()> {
        let mut txn = Transaction::new();
        let result = self.run(transport, frame, destination, &mut txn);
        if result.is_err() && !txn.state().is_terminal() {
            if let Some(status) = txn.failure() {
                txn.transition(TransactionState::Failed(status));
            }
        }
        self.last_state = txn.state();
        result
    }

    fn run(
        &mut self,
        transport: &mut dyn Transport,
        frame: &OutboundFrame,
        destination: &mut [u8; INBOUND_FRAME_LEN],
        txn: &mut Transaction,
    ) -> Result<()> {
        if !self.inbound_armed() {
            self.arm_inbound(transport)?;
        }

        let bytes = frame.encode();
        log::debug!("send: {}", bytes_to_hex_spaced(&bytes));
        let request =
            TransferRequest::outbound(transport.out_endpoint(), &bytes, self.config.out_timeout_ms);
        self.submit(transport, request, false)?;
        txn.transition(TransactionState::OutboundPending);
        txn.wait_for(2);

        settle(self.config.settle.before_drain());
        txn.transition(TransactionState::AwaitingDrain1);
        self.drain(transport, txn, destination)?;
        self.check(txn)?;

        settle(self.config.settle.before_inbound());
        txn.wait_for(1);
        self.arm_inbound(transport)?;
        txn.transition(TransactionState::InboundPending);

        settle(self.config.settle.after_inbound());
        txn.transition(TransactionState::AwaitingDrain2);
        self.drain(transport, txn, destination)?;
        self.check(txn)?;

        txn.transition(TransactionState::Complete);
        Ok(())
    }

    fn check(&self, txn: &mut Transaction) -> Result<()> {
        match txn.failure() {
            Some(status) => {
                txn.transition(TransactionState::Failed(status));
                Err(Error::Transfer { status })
            }
            None => Ok(()),
        }
    }

    /// Pump events until the transaction stops waiting. Events already
    /// queued are dispatched before the transport is asked for more.
    fn drain(
        &mut self,
        transport: &mut dyn Transport,
        txn: &mut Transaction,
        destination: &mut [u8; INBOUND_FRAME_LEN],
    ) -> Result<()> {
        loop {
            while !txn.is_done() {
                match self.next_event() {
                    Some(event) => self.dispatch(event, txn, destination),
                    None => break,
                }
            }
            if txn.is_done() {
                return Ok(());
            }
            transport.handle_events()?;
            log::trace!("event handled, {} outstanding", txn.outstanding());
        }
    }

    fn next_event(&mut self) -> Option<Event> {
        self.backlog
            .pop_front()
            .or_else(|| self.rx.try_recv().ok())
    }

    /// Pump until transfer `id` completes and return its completion, or
    /// fail with `Timeout` once `timeout` has passed. Completions of other
    /// transfers seen meanwhile are kept for the next exchange.
    pub fn wait(
        &mut self,
        transport: &mut dyn Transport,
        id: TransferId,
        timeout: Duration,
    ) -> Result<Completion> {
        let start = Instant::now();
        loop {
            while let Ok(event) = self.rx.try_recv() {
                self.backlog.push_back(event);
            }
            if let Some(pos) = self.backlog.iter().position(|e| e.completion.id == id) {
                if let Some(event) = self.backlog.remove(pos) {
                    self.forget(id);
                    return Ok(event.completion);
                }
            }
            if start.elapsed() >= timeout {
                return Err(Error::Timeout);
            }
            transport.handle_events()?;
        }
    }

    fn forget(&mut self, id: TransferId) {
        self.in_flight.retain(|(t, _)| *t != id);
    }

    fn dispatch(
        &mut self,
        event: Event,
        txn: &mut Transaction,
        destination: &mut [u8; INBOUND_FRAME_LEN],
    ) {
        let Event {
            deliver,
            completion,
        } = event;
        self.forget(completion.id);
        txn.on_completion(completion.status);

        if !completion.status.is_completed() {
            return;
        }
        log::trace!(
            "transfer {} on {:#04x}: {} bytes",
            completion.id,
            completion.endpoint,
            completion.actual_length
        );
        if deliver && completion.actual_length == INBOUND_FRAME_LEN {
            log::debug!("recv: {}", bytes_to_hex_spaced(completion.data()));
            destination.copy_from_slice(completion.data());
        }
    }

    /// Pump events until every submitted transfer has been seen completing.
    /// Stops at the first error from the transport.
    pub fn finish(&mut self, transport: &mut dyn Transport) -> Result<()> {
        log::debug!("draining {} transfer(s)", self.in_flight.len());
        loop {
            while let Some(event) = self.next_event() {
                self.forget(event.completion.id);
            }
            if self.in_flight.is_empty() {
                return Ok(());
            }
            transport.handle_events()?;
        }
    }
}

fn direction_name(direction: Direction) -> &'static str {
    match direction {
        Direction::In => "IN",
        Direction::Out => "OUT",
    }
}
