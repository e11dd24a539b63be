// rfidrw-rs/rfidrw/src/test_support.rs

//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize answer-frame construction and MockTransport
//! setup so tests across the crate and tests/ directory share them.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Condvar, Mutex, MutexGuard};
use std::time::Duration;

use crate::config::ReaderConfig;
use crate::constants::{
    CMD_EM4100_ANSWER, INBOUND_ENDPOINT_MARKER, INBOUND_FRAME_LEN, MESSAGE_END_MARKER,
    MESSAGE_START_MARKER, MESSAGE_STRUCTURE_SIZE,
};
use crate::device::{Device, Initialized};
use crate::protocol::xor_checksum;
use crate::transport::{
    CompletionHandler, InterruptIo, MockTransport, Transport, TransferRequest,
};
use crate::types::{TransferId, TransferStatus};
use crate::Result;

/// Build a 48-byte answer the way the reader lays it out:
/// `05 01 size cmd payload.. checksum 04`, zero padded.
#[doc(hidden)]
pub fn inbound_frame_bytes(cmd: u8, payload: &[u8]) -> [u8; INBOUND_FRAME_LEN] {
    let n = payload.len();
    let mut raw = [0u8; INBOUND_FRAME_LEN];
    raw[0] = INBOUND_ENDPOINT_MARKER;
    raw[1] = MESSAGE_START_MARKER;
    raw[2] = (MESSAGE_STRUCTURE_SIZE + n) as u8;
    raw[3] = cmd;
    raw[4..4 + n].copy_from_slice(payload);
    raw[4 + n] = xor_checksum(&raw[1..4 + n]);
    raw[5 + n] = MESSAGE_END_MARKER;
    raw
}

/// EM4100 answer carrying `id` (status byte 0).
#[doc(hidden)]
pub fn em4100_answer(id: [u8; 5]) -> [u8; INBOUND_FRAME_LEN] {
    let mut payload = [0u8; 6];
    payload[1..].copy_from_slice(&id);
    inbound_frame_bytes(CMD_EM4100_ANSWER, &payload)
}

/// EM4100 answer the reader sends when no tag is in the field.
#[doc(hidden)]
pub fn em4100_no_tag() -> [u8; INBOUND_FRAME_LEN] {
    inbound_frame_bytes(CMD_EM4100_ANSWER, &[0x00])
}

/// Script one successful exchange: the armed inbound transfer gets
/// `answer`, the phase-two inbound an empty completion.
#[doc(hidden)]
pub fn seed_transaction(mock: &mut MockTransport, answer: &[u8]) {
    mock.push_response(answer.to_vec());
    mock.push_response(Vec::new());
}

/// Convenience: create and initialize a Device<Initialized> backed by the
/// given mock.
#[doc(hidden)]
pub fn initialized_mock_device(
    mock: MockTransport,
    config: ReaderConfig,
) -> Result<Device<Initialized>> {
    Device::new_with_transport(Box::new(mock), config)?.initialize()
}

/// MockTransport shared between a Device and the test inspecting it.
#[doc(hidden)]
#[derive(Clone, Default)]
pub struct SharedMock {
    inner: Arc<Mutex<MockTransport>>,
}

impl SharedMock {
    pub fn new(mock: MockTransport) -> Self {
        Self {
            inner: Arc::new(Mutex::new(mock)),
        }
    }

    pub fn lock(&self) -> MutexGuard<'_, MockTransport> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Transport for SharedMock {
    fn submit_transfer(
        &mut self,
        request: TransferRequest,
        on_complete: CompletionHandler,
    ) -> Result<TransferId> {
        self.lock().submit_transfer(request, on_complete)
    }

    fn handle_events(&mut self) -> Result<()> {
        self.lock().handle_events()
    }

    fn cancel_transfer(&mut self, id: TransferId) -> Result<()> {
        self.lock().cancel_transfer(id)
    }
}

#[derive(Default)]
struct ReaderState {
    commands: Vec<Vec<u8>>,
    reports: VecDeque<Vec<u8>>,
}

/// Blocking stand-in for the reader: nothing is readable until a command
/// has been written. Each command queues the answer built by `respond`
/// from its command byte, then an empty report for the follow-up read.
#[doc(hidden)]
pub struct SimulatedReader {
    state: Mutex<ReaderState>,
    ready: Condvar,
    respond: Box<dyn Fn(u8) -> Vec<u8> + Send + Sync>,
}

impl SimulatedReader {
    pub fn new(respond: impl Fn(u8) -> Vec<u8> + Send + Sync + 'static) -> Self {
        Self {
            state: Mutex::new(ReaderState::default()),
            ready: Condvar::new(),
            respond: Box::new(respond),
        }
    }

    /// Commands written so far, in order.
    pub fn commands(&self) -> Vec<Vec<u8>> {
        self.state().commands.clone()
    }

    fn state(&self) -> MutexGuard<'_, ReaderState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl InterruptIo for SimulatedReader {
    fn write_interrupt(
        &self,
        _endpoint: u8,
        data: &[u8],
        _timeout: Duration,
    ) -> std::result::Result<usize, TransferStatus> {
        let cmd = data.get(3).copied().unwrap_or(0);
        let mut state = self.state();
        state.commands.push(data.to_vec());
        state.reports.push_back((self.respond)(cmd));
        state.reports.push_back(Vec::new());
        self.ready.notify_all();
        Ok(data.len())
    }

    fn read_interrupt(
        &self,
        _endpoint: u8,
        buf: &mut [u8],
        timeout: Duration,
    ) -> std::result::Result<usize, TransferStatus> {
        let state = self.state();
        let mut state = if timeout.is_zero() {
            self.ready
                .wait_while(state, |s| s.reports.is_empty())
                .map_err(|_| TransferStatus::Error)?
        } else {
            self.ready
                .wait_timeout_while(state, timeout, |s| s.reports.is_empty())
                .map_err(|_| TransferStatus::Error)?
                .0
        };
        let report = state.reports.pop_front().ok_or(TransferStatus::TimedOut)?;
        let n = report.len().min(buf.len());
        buf[..n].copy_from_slice(&report[..n]);
        Ok(n)
    }
}
