// rfidrw-rs/rfidrw/src/transaction/state.rs

use derive_more::Display;

use crate::types::TransferStatus;

/// Phases of one command/response exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TransactionState {
    Idle,
    OutboundPending,
    AwaitingDrain1,
    InboundPending,
    AwaitingDrain2,
    Complete,
    #[display(fmt = "Failed({})", _0)]
    Failed(TransferStatus),
}

impl TransactionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TransactionState::Complete | TransactionState::Failed(_))
    }
}

/// Per-transaction bookkeeping: current phase plus the number of
/// completions still awaited before the phase may end.
#[derive(Debug)]
pub(crate) struct Transaction {
    state: TransactionState,
    outstanding: usize,
    failure: Option<TransferStatus>,
}

impl Transaction {
    pub(crate) fn new() -> Self {
        Self {
            state: TransactionState::Idle,
            outstanding: 0,
            failure: None,
        }
    }

    pub(crate) fn state(&self) -> TransactionState {
        self.state
    }

    pub(crate) fn transition(&mut self, next: TransactionState) {
        log::trace!("transaction {} -> {}", self.state, next);
        self.state = next;
    }

    /// Start waiting for `n` completions.
    pub(crate) fn wait_for(&mut self, n: usize) {
        self.outstanding = n;
    }

    pub(crate) fn outstanding(&self) -> usize {
        self.outstanding
    }

    pub(crate) fn is_done(&self) -> bool {
        self.outstanding == 0
    }

    pub(crate) fn failure(&self) -> Option<TransferStatus> {
        self.failure
    }

    /// Account for one finished transfer, whichever direction it was.
    /// Anything but `Completed` ends the wait at once.
    pub(crate) fn on_completion(&mut self, status: TransferStatus) {
        if status.is_completed() {
            self.outstanding = self.outstanding.saturating_sub(1);
        } else {
            log::debug!("transfer error: {}", status);
            self.outstanding = 0;
            self.failure = Some(status);
        }
    }
}
