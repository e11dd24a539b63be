// rfidrw-rs/rfidrw/src/config.rs
//! Reader configuration: defaults plus a small value type that the device
//! builder hands to the transaction orchestrator and the retry policy.

use std::time::Duration;

use crate::utils::ms;

/// Timeout for the outbound interrupt transfer (ms)
pub const OUT_TIMEOUT_MS: u64 = 1000;

/// Timeout for inbound interrupt transfers (ms)
pub const IN_TIMEOUT_MS: u64 = 1000;

/// Attempts made by the retry policy before giving up on a read
pub const MAX_ATTEMPTS: usize = 10;

/// Settling delays around the transaction phases. The reader firmware
/// drops answers when the host turns around too quickly.
pub const SETTLE_BEFORE_DRAIN_MS: u64 = 50;
pub const SETTLE_BEFORE_INBOUND_MS: u64 = 100;
pub const SETTLE_AFTER_INBOUND_MS: u64 = 50;

/// Delays inserted between the phases of one transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SettleDelays {
    /// After submitting the outbound transfer, before draining phase one.
    pub before_drain_ms: u64,
    /// After phase one, before submitting the inbound transfer.
    pub before_inbound_ms: u64,
    /// After submitting the inbound transfer, before draining phase two.
    pub after_inbound_ms: u64,
}

impl SettleDelays {
    pub const NONE: Self = Self {
        before_drain_ms: 0,
        before_inbound_ms: 0,
        after_inbound_ms: 0,
    };

    pub fn before_drain(&self) -> Duration {
        ms(self.before_drain_ms)
    }

    pub fn before_inbound(&self) -> Duration {
        ms(self.before_inbound_ms)
    }

    pub fn after_inbound(&self) -> Duration {
        ms(self.after_inbound_ms)
    }
}

impl Default for SettleDelays {
    fn default() -> Self {
        Self {
            before_drain_ms: SETTLE_BEFORE_DRAIN_MS,
            before_inbound_ms: SETTLE_BEFORE_INBOUND_MS,
            after_inbound_ms: SETTLE_AFTER_INBOUND_MS,
        }
    }
}

/// Tunables for one reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReaderConfig {
    pub out_timeout_ms: u64,
    pub in_timeout_ms: u64,
    pub max_attempts: usize,
    pub settle: SettleDelays,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            out_timeout_ms: OUT_TIMEOUT_MS,
            in_timeout_ms: IN_TIMEOUT_MS,
            max_attempts: MAX_ATTEMPTS,
            settle: SettleDelays::default(),
        }
    }
}

impl ReaderConfig {
    /// Configuration without settling delays, for mocks and tests.
    pub fn immediate() -> Self {
        Self {
            settle: SettleDelays::NONE,
            ..Self::default()
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_timeouts(mut self, out_timeout_ms: u64, in_timeout_ms: u64) -> Self {
        self.out_timeout_ms = out_timeout_ms;
        self.in_timeout_ms = in_timeout_ms;
        self
    }

    pub fn with_settle_delays(mut self, settle: SettleDelays) -> Self {
        self.settle = settle;
        self
    }
}
