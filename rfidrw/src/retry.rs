// rfidrw-rs/rfidrw/src/retry.rs

//! Bounded retry of flaky reader operations.

use crate::Result;

/// Result of running an operation under a [`RetryPolicy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryOutcome<T> {
    /// An attempt produced an acceptable value.
    Accepted { value: T, attempts: usize },
    /// Every attempt was used up without an acceptable value.
    Exhausted { attempts: usize },
}

impl<T> RetryOutcome<T> {
    pub fn attempts(&self) -> usize {
        match self {
            RetryOutcome::Accepted { attempts, .. } | RetryOutcome::Exhausted { attempts } => {
                *attempts
            }
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            RetryOutcome::Accepted { value, .. } => Some(value),
            RetryOutcome::Exhausted { .. } => None,
        }
    }
}

/// Repeats an attempt until an acceptance check passes or `max_attempts`
/// is reached. Transient errors count as failed attempts; any other error
/// ends the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: usize,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(crate::config::MAX_ATTEMPTS)
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: usize) -> Self {
        Self { max_attempts }
    }

    /// `attempt` is called with the zero-based attempt number; `accept`
    /// turns its result into the final value or rejects it.
    pub fn run<R, T, A, C>(&self, mut attempt: A, mut accept: C) -> Result<RetryOutcome<T>>
    where
        A: FnMut(usize) -> Result<R>,
        C: FnMut(&R) -> Option<T>,
    {
        for n in 0..self.max_attempts {
            match attempt(n) {
                Ok(result) => {
                    if let Some(value) = accept(&result) {
                        return Ok(RetryOutcome::Accepted {
                            value,
                            attempts: n + 1,
                        });
                    }
                    log::debug!("attempt {}/{} rejected", n + 1, self.max_attempts);
                }
                Err(e) if e.is_transient() => {
                    log::debug!("attempt {}/{} failed: {}", n + 1, self.max_attempts, e);
                }
                Err(e) => return Err(e),
            }
        }
        Ok(RetryOutcome::Exhausted {
            attempts: self.max_attempts,
        })
    }
}
