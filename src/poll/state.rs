//! Page state container with reducer-style transitions.
//!
//! `PageState::reduce` is the only way state changes. It returns an
//! [`Effect`] the driver must carry out (arm or cancel the retry timer, or
//! fetch right away), which keeps every transition testable without timers.

use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Bounded retry counter. `count` never exceeds `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryState {
    pub count: u32,
    pub max: u32,
}

impl RetryState {
    pub fn new(max: u32) -> Self {
        Self { count: 0, max }
    }

    /// No automatic retry will be scheduled until a success or manual retry.
    pub fn is_exhausted(&self) -> bool {
        self.count >= self.max
    }
}

/// Transition inputs.
#[derive(Debug)]
pub enum Action<S> {
    /// A request tagged `seq` was issued.
    FetchStarted { seq: u64 },
    FetchSucceeded {
        seq: u64,
        snapshot: S,
        at: DateTime<Utc>,
    },
    /// `message` is already normalized.
    FetchFailed { seq: u64, message: String },
    /// The scheduled retry timer elapsed.
    RetryFired,
    /// User pressed "Retry".
    ManualRetry,
    /// User closed the error banner.
    Dismiss,
    TearDown,
}

/// What the driver has to do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Arm the retry timer. `attempt` is the 1-based failure count.
    ScheduleRetry { attempt: u32 },
    CancelRetry,
    FetchNow,
}

/// Everything one page knows about its data.
#[derive(Debug)]
pub struct PageState<S> {
    snapshot: Option<Arc<S>>,
    error: Option<String>,
    retry: RetryState,
    in_flight: usize,
    retry_pending: bool,
    last_issued_seq: u64,
    last_applied_seq: u64,
    updated_at: Option<DateTime<Utc>>,
    torn_down: bool,
}

impl<S> Clone for PageState<S> {
    fn clone(&self) -> Self {
        Self {
            snapshot: self.snapshot.clone(),
            error: self.error.clone(),
            retry: self.retry,
            in_flight: self.in_flight,
            retry_pending: self.retry_pending,
            last_issued_seq: self.last_issued_seq,
            last_applied_seq: self.last_applied_seq,
            updated_at: self.updated_at,
            torn_down: self.torn_down,
        }
    }
}

impl<S> PageState<S> {
    pub fn new(max_retries: u32) -> Self {
        Self {
            snapshot: None,
            error: None,
            retry: RetryState::new(max_retries),
            in_flight: 0,
            retry_pending: false,
            last_issued_seq: 0,
            last_applied_seq: 0,
            updated_at: None,
            torn_down: false,
        }
    }

    /// Latest successfully fetched data.
    pub fn snapshot(&self) -> Option<&Arc<S>> {
        self.snapshot.as_ref()
    }

    /// Terminal, normalized error message.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn retry(&self) -> RetryState {
        self.retry
    }

    pub fn retry_pending(&self) -> bool {
        self.retry_pending
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// First load still running.
    pub fn is_loading(&self) -> bool {
        self.snapshot.is_none() && self.error.is_none() && !self.torn_down
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Sequence number to tag the next request with.
    pub fn next_seq(&self) -> u64 {
        self.last_issued_seq + 1
    }

    pub fn reduce(&mut self, action: Action<S>) -> Effect {
        if self.torn_down {
            return Effect::None;
        }

        match action {
            Action::FetchStarted { seq } => {
                self.last_issued_seq = self.last_issued_seq.max(seq);
                self.in_flight += 1;
                Effect::None
            }

            Action::FetchSucceeded { seq, snapshot, at } => {
                self.in_flight = self.in_flight.saturating_sub(1);
                if self.is_stale(seq) {
                    return Effect::None;
                }
                self.last_applied_seq = seq;
                self.snapshot = Some(Arc::new(snapshot));
                self.updated_at = Some(at);
                self.error = None;
                self.retry.count = 0;
                self.cancel_pending_retry()
            }

            Action::FetchFailed { seq, message } => {
                self.in_flight = self.in_flight.saturating_sub(1);
                if self.is_stale(seq) {
                    return Effect::None;
                }
                self.last_applied_seq = seq;
                self.retry.count = (self.retry.count + 1).min(self.retry.max);

                if !self.retry.is_exhausted() {
                    if self.retry_pending {
                        return Effect::None;
                    }
                    self.retry_pending = true;
                    return Effect::ScheduleRetry {
                        attempt: self.retry.count,
                    };
                }

                self.error = Some(message);
                self.cancel_pending_retry()
            }

            Action::RetryFired => {
                if !self.retry_pending {
                    return Effect::None;
                }
                self.retry_pending = false;
                Effect::FetchNow
            }

            Action::ManualRetry => {
                self.retry.count = 0;
                self.retry_pending = false;
                Effect::FetchNow
            }

            Action::Dismiss => {
                self.error = None;
                Effect::None
            }

            Action::TearDown => {
                self.torn_down = true;
                self.in_flight = 0;
                self.cancel_pending_retry()
            }
        }
    }

    fn is_stale(&self, seq: u64) -> bool {
        seq < self.last_applied_seq
    }

    fn cancel_pending_retry(&mut self) -> Effect {
        if self.retry_pending {
            self.retry_pending = false;
            Effect::CancelRetry
        } else {
            Effect::None
        }
    }
}
