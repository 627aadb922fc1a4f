//! Submission protocol phase tracking and the in-flight lock.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};

/// Observable phase of a draft submission.
///
/// A submission moves `Idle → TokenPending → Submitting` and re-enters
/// `Idle` on both outcomes; success and failure are conveyed by the result
/// of the submit call rather than held as phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionPhase {
    /// Waiting for the user to trigger a submit.
    #[default]
    Idle,
    /// Validation passed; awaiting the access token.
    TokenPending,
    /// Token obtained; the gateway call is in flight.
    Submitting,
}

impl SubmissionPhase {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::TokenPending => "token_pending",
            Self::Submitting => "submitting",
        }
    }

    /// Whether a submission is currently in flight.
    #[must_use]
    pub const fn is_in_flight(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// Re-entrancy lock and phase tracker for a draft form.
///
/// At most one submission may be in flight per form instance. The flag is
/// checked with a compare-exchange at trigger time; overlapping triggers are
/// rejected before any validation or async work.
#[derive(Debug, Default)]
pub struct FlightLock {
    in_flight: AtomicBool,
    phase: RwLock<SubmissionPhase>,
}

impl FlightLock {
    /// Creates an idle lock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently observable phase.
    #[must_use]
    pub fn phase(&self) -> SubmissionPhase {
        *self.phase.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Whether a submission currently holds the lock.
    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Attempts to begin a submission.
    ///
    /// Returns `None` when another submission already holds the lock. The
    /// returned guard releases the lock and restores [`SubmissionPhase::Idle`]
    /// on every exit path, including early returns and panics.
    #[must_use]
    pub fn try_begin(&self) -> Option<FlightGuard<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
            .then(|| FlightGuard { lock: self })
    }

    fn set_phase(&self, phase: SubmissionPhase) {
        *self.phase.write().unwrap_or_else(PoisonError::into_inner) = phase;
    }
}

/// RAII guard over an in-flight submission.
#[derive(Debug)]
pub struct FlightGuard<'a> {
    lock: &'a FlightLock,
}

impl FlightGuard<'_> {
    /// Advances the observable phase of the held submission.
    pub fn advance(&self, phase: SubmissionPhase) {
        self.lock.set_phase(phase);
    }
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.lock.set_phase(SubmissionPhase::Idle);
        self.lock.in_flight.store(false, Ordering::SeqCst);
    }
}
