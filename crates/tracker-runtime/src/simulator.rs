//! The session state machine behind the monitoring toggle.
//!
//! [`SessionSimulator`] owns the session clock and the current activity
//! label exclusively. All mutation happens through [`SessionSimulator::tick`]
//! on a single timeline; consumers only ever receive snapshots.

use std::time::Duration;

use tracker_core::models::{MonitoringState, SessionSnapshot, ACTIVITY_CATALOG};

use crate::sampler::ActivitySampler;

/// Fixed tick cadence: the clock advances by one second per tick.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Probability that a tick switches the current activity label.
pub const SWITCH_PROBABILITY: f64 = 0.1;

/// Simulates a monitoring session's passage of time and activity switching.
///
/// State machine: `Stopped --start--> Running`, `Running --stop--> Stopped`,
/// with `tick` as a self-loop on `Running`. There is no terminal state; the
/// session can be toggled indefinitely and the clock survives stops.
pub struct SessionSimulator<S> {
    state: MonitoringState,
    session_seconds: u64,
    activity_index: usize,
    sampler: S,
}

impl<S: ActivitySampler> SessionSimulator<S> {
    /// A stopped simulator with a zeroed clock and the initial activity.
    pub fn new(sampler: S) -> Self {
        Self {
            state: MonitoringState::Stopped,
            session_seconds: 0,
            activity_index: 0,
            sampler,
        }
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Transition to running. Returns `false` (and changes nothing) when the
    /// session is already running, so repeated starts cannot reset the clock
    /// or spawn a second tick source.
    pub fn start(&mut self) -> bool {
        if self.state.is_running() {
            return false;
        }
        self.state = MonitoringState::Running;
        tracing::info!(session_seconds = self.session_seconds, "monitoring started");
        true
    }

    /// Transition to stopped. The clock retains its value. Returns `false`
    /// when the session is already stopped.
    pub fn stop(&mut self) -> bool {
        if !self.state.is_running() {
            return false;
        }
        self.state = MonitoringState::Stopped;
        tracing::info!(session_seconds = self.session_seconds, "monitoring stopped");
        true
    }

    /// Advance the session by one time unit.
    ///
    /// Increments the clock and, with [`SWITCH_PROBABILITY`], replaces the
    /// current activity with a uniform pick from the catalog (re-picking the
    /// current label is allowed). A tick while stopped is a no-op: the clock
    /// and label stay frozen until the next start.
    pub fn tick(&mut self) {
        if !self.state.is_running() {
            return;
        }

        self.session_seconds += 1;

        if self.sampler.switch_roll() < SWITCH_PROBABILITY {
            self.activity_index = self.sampler.pick(ACTIVITY_CATALOG.len());
            tracing::debug!(
                activity = ACTIVITY_CATALOG[self.activity_index],
                "activity switched"
            );
        }
    }

    // ── Read surface ──────────────────────────────────────────────────────

    /// Current monitoring state.
    pub fn state(&self) -> MonitoringState {
        self.state
    }

    /// Immutable view of the current session state.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.state,
            session_seconds: self.session_seconds,
            current_activity: ACTIVITY_CATALOG[self.activity_index].to_string(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
