//! Async session orchestrator.
//!
//! Runs the [`SessionSimulator`] in a dedicated tokio task. Start/stop
//! commands arrive over an `mpsc` channel, a `watch` channel publishes a
//! fresh [`SessionSnapshot`] after every applied command and every tick, and
//! the tick interval exists only while the session is running – it is
//! created when a start command is applied and dropped on stop, so no
//! scheduled-but-unfired tick can outlive a stop.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time;

use tracker_core::error::TrackerError;
use tracker_core::models::SessionSnapshot;

use crate::sampler::RngSampler;
use crate::simulator::SessionSimulator;

// ── Public types ──────────────────────────────────────────────────────────────

/// Commands accepted by the background session loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    /// Begin (or resume) the monitoring session.
    Start,
    /// Halt the monitoring session, freezing the clock.
    Stop,
}

// ── SessionOrchestrator ───────────────────────────────────────────────────────

/// Background session coordinator.
///
/// Call [`SessionOrchestrator::start`] to spin up the session loop in a
/// dedicated tokio task and receive the snapshot channel plus a
/// [`SessionController`] for issuing commands.
pub struct SessionOrchestrator {
    /// How much simulated time one tick represents; also the tick cadence.
    tick_interval: Duration,
}

impl SessionOrchestrator {
    /// Create a new orchestrator ticking at `tick_interval`.
    pub fn new(tick_interval: Duration) -> Self {
        Self { tick_interval }
    }

    /// Start the session loop.
    ///
    /// Returns:
    /// - A `watch::Receiver<SessionSnapshot>` holding the latest snapshot;
    ///   readers borrow it once per render.
    /// - A [`SessionController`] for start/stop commands and teardown.
    pub fn start(self) -> (watch::Receiver<SessionSnapshot>, SessionController) {
        let (snapshot_tx, snapshot_rx) = watch::channel(SessionSnapshot::idle());
        // Small buffer; commands are rare (keyboard toggles).
        let (cmd_tx, cmd_rx) = mpsc::channel(16);

        let handle = tokio::spawn(async move {
            session_loop(self.tick_interval, cmd_rx, snapshot_tx).await;
        });

        (snapshot_rx, SessionController { cmd_tx, handle })
    }
}

// ── SessionController ─────────────────────────────────────────────────────────

/// Handle to the background session loop.
///
/// Dropping the controller closes the command channel, which makes the loop
/// exit on its own; [`SessionController::abort`] tears it down immediately.
pub struct SessionController {
    cmd_tx: mpsc::Sender<SessionCommand>,
    handle: tokio::task::JoinHandle<()>,
}

impl SessionController {
    /// Request a transition to running. Idempotent: a start while already
    /// running is applied as a no-op by the state machine.
    pub async fn start(&self) -> Result<(), TrackerError> {
        self.send(SessionCommand::Start).await
    }

    /// Request a transition to stopped. Once the loop applies it, the clock
    /// can no longer move until the next start.
    pub async fn stop(&self) -> Result<(), TrackerError> {
        self.send(SessionCommand::Stop).await
    }

    /// Immediately abort the session loop.
    pub fn abort(&self) {
        self.handle.abort();
    }

    async fn send(&self, cmd: SessionCommand) -> Result<(), TrackerError> {
        self.cmd_tx
            .send(cmd)
            .await
            .map_err(|_| TrackerError::Runtime("session loop is not running".to_string()))
    }
}

// ── Loop implementation ───────────────────────────────────────────────────────

/// The session loop: applies commands, drives ticks while running, publishes
/// a snapshot after every state change.
///
/// Exits when the command channel closes (controller dropped) or when the
/// last snapshot receiver is gone.
async fn session_loop(
    tick_interval: Duration,
    mut cmd_rx: mpsc::Receiver<SessionCommand>,
    snapshot_tx: watch::Sender<SessionSnapshot>,
) {
    let mut simulator = SessionSimulator::new(RngSampler::new());
    // The owned timer handle: present only while the session runs.
    let mut ticker: Option<time::Interval> = None;

    loop {
        tokio::select! {
            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(SessionCommand::Start) => {
                        if simulator.start() {
                            // First tick lands one full interval after start.
                            ticker = Some(time::interval_at(
                                time::Instant::now() + tick_interval,
                                tick_interval,
                            ));
                        }
                    }
                    Some(SessionCommand::Stop) => {
                        if simulator.stop() {
                            // Dropping the interval cancels any pending tick.
                            ticker = None;
                        }
                    }
                    None => {
                        tracing::debug!("command channel closed; exiting session loop");
                        break;
                    }
                }
            }
            _ = next_tick(ticker.as_mut()) => {
                simulator.tick();
            }
        }

        if snapshot_tx.send(simulator.snapshot()).is_err() {
            tracing::debug!("snapshot receiver dropped; exiting session loop");
            break;
        }
    }
}

/// Await the next tick, or forever when the session is stopped.
async fn next_tick(ticker: Option<&mut time::Interval>) {
    match ticker {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending().await,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
