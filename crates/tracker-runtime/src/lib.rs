//! Simulated monitoring runtime for the Efficiency Tracker.
//!
//! Owns the session state machine (clock + current activity) and the tokio
//! task that drives it: one tick per second while monitoring is running,
//! with start/stop commands arriving over a channel and read-only snapshots
//! published for the UI.

pub mod orchestrator;
pub mod sampler;
pub mod simulator;

pub use tracker_core as core;
