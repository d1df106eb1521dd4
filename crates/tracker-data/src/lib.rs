//! Display datasets for the Efficiency Tracker.
//!
//! Provides the static sample data each screen renders and the small
//! summary computations derived from it (goal progress, weekly average,
//! peak hour). Nothing here is persisted or fetched; the datasets are
//! fixed in-memory values.

pub mod samples;
pub mod summary;

pub use tracker_core as core;
