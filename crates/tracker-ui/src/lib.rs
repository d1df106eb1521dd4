//! Terminal UI layer for the Efficiency Tracker.
//!
//! Provides themes, header / stat-card / progress-bar components, one view
//! module per screen (dashboard, analytics, reports, settings), and the main
//! application event loop built on top of [`ratatui`].

pub mod analytics_view;
pub mod app;
pub mod components;
pub mod dashboard_view;
pub mod reports_view;
pub mod settings_view;
pub mod themes;

pub use tracker_core as core;
