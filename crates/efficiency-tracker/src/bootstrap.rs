use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Directory bootstrap ────────────────────────────────────────────────────────

/// Ensure the standard `~/.efficiency-tracker/` directory hierarchy exists.
///
/// Creates the following directories if absent (including any missing parents):
/// - `~/.efficiency-tracker/`
/// - `~/.efficiency-tracker/logs/`
pub fn ensure_directories() -> anyhow::Result<()> {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    let tracker_dir = home.join(".efficiency-tracker");
    std::fs::create_dir_all(&tracker_dir)?;
    std::fs::create_dir_all(tracker_dir.join("logs"))?;
    Ok(())
}

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber.
///
/// `log_level` is mapped to a [`tracing_subscriber::EnvFilter`] directive.
/// Falls back to `"info"` if the level string is not recognised.
///
/// The `log_file` parameter is accepted for forward-compatibility but file
/// logging is not yet wired – all output currently goes to stderr.
pub fn setup_logging(log_level: &str, _log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let normalised = match log_level.to_uppercase().as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARNING" => "warn",
        "ERROR" => "error",
        _ => "info",
    };

    let filter = EnvFilter::try_new(normalised).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = fmt::layer().with_target(false).with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .init();

    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
