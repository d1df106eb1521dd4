use thiserror::Error;

/// All errors produced by the Efficiency Tracker.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// The background session loop is gone and can no longer accept commands.
    #[error("Session runtime error: {0}")]
    Runtime(String),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An error originating from the terminal / TUI layer.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Pass-through for any raw I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the tracker crates.
pub type Result<T> = std::result::Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_runtime() {
        let err = TrackerError::Runtime("command channel closed".to_string());
        assert_eq!(
            err.to_string(),
            "Session runtime error: command channel closed"
        );
    }

    #[test]
    fn test_error_display_config() {
        let err = TrackerError::Config("unknown view".to_string());
        assert_eq!(err.to_string(), "Configuration error: unknown view");
    }

    #[test]
    fn test_error_display_terminal() {
        let err = TrackerError::Terminal("raw mode failure".to_string());
        assert_eq!(err.to_string(), "Terminal error: raw mode failure");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: TrackerError = io_err.into();
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_error_from_anyhow() {
        let err: TrackerError = anyhow::anyhow!("wrapped failure").into();
        assert!(err.to_string().contains("wrapped failure"));
    }
}
