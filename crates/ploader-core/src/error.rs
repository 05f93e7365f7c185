//! Application error types

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    #[error("Failed to restore terminal: {0}")]
    TerminalRestore(String),

    // ─────────────────────────────────────────────────────────────
    // Backend Client Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to build HTTP client: {reason}")]
    ClientInit { reason: String },

    // ─────────────────────────────────────────────────────────────
    // Image Capture Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read image {path}: {reason}")]
    ImageRead { path: PathBuf, reason: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn client_init(reason: impl Into<String>) -> Self {
        Self::ClientInit {
            reason: reason.into(),
        }
    }

    pub fn image_read(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ImageRead {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::image_read("/tmp/a.png", "permission denied");
        assert_eq!(
            err.to_string(),
            "Failed to read image /tmp/a.png: permission denied"
        );

        let err = Error::client_init("tls backend");
        assert_eq!(err.to_string(), "Failed to build HTTP client: tls backend");

        let err = Error::TerminalRestore("not a tty".into());
        assert_eq!(err.to_string(), "Failed to restore terminal: not a tty");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_config_error() {
        let err = Error::config("no config directory");
        assert!(matches!(err, Error::Config { .. }));
        assert_eq!(err.to_string(), "Configuration error: no config directory");
    }
}
