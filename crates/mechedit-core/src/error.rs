//! Application error types with rich context

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

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Analysis Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Document is empty. Enter some text to analyze.")]
    EmptyDocument,

    #[error("An analysis is already in progress")]
    AnalysisInProgress,

    #[error("Analysis provider error: {message}")]
    Provider { message: String },

    #[error("Analysis response does not match the expected schema: {message}")]
    Schema { message: String },

    // ─────────────────────────────────────────────────────────────
    // File Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read {path}: {message}")]
    FileRead { path: PathBuf, message: String },

    #[error("Unsupported file type: {path} (expected one of: {expected})")]
    UnsupportedFileType { path: PathBuf, expected: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },
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

    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
        }
    }

    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema {
            message: message.into(),
        }
    }

    pub fn file_read(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::FileRead {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn unsupported_file_type(path: impl Into<PathBuf>, expected: &[&str]) -> Self {
        Self::UnsupportedFileType {
            path: path.into(),
            expected: expected.join(", "),
        }
    }

    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    /// Whether this error comes from the analysis collaborator (model call or
    /// response validation).
    pub fn is_provider_error(&self) -> bool {
        matches!(self, Error::Provider { .. } | Error::Schema { .. })
    }

    /// Whether this error is a local file read failure
    pub fn is_file_error(&self) -> bool {
        matches!(
            self,
            Error::FileRead { .. } | Error::UnsupportedFileType { .. }
        )
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::EmptyDocument
                | Error::AnalysisInProgress
                | Error::Provider { .. }
                | Error::Schema { .. }
                | Error::FileRead { .. }
                | Error::UnsupportedFileType { .. }
        )
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Terminal { .. } | Error::ConfigInvalid { .. })
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}
