//! Error types for the verifier.
//!
//! Failed checks are not errors: they are reported as outcomes in a
//! [`crate::checks::Report`]. `VerifyError` covers the setup failures that
//! abort a whole run.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VerifyError {
    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A check pattern could not be compiled.
    #[error("Invalid check pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Expectations could not be read, or a report could not be written, as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The expectations are well-formed but contradict themselves.
    #[error("Inconsistent expectations: {0}")]
    InconsistentExpectations(String),

    /// A CSS selector built from the expectations could not be parsed.
    #[error("Invalid selector '{selector}': {reason}")]
    Selector { selector: String, reason: String },
}

impl VerifyError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        VerifyError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, VerifyError>;
