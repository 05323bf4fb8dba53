//! Error types for repo-checker operations.
//!
//! This module defines [`CheckerError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Submission failures (`Request`, `Transport`, `MalformedResult`) are
//!   caught by the view and shown to the user, never propagated to `main`
//! - `Validation` and `SubmissionInFlight` are raised before any request
//!   is sent
//! - Use `anyhow::Error` (via `CheckerError::Other`) for unexpected errors

use thiserror::Error;

/// Generic message shown when a failed response carries no usable `message`.
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred";

/// Core error type for repo-checker operations.
#[derive(Debug, Error)]
pub enum CheckerError {
    /// User input rejected before reaching the network.
    #[error("{message}")]
    Validation { message: String },

    /// A submission was attempted while another is still loading.
    #[error("A check is already in progress")]
    SubmissionInFlight,

    /// The checking service answered with a non-success status.
    ///
    /// Displays as the bare service message so it can be shown verbatim.
    #[error("{message}")]
    Request { status: u16, message: String },

    /// The request could not complete, or the response was not JSON.
    #[error("{message}")]
    Transport { message: String },

    /// The response was JSON but not a check result.
    #[error("Unexpected response from checking service: {message}")]
    MalformedResult { message: String },

    /// Missing or invalid service configuration.
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CheckerError {
    /// Whether this error is one a submission settles into.
    ///
    /// These are shown in the alert region; anything else aborts the command.
    pub fn is_submission_failure(&self) -> bool {
        matches!(
            self,
            Self::Request { .. } | Self::Transport { .. } | Self::MalformedResult { .. }
        )
    }
}

impl From<reqwest::Error> for CheckerError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport {
            message: err.to_string(),
        }
    }
}

/// Result type alias for repo-checker operations.
pub type Result<T> = std::result::Result<T, CheckerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_error_displays_bare_message() {
        let err = CheckerError::Request {
            status: 404,
            message: "Repository not found".into(),
        };
        assert_eq!(err.to_string(), "Repository not found");
    }

    #[test]
    fn transport_error_displays_bare_message() {
        let err = CheckerError::Transport {
            message: "connection refused".into(),
        };
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn validation_error_displays_message() {
        let err = CheckerError::Validation {
            message: "Repository URL is required".into(),
        };
        assert_eq!(err.to_string(), "Repository URL is required");
    }

    #[test]
    fn malformed_result_displays_detail() {
        let err = CheckerError::MalformedResult {
            message: "missing field `summary`".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Unexpected response"));
        assert!(msg.contains("missing field `summary`"));
    }

    #[test]
    fn config_error_displays_message() {
        let err = CheckerError::Config {
            message: "no API URL".into(),
        };
        assert!(err.to_string().contains("no API URL"));
    }

    #[test]
    fn submission_failures_are_classified() {
        assert!(CheckerError::Request {
            status: 500,
            message: "x".into()
        }
        .is_submission_failure());
        assert!(CheckerError::Transport {
            message: "x".into()
        }
        .is_submission_failure());
        assert!(CheckerError::MalformedResult {
            message: "x".into()
        }
        .is_submission_failure());
        assert!(!CheckerError::SubmissionInFlight.is_submission_failure());
        assert!(!CheckerError::Validation {
            message: "x".into()
        }
        .is_submission_failure());
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: CheckerError = io_err.into();
        assert!(matches!(err, CheckerError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(CheckerError::SubmissionInFlight)
        }
        assert!(returns_error().is_err());
    }
}
