//! Error types for the trend notifier.
//!
//! Every external call in the pipeline reports its failure through
//! [`TrendError`]. Most callers absorb these errors at the call site and log
//! them; only cache persistence failures reach the top of a run.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the trend notifier library.
#[derive(Debug, Error)]
pub enum TrendError {
    // Network errors
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    #[error("{service} returned HTTP {status}: {body}")]
    HttpStatus {
        service: String,
        status: u16,
        body: String,
    },

    #[error("Unexpected response from {service}: {message}")]
    UnexpectedResponse { service: String, message: String },

    // Credentials and configuration
    #[error("Missing credential {name} for {service}")]
    MissingCredential { service: String, name: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    // File system errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    // Serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },
}

/// Result type alias for trend notifier operations.
pub type Result<T> = std::result::Result<T, TrendError>;

impl From<std::io::Error> for TrendError {
    fn from(err: std::io::Error) -> Self {
        TrendError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl From<serde_json::Error> for TrendError {
    fn from(err: serde_json::Error) -> Self {
        TrendError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<reqwest::Error> for TrendError {
    fn from(err: reqwest::Error) -> Self {
        let err = err.without_url();
        TrendError::Network {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl TrendError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        TrendError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// Create an error for a response whose body is missing an expected field.
    pub fn unexpected(service: impl Into<String>, message: impl Into<String>) -> Self {
        TrendError::UnexpectedResponse {
            service: service.into(),
            message: message.into(),
        }
    }

    /// Whether the error came from talking to a remote service.
    ///
    /// Local failures (filesystem, configuration) are the ones a run cannot
    /// absorb.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            TrendError::Network { .. }
                | TrendError::HttpStatus { .. }
                | TrendError::UnexpectedResponse { .. }
                | TrendError::MissingCredential { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrendError::HttpStatus {
            service: "DeepL".into(),
            status: 403,
            body: "Forbidden".into(),
        };
        assert_eq!(err.to_string(), "DeepL returned HTTP 403: Forbidden");

        let err = TrendError::MissingCredential {
            service: "GCP".into(),
            name: "GCP_API_KEY".into(),
        };
        assert_eq!(err.to_string(), "Missing credential GCP_API_KEY for GCP");
    }

    #[test]
    fn test_remote_errors() {
        assert!(TrendError::unexpected("Slack", "empty body").is_remote());
        assert!(!TrendError::Config {
            message: "bad".into()
        }
        .is_remote());

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = TrendError::io_with_path(io, "/tmp/trend.json");
        assert!(!err.is_remote());
        assert!(err.to_string().contains("trend.json"));
    }
}
