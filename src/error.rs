//! Error types
//!
//! `CollectionError` ends a session before it starts; `RequestError` belongs to
//! a single execution and is rendered like any other response.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Failure to turn a collection file into a usable collection
#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("failed to read collection {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse collection: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("no requests found in collection")]
    Empty,
}

/// Failure of a single request execution
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RequestError {
    /// Method, URL or a header could not be turned into a request
    #[error("invalid request: {0}")]
    Build(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// Headers arrived but the body stream broke
    #[error("error reading body: {0}")]
    BodyRead(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_message_names_limit() {
        let err = RequestError::Timeout(Duration::from_secs(30));
        assert_eq!(err.to_string(), "request timed out after 30s");
        let err = RequestError::Timeout(Duration::from_millis(200));
        assert_eq!(err.to_string(), "request timed out after 200ms");
    }

    #[test]
    fn test_load_error_names_path() {
        let err = CollectionError::Load {
            path: PathBuf::from("missing.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("missing.yaml"));
    }
}
