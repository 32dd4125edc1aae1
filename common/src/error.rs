//! Error and retrieval-outcome types

use thiserror::Error;

/// Failure surfaced by a service call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("service returned status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// True when the service confirmed the record does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status(404))
    }
}

/// Outcome of a retrieval call.
///
/// A confirmed-empty result stays distinct from a failed request so the UI
/// can message the two differently.
#[derive(Debug, Clone, PartialEq)]
pub enum Retrieval<T> {
    Success(T),
    Empty,
    Failed(ApiError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_network() {
        let error = ApiError::Network("connection refused".to_string());
        let display = format!("{}", error);
        assert!(display.contains("network error"));
        assert!(display.contains("connection refused"));
    }

    #[test]
    fn test_error_display_status() {
        let error = ApiError::Status(500);
        assert_eq!(format!("{}", error), "service returned status 500");
    }

    #[test]
    fn test_error_display_decode() {
        let error = ApiError::Decode("missing field".to_string());
        let display = format!("{}", error);
        assert!(display.contains("malformed response"));
    }

    #[test]
    fn test_is_not_found() {
        assert!(ApiError::Status(404).is_not_found());
        assert!(!ApiError::Status(500).is_not_found());
        assert!(!ApiError::Network("timeout".to_string()).is_not_found());
    }

    #[test]
    fn test_retrieval_empty_is_not_failure() {
        let empty: Retrieval<Vec<String>> = Retrieval::Empty;
        let failed: Retrieval<Vec<String>> = Retrieval::Failed(ApiError::Status(502));
        assert_ne!(empty, failed);
        assert!(matches!(empty, Retrieval::Empty));
    }
}
