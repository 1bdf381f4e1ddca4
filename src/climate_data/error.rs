use serde::Serialize;
use thiserror::Error;

/// Coarse classification of a failed fetch, for deciding what to tell the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FailureKind {
    /// The data could not be retrieved (transport, timeout, status or undecodable body).
    Network,
    /// The request succeeded but no usable monthly record remained.
    EmptyResult,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("Request to {0} timed out")]
    Timeout(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to decode climate API response from {0}")]
    ResponseDecode(String, #[source] serde_json::Error),

    #[error("No valid monthly records for '{region}' ({dropped} records dropped)")]
    EmptyResult { region: String, dropped: usize },
}

impl FetchError {
    pub fn kind(&self) -> FailureKind {
        match self {
            FetchError::EmptyResult { .. } => FailureKind::EmptyResult,
            FetchError::NetworkRequest(..)
            | FetchError::Timeout(..)
            | FetchError::HttpStatus { .. }
            | FetchError::ResponseDecode(..) => FailureKind::Network,
        }
    }

    pub fn is_network_failure(&self) -> bool {
        self.kind() == FailureKind::Network
    }

    /// A short message suitable for showing next to the region in a UI.
    pub fn user_message(&self, region: &str) -> String {
        match self.kind() {
            FailureKind::Network => format!("Could not retrieve data for {region}"),
            FailureKind::EmptyResult => format!("No data available for {region}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_is_not_network() {
        let err = FetchError::EmptyResult {
            region: "Turkana".to_string(),
            dropped: 4,
        };
        assert_eq!(err.kind(), FailureKind::EmptyResult);
        assert!(!err.is_network_failure());
        assert_eq!(err.user_message("Turkana"), "No data available for Turkana");
    }

    #[test]
    fn test_decode_failure_is_network_class() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = FetchError::ResponseDecode("http://localhost".to_string(), source);
        assert!(err.is_network_failure());
        assert_eq!(err.user_message("Meru"), "Could not retrieve data for Meru");
    }
}
