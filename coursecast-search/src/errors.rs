//! Error types for video search functionality.

use thiserror::Error;

/// Errors that can occur while running a keyword search.
///
/// Validation problems reported by the backend are not errors: they arrive
/// as `SearchResponse::Errors`. Everything here is a transport or contract
/// failure the user cannot fix by editing the keyword.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VideoSearchError {
    /// Backend could not be reached.
    #[error("Network error: {reason}")]
    NetworkError {
        /// The reason for the network error
        reason: String,
    },

    /// Backend did not answer within the configured timeout.
    #[error("Search request timed out: {reason}")]
    Timeout {
        /// The reason reported by the HTTP client
        reason: String,
    },

    /// Backend answered with a non-success status and no validation payload.
    #[error("Search endpoint returned HTTP {status}")]
    HttpStatus {
        /// The HTTP status code
        status: u16,
    },

    /// Response body did not match the search contract.
    #[error("Parse error: {reason}")]
    ParseError {
        /// The reason for the parse error
        reason: String,
    },

    /// Search backend is misconfigured or unavailable.
    #[error("Provider error: {reason}")]
    ProviderError {
        /// The reason for the provider error
        reason: String,
    },
}

impl VideoSearchError {
    /// Returns the message shown to the user in place of results.
    pub fn user_message(&self) -> String {
        match self {
            VideoSearchError::NetworkError { .. } | VideoSearchError::ProviderError { .. } => {
                "Video search is unavailable right now. Please try again later.".to_string()
            }
            VideoSearchError::Timeout { .. } => {
                "Video search took too long to respond. Please try again.".to_string()
            }
            VideoSearchError::HttpStatus { status } => {
                format!("Video search failed (HTTP {status}). Please try again.")
            }
            VideoSearchError::ParseError { .. } => {
                "Video search returned an unexpected response.".to_string()
            }
        }
    }
}

impl From<reqwest::Error> for VideoSearchError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            VideoSearchError::Timeout {
                reason: error.to_string(),
            }
        } else if error.is_decode() {
            VideoSearchError::ParseError {
                reason: error.to_string(),
            }
        } else {
            VideoSearchError::NetworkError {
                reason: error.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for VideoSearchError {
    fn from(error: serde_json::Error) -> Self {
        VideoSearchError::ParseError {
            reason: error.to_string(),
        }
    }
}
