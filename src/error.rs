//! Error types
//!
//! Parsing itself is total and declares no error kinds; only document
//! retrieval can fail. Messages are meant to be shown to the user as-is.

use thiserror::Error;

/// Errors raised while fetching source documents
#[derive(Error, Debug)]
pub enum VaultError {
    /// The server answered with a non-success status
    #[error("HTTP {status} for {url}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Source URL the request went to
        url: String,
    },

    /// The request failed before a response arrived
    #[cfg(feature = "fetch")]
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        /// Source URL the request went to
        url: String,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// The HTTP client could not be constructed
    #[cfg(feature = "fetch")]
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Result type alias for promptvault operations
pub type Result<T> = std::result::Result<T, VaultError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_names_url() {
        let err = VaultError::HttpStatus {
            status: 404,
            url: "https://example.com/pub?output=csv".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "HTTP 404 for https://example.com/pub?output=csv"
        );
    }
}
