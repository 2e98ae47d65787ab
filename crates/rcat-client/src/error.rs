//! Transport error types.
//!
//! These are internal to the fetch path: [`crate::Transport::request`] logs
//! them and returns `None`. [`crate::HttpTransport::fetch_json`] exposes them
//! for callers that want the cause.

/// Errors from one GET + JSON decode.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// HTTP transport error (connection refused, DNS, TLS, ...).
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// Upstream returned a non-2xx status.
    #[error("{endpoint} returned {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// Response body was not valid JSON.
    #[error("failed to decode JSON from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The underlying HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    ClientInit(#[source] reqwest::Error),
}

impl TransportError {
    /// HTTP status of a non-2xx response, if that is what failed.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
