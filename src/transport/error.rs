//! Error types for the fetch boundary.
//!
//! The taxonomy exists for logging only: dispatchers collapse every
//! variant into a payload-less failure signal, so nothing here ever
//! reaches state or the UI.

use thiserror::Error;

/// Errors that can occur while fetching from the service.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Failed to reach the service at all.
    #[error("Connection failed to '{url}': {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the total timeout.
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// The service answered with a non-success status.
    #[error("Service returned {status} for '{url}'")]
    Status { url: String, status: u16 },

    /// The response body was not valid JSON.
    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
