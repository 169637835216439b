//! Common error types for the NextTrack client

use thiserror::Error;

/// Common result type for NextTrack operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to the caller.
///
/// Per-frame decode failures are deliberately absent: a frame that fails to
/// decode is skipped inside the stream pipeline and never becomes an `Error`.
#[derive(Error, Debug)]
pub enum Error {
    /// Transport could not reach the endpoint, or a read failed mid-stream
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered the request with a non-success status
    #[error("API error {0}: {1}")]
    Api(u16, String),

    /// Request construction rejected the input
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}
