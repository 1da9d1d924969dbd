//! Error types for the Drive file listing provider

use core_auth::AuthError;
use thiserror::Error;

/// Failures surfaced by [`DriveConnector`](crate::DriveConnector).
///
/// Every provider-level and transport-level failure is re-expressed as one
/// of these; raw transport errors never reach the caller.
#[derive(Error, Debug)]
pub enum FetchError {
    /// No valid token could be obtained; carries the authorization failure.
    #[error("authorization required: {0}")]
    Unauthorized(#[from] AuthError),

    /// The Drive API answered with an error status.
    #[error("Drive API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// The response body did not contain the expected file listing.
    #[error("malformed file listing response: {0}")]
    MalformedResponse(String),
}

/// Result type for Drive listing operations
pub type Result<T> = std::result::Result<T, FetchError>;
