//! Error types for the items client.
//!
//! A 400 gets its own variant because it is the one failure the service
//! documents: the body carries the decoder's message. Every other unexpected
//! status lands in `HttpError` with the raw status and body.

use thiserror::Error;

/// Errors returned by `ItemsClient`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The service rejected the request body.
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    #[error("serialization failed: {0}")]
    SerializationError(String),
}
