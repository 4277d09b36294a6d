//! Error types for the feed client.
//!
//! # Design
//! Callers only need to tell "the request never produced a usable response"
//! apart from "the response body was not what we expected", so `ApiError`
//! has exactly those two kinds. A non-200 status counts as a transport
//! failure; the status and raw body are kept for debugging.

use thiserror::Error;

/// Errors returned by fetchers and the binder.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP round-trip failed or returned a non-success status.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}

/// Failures below the JSON layer.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection refused, timeout, interrupted read and the like.
    #[error("request to {url} failed: {message}")]
    Io { url: String, message: String },

    /// The server answered, but not with 200.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
}
