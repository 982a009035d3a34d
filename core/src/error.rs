//! Error types for the food plate client and dashboard.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers distinguish "the plate
//! does not exist" from "the server returned an unexpected status." All other
//! non-success responses land in `HttpError` with the raw status and body.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a status other than the expected one or 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The round trip itself failed (connection refused, reset, bad URL).
    #[error("transport failed: {0}")]
    Transport(String),

    /// Update was requested while no plate was being edited.
    #[error("no food plate is being edited")]
    NoEditTarget,
}
