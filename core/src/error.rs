//! Error types for the feed loader and its transport.
//!
//! # Design
//! `LoadError` is the whole domain taxonomy: a request either never completed
//! (`Connectivity`) or completed with something unusable (`InvalidData`).
//! Transport failures carry diagnostic text in `TransportError`, but the
//! loader collapses every one of them to `Connectivity` before a caller sees
//! it, so transport-specific types stay out of the public result.

use thiserror::Error;

/// Errors surfaced to callers of a feed load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum LoadError {
    /// The transport failed to complete the request.
    #[error("could not reach the feed server")]
    Connectivity,

    /// The request completed, but the status or payload was unusable.
    #[error("the feed response was invalid")]
    InvalidData,
}

/// Errors reported by an `HttpClient` implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request could not be sent or the response could not be read.
    #[error("request failed: {0}")]
    Request(String),

    /// The transport dropped its completion handler without calling it.
    #[error("transport dropped the request without completing it")]
    Abandoned,
}
