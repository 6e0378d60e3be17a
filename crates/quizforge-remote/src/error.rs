//! Delegate error types.
//!
//! Every transport or parse failure collapses into a single `Unavailable`
//! kind: the delegate wrapper falls back to the local engine rather than
//! propagating remote failures to the caller, so a finer taxonomy would buy
//! nothing.

use thiserror::Error;

/// Errors from the remote quiz API.
#[derive(Debug, Error)]
pub enum DelegateError {
    /// The remote service could not produce an answer: network error,
    /// timeout, non-success status, or a malformed response body.
    #[error("remote engine unavailable: {0}")]
    Unavailable(String),
}
