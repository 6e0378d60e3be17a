//! Engine error types.
//!
//! The engine itself has no failure modes beyond invalid input; well-formed
//! values are enforced at construction boundaries (see `Response::record`)
//! rather than re-validated inside every computation.

use thiserror::Error;

/// Errors produced at the engine's input boundaries.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The caller supplied a value the data model rules out, e.g. a negative
    /// response time or a selected answer that is not one of the question's
    /// choices.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
