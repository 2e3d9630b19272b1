use thiserror::Error;

use crate::structured::StructuredOutputError;

/// Errors raised by target name generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Caller-supplied input was blank; no outbound call was made.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Schema-valid response whose target name was empty after trimming.
    #[error("model returned an empty targetName")]
    EmptyResult,

    /// Extraction-layer failure, propagated unchanged.
    #[error(transparent)]
    Structured(#[from] StructuredOutputError),
}
