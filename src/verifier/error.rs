use thiserror::Error;

use crate::structured::StructuredOutputError;

/// Errors raised by candidate verification.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// Caller-supplied input was blank; no outbound call was made.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Extraction-layer failure, propagated unchanged.
    #[error(transparent)]
    Structured(#[from] StructuredOutputError),
}
