use thiserror::Error;

use crate::provider::ProviderError;

/// Classified failures of a structured output request.
#[derive(Debug, Error)]
pub enum StructuredOutputError {
    /// The model declined to answer. Surfaced verbatim, never retried.
    #[error("model refusal: {message}")]
    Refusal { message: String },

    /// The payload could not be parsed or validated as the required shape,
    /// even after fallback extraction. Carries enough context to diagnose
    /// what the model actually sent.
    #[error(
        "failed to parse structured output for {name}: {detail} \
         (finish_reason={finish_reason} has_tool_calls={has_tool_calls}) raw output: {raw}"
    )]
    MalformedOutput {
        name: &'static str,
        finish_reason: String,
        has_tool_calls: bool,
        raw: String,
        detail: String,
    },

    /// Endpoint-level failure, passed through unchanged.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}
