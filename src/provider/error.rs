use thiserror::Error;

/// Errors raised at the model endpoint boundary.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The underlying API call failed (network, auth, server error).
    #[error("model endpoint request failed: {0}")]
    Api(#[from] async_openai::error::OpenAIError),

    /// The request could not be assembled into the provider's wire shape.
    #[error("failed to construct chat request: {0}")]
    RequestBuild(String),

    /// The response arrived without any choices to read.
    #[error("model endpoint returned no choices")]
    NoChoices,

    /// The endpoint could not be reached or the call was aborted.
    #[error("model endpoint unavailable: {0}")]
    Unavailable(String),
}
