use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::generator::GenerateError;
use crate::verifier::VerifyError;

/// Route-level errors.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Request body failed validation. Message is user-facing.
    #[error("{0}")]
    InvalidRequest(String),

    /// Target name generation failed.
    #[error(transparent)]
    Generate(#[from] GenerateError),

    /// Candidate verification failed.
    #[error(transparent)]
    Verify(#[from] VerifyError),
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::Generate(GenerateError::InvalidInput { .. }) => StatusCode::BAD_REQUEST,
            GatewayError::Verify(VerifyError::InvalidInput { .. }) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}
