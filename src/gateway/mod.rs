//! HTTP gateway (Axum) for name generation and verification.
//!
//! This module is primarily used by the `namecheck` server binary.

pub mod error;
pub mod state;

#[cfg(test)]
mod handler_tests;

use axum::{
    Json, Router,
    extract::State,
    extract::rejection::JsonRejection,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::instrument;

pub use error::GatewayError;
pub use state::HandlerState;

use crate::generator::{TargetNameOutcome, generate_target_name};
use crate::harness::{NAME_TEST_CASES, NameTestRunResult, run_name_tests};
use crate::provider::ChatProvider;
use crate::verifier::{NameVerdict, verify_candidate_name};

pub fn create_router_with_state<P>(state: HandlerState<P>) -> Router
where
    P: ChatProvider + 'static,
{
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/generate", post(generate_handler))
        .route("/verify", post(verify_handler))
        .route("/run-tests", post(run_tests_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateRequest {
    pub prompt: String,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VerifyRequest {
    pub target_name: String,
    pub candidate_name: String,
}

#[tracing::instrument]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// `POST /generate` — one target name from a free-form prompt.
///
/// A missing or unparseable body is treated as an empty prompt, so the
/// caller always gets the validation message rather than a framework
/// rejection.
#[instrument(skip(state, body))]
pub async fn generate_handler<P>(
    State(state): State<HandlerState<P>>,
    body: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<TargetNameOutcome>, GatewayError>
where
    P: ChatProvider + 'static,
{
    let prompt = body.map(|Json(body)| body.prompt).unwrap_or_default();

    if prompt.trim().is_empty() {
        return Err(GatewayError::InvalidRequest(
            "Prompt is required.".to_string(),
        ));
    }

    let outcome = generate_target_name(state.provider.as_ref(), &prompt).await?;
    Ok(Json(outcome))
}

/// `POST /verify` — judge a candidate against a target name.
#[instrument(skip(state, body))]
pub async fn verify_handler<P>(
    State(state): State<HandlerState<P>>,
    body: Result<Json<VerifyRequest>, JsonRejection>,
) -> Result<Json<NameVerdict>, GatewayError>
where
    P: ChatProvider + 'static,
{
    let body = body.map(|Json(body)| body).unwrap_or_default();

    if body.target_name.trim().is_empty() {
        return Err(GatewayError::InvalidRequest(
            "No target name has been generated yet.".to_string(),
        ));
    }
    if body.candidate_name.trim().is_empty() {
        return Err(GatewayError::InvalidRequest(
            "Candidate name is required.".to_string(),
        ));
    }

    let verdict =
        verify_candidate_name(state.provider.as_ref(), &body.target_name, &body.candidate_name)
            .await?;
    Ok(Json(verdict))
}

/// `POST /run-tests` — run the fixed verification table.
///
/// Per-case failures are embedded in rows; the route itself only fails when
/// the batch cannot start at all.
#[instrument(skip(state))]
pub async fn run_tests_handler<P>(
    State(state): State<HandlerState<P>>,
) -> Result<Json<NameTestRunResult>, GatewayError>
where
    P: ChatProvider + 'static,
{
    let result = run_name_tests(state.provider.as_ref(), &NAME_TEST_CASES).await;
    Ok(Json(result))
}
