//! Target name generation.

pub mod error;


pub use error::GenerateError;

use serde::Serialize;
use serde_json::Value;

use crate::constants::GENERATOR_MAX_OUTPUT_TOKENS;
use crate::provider::ChatProvider;
use crate::structured::{ObjectSchema, StructuredRequest, execute};

const TARGET_NAME_INSTRUCTIONS: &str = "You are a target name generator.\n\
Given a user prompt, generate EXACTLY ONE target name string.\n\
Return ONLY valid JSON that matches the provided schema.\n\
Do not include extra keys.\n\
The targetName value must be a single string (not an array).";

/// A generated target name. Produced once per call; the caller owns the
/// notion of "latest" by overwriting its own reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetNameOutcome {
    pub target_name: String,
}

fn generation_request(prompt: &str) -> StructuredRequest {
    StructuredRequest {
        name: "TargetName",
        description: Some("A single generated target name string."),
        schema: ObjectSchema::new().string("targetName"),
        instructions: TARGET_NAME_INSTRUCTIONS.to_string(),
        input: prompt.to_string(),
        max_output_tokens: GENERATOR_MAX_OUTPUT_TOKENS,
    }
}

/// Generates one target name from a free-form prompt.
///
/// Blank prompts are rejected before any outbound call. Executor errors
/// propagate unchanged; one invocation triggers at most two upstream
/// requests (the executor's internal truncation retry).
pub async fn generate_target_name<P: ChatProvider>(
    provider: &P,
    prompt: &str,
) -> Result<TargetNameOutcome, GenerateError> {
    let trimmed = prompt.trim();
    if trimmed.is_empty() {
        return Err(GenerateError::InvalidInput {
            reason: "prompt is required".to_string(),
        });
    }

    let object = execute(provider, &generation_request(trimmed)).await?;

    let target_name = object
        .get("targetName")
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or_default()
        .to_string();

    if target_name.is_empty() {
        return Err(GenerateError::EmptyResult);
    }

    tracing::debug!(target_name = %target_name, "Generated target name");

    Ok(TargetNameOutcome { target_name })
}
