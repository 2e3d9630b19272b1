//! Two-attempt structured request execution.

use serde_json::{Map, Value};

use crate::constants::retry_output_tokens;
use crate::provider::{ChatCall, ChatProvider, FinishKind, ResponseEnvelope};
use crate::structured::error::StructuredOutputError;
use crate::structured::schema::ObjectSchema;

/// Immutable description of one structured request.
#[derive(Debug, Clone)]
pub struct StructuredRequest {
    /// Contract identifier (surfaced in diagnostics).
    pub name: &'static str,
    /// Optional contract description forwarded to the provider.
    pub description: Option<&'static str>,
    /// Declared response shape.
    pub schema: ObjectSchema,
    /// System-level policy text.
    pub instructions: String,
    /// User-level content.
    pub input: String,
    /// Token budget for the first attempt.
    pub max_output_tokens: u32,
}

impl StructuredRequest {
    fn call_with_budget(&self, max_output_tokens: u32) -> ChatCall {
        ChatCall {
            name: self.name.to_string(),
            description: self.description.map(str::to_string),
            schema: self.schema.to_request_schema(),
            instructions: self.instructions.clone(),
            input: self.input.clone(),
            max_output_tokens,
        }
    }
}

/// Payload pulled out of one envelope, with the context needed for
/// diagnostics and the retry decision.
#[derive(Debug)]
struct Extracted {
    raw: String,
    finish: FinishKind,
    has_tool_calls: bool,
}

/// Outcome of classifying a first attempt.
#[derive(Debug)]
enum Attempt {
    /// The payload (possibly malformed) is what we have to work with.
    Usable(Extracted),
    /// Empty payload because the budget ran out; one retry is warranted.
    RetryTruncated,
}

fn read_envelope(envelope: ResponseEnvelope) -> Result<Extracted, StructuredOutputError> {
    if let Some(message) = envelope.refusal {
        return Err(StructuredOutputError::Refusal { message });
    }

    Ok(Extracted {
        raw: envelope.payload.into_text().unwrap_or_default(),
        finish: envelope.finish,
        has_tool_calls: envelope.has_tool_calls,
    })
}

fn classify(extracted: Extracted) -> Attempt {
    // With a strict schema contract, some models return no payload at all
    // when the output would exceed the budget; only that case earns a retry.
    if extracted.raw.is_empty() && extracted.finish == FinishKind::Truncated {
        Attempt::RetryTruncated
    } else {
        Attempt::Usable(extracted)
    }
}

/// Parses model output as a JSON object.
///
/// Direct parse of the trimmed text first; if the model wrapped the object
/// in extra prose, fall back to the substring from the first `{` to the last
/// `}`. Arrays and primitives are rejected.
pub(crate) fn parse_json_object(raw: &str) -> Result<Map<String, Value>, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("empty model output".to_string());
    }

    let value: Value = match serde_json::from_str(trimmed) {
        Ok(value) => value,
        Err(_) => {
            let start = trimmed
                .find('{')
                .ok_or_else(|| "no JSON object found in model output".to_string())?;
            let end = trimmed
                .rfind('}')
                .filter(|&end| end > start)
                .ok_or_else(|| "no JSON object found in model output".to_string())?;
            serde_json::from_str(&trimmed[start..=end])
                .map_err(|e| format!("invalid JSON object: {}", e))?
        }
    };

    match value {
        Value::Object(object) => Ok(object),
        _ => Err("parsed output is not a JSON object".to_string()),
    }
}

/// Executes one structured request and returns the validated object.
///
/// At most two provider calls happen per invocation: the original attempt,
/// plus one retry at `max(800, budget * 4)` tokens when the first attempt
/// came back empty with a truncation finish. Every other anomaly fails
/// immediately with a classified error.
pub async fn execute<P: ChatProvider>(
    provider: &P,
    request: &StructuredRequest,
) -> Result<Map<String, Value>, StructuredOutputError> {
    let envelope = provider
        .complete(request.call_with_budget(request.max_output_tokens))
        .await?;

    let extracted = match classify(read_envelope(envelope)?) {
        Attempt::Usable(extracted) => extracted,
        Attempt::RetryTruncated => {
            let budget = retry_output_tokens(request.max_output_tokens);
            tracing::debug!(
                name = request.name,
                retry_budget = budget,
                "Empty truncated output, retrying once"
            );

            let envelope = provider.complete(request.call_with_budget(budget)).await?;
            // Whatever the second attempt holds is final.
            read_envelope(envelope)?
        }
    };

    parse_json_object(&extracted.raw)
        .and_then(|object| {
            request.schema.check_object(&object)?;
            Ok(object)
        })
        .map_err(|detail| StructuredOutputError::MalformedOutput {
            name: request.name,
            finish_reason: extracted.finish.to_string(),
            has_tool_calls: extracted.has_tool_calls,
            raw: extracted.raw.clone(),
            detail,
        })
}
