//! Candidate name verification.
//!
//! One model call judges whether a candidate string refers to the same
//! entity as a target string, under a fixed matching policy. The model's
//! reasoning is opaque; this module owns the contract around it: input
//! validation, the schema, the rendered policy, and defensive
//! post-processing of the verdict.

pub mod error;
pub mod policy;
pub mod types;


pub use error::VerifyError;
pub use policy::MatchPolicy;
pub use types::NameVerdict;

use crate::constants::VERIFIER_MAX_OUTPUT_TOKENS;
use crate::provider::ChatProvider;
use crate::structured::{ObjectSchema, StructuredRequest, execute};

fn verification_request(target: &str, candidate: &str, policy: &MatchPolicy) -> StructuredRequest {
    StructuredRequest {
        name: "NameVerification",
        description: Some(
            "Whether the candidate matches the target, with confidence 0-10 and a short reason.",
        ),
        schema: ObjectSchema::new()
            .boolean("match")
            .number_in_range("confidence", 0.0, 10.0)
            .string("reason"),
        instructions: policy.instructions(),
        input: format!(
            "Target name: {}\nCandidate name: {}\n\nDecide match=true/false.",
            target, candidate
        ),
        max_output_tokens: VERIFIER_MAX_OUTPUT_TOKENS,
    }
}

/// Judges whether `candidate_name` refers to the same entity as
/// `target_name`.
///
/// Blank inputs are rejected before any outbound call. Executor errors
/// propagate unchanged. The verdict is post-processed: confidence clamped
/// into [0, 10] (non-numeric becomes 0), a missing or blank reason becomes a
/// fixed placeholder, and match is read as a strict boolean.
pub async fn verify_candidate_name<P: ChatProvider>(
    provider: &P,
    target_name: &str,
    candidate_name: &str,
) -> Result<NameVerdict, VerifyError> {
    let target = target_name.trim();
    let candidate = candidate_name.trim();

    if target.is_empty() {
        return Err(VerifyError::InvalidInput {
            reason: "no target name provided".to_string(),
        });
    }
    if candidate.is_empty() {
        return Err(VerifyError::InvalidInput {
            reason: "candidate name is required".to_string(),
        });
    }

    let request = verification_request(target, candidate, &MatchPolicy::default());
    let object = execute(provider, &request).await?;

    let verdict = NameVerdict::from_model_output(&object);

    tracing::debug!(
        matched = verdict.matched,
        confidence = verdict.confidence,
        "Verified candidate name"
    );

    Ok(verdict)
}
