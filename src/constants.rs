//! Cross-cutting, shared constants.
//!
//! Prefer deriving secondary values (e.g. retry budgets) from primary ones to
//! avoid drift.

/// Token budget for a target-name generation request.
pub const GENERATOR_MAX_OUTPUT_TOKENS: u32 = 256;

/// Token budget for a candidate verification request.
pub const VERIFIER_MAX_OUTPUT_TOKENS: u32 = 300;

/// Floor for the retry token budget after an empty, truncated response.
pub const RETRY_MIN_OUTPUT_TOKENS: u32 = 800;

/// Multiplier applied to the original budget on the truncation retry.
pub const RETRY_BUDGET_MULTIPLIER: u32 = 4;

/// Lower bound of the verifier confidence scale.
pub const CONFIDENCE_MIN: f64 = 0.0;

/// Upper bound of the verifier confidence scale.
pub const CONFIDENCE_MAX: f64 = 10.0;

/// Reason reported when the model returns a verdict without one.
pub const DEFAULT_VERDICT_REASON: &str = "No reason provided.";

/// Token budget for the single retry issued after an empty, truncated
/// response. Strict schema outputs tend to be dropped entirely rather than
/// cut mid-object, so the retry needs real headroom, not a nudge.
pub fn retry_output_tokens(original: u32) -> u32 {
    RETRY_MIN_OUTPUT_TOKENS.max(original.saturating_mul(RETRY_BUDGET_MULTIPLIER))
}
