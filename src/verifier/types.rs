use serde::Serialize;
use serde_json::{Map, Value};

use crate::constants::{CONFIDENCE_MAX, CONFIDENCE_MIN, DEFAULT_VERDICT_REASON};

/// Structured outcome of one verification call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NameVerdict {
    /// Whether the candidate refers to the same entity as the target.
    #[serde(rename = "match")]
    pub matched: bool,

    /// Model confidence on a 0-10 scale, always clamped into range.
    pub confidence: f64,

    /// Short explanation; never empty.
    pub reason: String,
}

impl NameVerdict {
    /// Builds a verdict from a validated model output object, applying the
    /// defensive refinements the wire contract cannot guarantee.
    pub(crate) fn from_model_output(object: &Map<String, Value>) -> Self {
        let matched = object
            .get("match")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        let confidence = clamp_confidence(object.get("confidence"));

        let reason = object
            .get("reason")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|reason| !reason.is_empty())
            .unwrap_or(DEFAULT_VERDICT_REASON)
            .to_string();

        Self {
            matched,
            confidence,
            reason,
        }
    }
}

/// Clamps a model-reported confidence into [0, 10]; anything non-numeric
/// (missing, string, null) becomes 0.
pub(crate) fn clamp_confidence(value: Option<&Value>) -> f64 {
    value
        .and_then(Value::as_f64)
        .map(|confidence| confidence.clamp(CONFIDENCE_MIN, CONFIDENCE_MAX))
        .unwrap_or(CONFIDENCE_MIN)
}
