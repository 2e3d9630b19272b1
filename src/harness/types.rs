use serde::Serialize;

use crate::verifier::NameVerdict;

/// One fixed verification test case. The table is caller-assigned and
/// read-only; ids are stable across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameTestCase {
    pub id: u32,
    pub target_name: &'static str,
    pub candidate_name: &'static str,
    pub expected_match: bool,
}

/// Per-case outcome. Either a verdict row (`error` is `None`) or a failure
/// row (verdict fields are `None`, `pass` is forced false).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameTestRow {
    pub id: u32,
    pub target_name: String,
    pub candidate_name: String,
    pub expected_match: bool,
    pub actual_match: Option<bool>,
    pub confidence: Option<f64>,
    pub reason: Option<String>,
    pub pass: bool,
    pub error: Option<String>,
}

impl NameTestRow {
    /// Row for a case whose verifier call succeeded.
    pub(crate) fn from_verdict(case: &NameTestCase, verdict: NameVerdict) -> Self {
        let pass = verdict.matched == case.expected_match;

        Self {
            id: case.id,
            target_name: case.target_name.to_string(),
            candidate_name: case.candidate_name.to_string(),
            expected_match: case.expected_match,
            actual_match: Some(verdict.matched),
            confidence: Some(verdict.confidence),
            reason: Some(verdict.reason),
            pass,
            error: None,
        }
    }

    /// Row for a case whose verifier call failed for any reason.
    pub(crate) fn from_failure(case: &NameTestCase, message: String) -> Self {
        Self {
            id: case.id,
            target_name: case.target_name.to_string(),
            candidate_name: case.candidate_name.to_string(),
            expected_match: case.expected_match,
            actual_match: None,
            confidence: None,
            reason: None,
            pass: false,
            error: Some(message),
        }
    }
}

/// Aggregate outcome of one batch run. Rows mirror the input table's order;
/// `failed == total - passed` and `total == rows.len()` always hold.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameTestRunResult {
    pub started_at: String,
    pub completed_at: String,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub rows: Vec<NameTestRow>,
}
