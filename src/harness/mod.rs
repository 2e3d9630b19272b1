//! Batch verification harness.
//!
//! Runs a fixed table of (target, candidate, expected) cases through the
//! verifier, strictly sequentially and strictly in table order, capturing
//! each case's outcome independently. A failing case becomes a row with an
//! error message; it never aborts the batch. This is the one place in the
//! system where a propagated failure turns into data.

pub mod cases;
pub mod types;


pub use cases::NAME_TEST_CASES;
pub use types::{NameTestCase, NameTestRow, NameTestRunResult};

use chrono::{SecondsFormat, Utc};

use crate::provider::ChatProvider;
use crate::verifier::verify_candidate_name;

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Runs every case through the verifier and aggregates pass/fail counts.
///
/// Row `i` of the result always corresponds to case `i` of the input; row
/// count always equals case count.
pub async fn run_name_tests<P: ChatProvider>(
    provider: &P,
    cases: &[NameTestCase],
) -> NameTestRunResult {
    let started_at = now_rfc3339();
    let mut rows = Vec::with_capacity(cases.len());

    for case in cases {
        let row = match verify_candidate_name(provider, case.target_name, case.candidate_name)
            .await
        {
            Ok(verdict) => NameTestRow::from_verdict(case, verdict),
            Err(err) => {
                tracing::warn!(id = case.id, error = %err, "Test case verification failed");
                NameTestRow::from_failure(case, err.to_string())
            }
        };
        rows.push(row);
    }

    let passed = rows.iter().filter(|row| row.pass).count();
    let failed = rows.len() - passed;

    NameTestRunResult {
        started_at,
        completed_at: now_rfc3339(),
        total: rows.len(),
        passed,
        failed,
        rows,
    }
}
