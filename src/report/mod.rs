//! Console rendering for batch verification runs.
//!
//! The formatting functions are pure and unit-tested; printing and the exit
//! signal sit in thin wrappers around them.

use crate::harness::{NameTestRow, NameTestRunResult};

/// Headline line: `Name verifier tests: 10/12 passed (2 failed)`.
pub fn format_summary_line(result: &NameTestRunResult) -> String {
    format!(
        "Name verifier tests: {}/{} passed ({} failed)",
        result.passed, result.total, result.failed
    )
}

/// One table line per row.
pub fn format_row_line(row: &NameTestRow) -> String {
    let status = if row.pass { "PASS" } else { "FAIL" };
    let expected = if row.expected_match {
        "Match"
    } else {
        "No Match"
    };
    let actual = match row.actual_match {
        None => "ERROR",
        Some(true) => "Match",
        Some(false) => "No Match",
    };
    let confidence = row
        .confidence
        .map(|c| format!("{:.1}", c))
        .unwrap_or_else(|| "-".to_string());
    let detail = row
        .error
        .as_deref()
        .or(row.reason.as_deref())
        .unwrap_or_default();

    format!(
        "{} #{:<3} expected={:<8} actual={:<8} confidence={:<4} {} / {}  {}",
        status,
        row.id,
        expected,
        actual,
        confidence,
        row.target_name,
        row.candidate_name,
        detail
    )
}

/// Prints the full run: summary first, then one line per row.
pub fn print_run(result: &NameTestRunResult) {
    println!("{}", format_summary_line(result));
    println!();
    for row in &result.rows {
        println!("{}", format_row_line(row));
    }
}

/// Process exit signal for a run: non-zero when anything failed.
pub fn exit_code(result: &NameTestRunResult) -> i32 {
    if result.failed > 0 { 1 } else { 0 }
}
