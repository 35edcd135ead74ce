//! Aggregated check statistics

use crate::outcome::Outcome;
use serde::Serialize;

/// A failed check with both payloads
#[derive(Debug, Clone, Serialize)]
pub struct CheckFailure {
    /// Block the check ran in, if any
    pub block: Option<String>,
    /// What was checked
    pub description: String,
    /// Expected result
    pub expected: Outcome,
    /// Actual result
    pub actual: Outcome,
}

/// Check run report with statistics and failure details
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckReport {
    /// Total number of checks seen
    pub total: usize,
    /// Number of checks that passed
    pub passed: usize,
    /// Number of checks that failed
    pub failed: usize,
    /// Number of checks outside the selected block
    pub skipped: usize,
    /// Failure details in run order
    pub failures: Vec<CheckFailure>,
}

impl CheckReport {
    /// Create a new empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a passing check
    pub fn record_pass(&mut self) {
        self.total += 1;
        self.passed += 1;
    }

    /// Count a failing check
    pub fn record_failure(&mut self, failure: CheckFailure) {
        self.total += 1;
        self.failed += 1;
        self.failures.push(failure);
    }

    /// Count a skipped check
    pub fn record_skip(&mut self) {
        self.total += 1;
        self.skipped += 1;
    }

    /// Pass rate over executed checks, as a percentage
    pub fn pass_rate(&self) -> f64 {
        let executed = self.total - self.skipped;
        if executed == 0 {
            0.0
        } else {
            (self.passed as f64 / executed as f64) * 100.0
        }
    }

    /// Whether no check failed
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Generate a human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "Checks: {} total, {} passed, {} failed, {} skipped ({:.1}% pass)",
            self.total,
            self.passed,
            self.failed,
            self.skipped,
            self.pass_rate()
        )
    }

    /// Summary followed by one entry per failure
    pub fn detailed_summary(&self) -> String {
        let mut output = self.summary();

        if !self.failures.is_empty() {
            output.push_str("\n\nFailures:\n");
            for failure in &self.failures {
                match &failure.block {
                    Some(block) => {
                        output.push_str(&format!("  - {} / {}\n", block, failure.description))
                    }
                    None => output.push_str(&format!("  - {}\n", failure.description)),
                }
                output.push_str(&format!(
                    "    Expected: {}\n    Actual: {}\n",
                    failure.expected, failure.actual
                ));
            }
        }

        output
    }

    /// Export report as JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
