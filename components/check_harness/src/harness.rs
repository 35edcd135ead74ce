//! Check runner with block grouping

use crate::equal::deep_equal;
use crate::outcome::Outcome;
use crate::report::{CheckFailure, CheckReport};
use crate::writer::{CheckWriter, StdoutWriter};
use tracing::{debug, info, warn};

/// Result of a single check
#[derive(Debug, Clone)]
pub enum CheckResult {
    /// Actual matched expected
    Pass,
    /// Actual differed from expected
    Fail {
        /// Expected result
        expected: Outcome,
        /// Actual result
        actual: Outcome,
    },
    /// Check belongs to a block that was not selected
    Skip,
}

impl CheckResult {
    /// Check if the result is a pass
    pub fn is_pass(&self) -> bool {
        matches!(self, CheckResult::Pass)
    }

    /// Check if the result is a failure
    pub fn is_fail(&self) -> bool {
        matches!(self, CheckResult::Fail { .. })
    }

    /// Check if the result is a skip
    pub fn is_skip(&self) -> bool {
        matches!(self, CheckResult::Skip)
    }
}

/// Records named checks and reports them, grouped into blocks
///
/// ```
/// use check_harness::{CaptureWriter, Harness};
///
/// let writer = CaptureWriter::new();
/// let mut harness = Harness::with_writer(Box::new(writer.clone()));
/// harness.begin_block("getType");
/// harness.check("Boolean", "boolean", "boolean");
/// assert!(harness.report().is_success());
/// assert_eq!(writer.lines(), vec!["# getType", "  [OK] Boolean"]);
/// ```
pub struct Harness {
    writer: Box<dyn CheckWriter>,
    current_block: Option<String>,
    block_filter: Option<String>,
    report: CheckReport,
}

impl Harness {
    /// Create a harness writing to stdout/stderr
    pub fn new() -> Self {
        Self::with_writer(Box::new(StdoutWriter))
    }

    /// Create a harness with a custom output sink
    pub fn with_writer(writer: Box<dyn CheckWriter>) -> Self {
        Self {
            writer,
            current_block: None,
            block_filter: None,
            report: CheckReport::new(),
        }
    }

    /// Only run checks in the block called `name`
    pub fn with_block_filter(mut self, name: impl Into<String>) -> Self {
        self.block_filter = Some(name.into());
        self
    }

    fn block_selected(&self) -> bool {
        match (&self.block_filter, &self.current_block) {
            (None, _) => true,
            (Some(filter), Some(block)) => filter == block,
            (Some(_), None) => false,
        }
    }

    fn indent(&self) -> &'static str {
        if self.current_block.is_some() {
            "  "
        } else {
            ""
        }
    }

    /// Start a new named block; later checks are grouped under it
    pub fn begin_block(&mut self, name: &str) {
        self.current_block = Some(name.to_string());
        if self.block_selected() {
            info!(block = name, "starting block");
            self.writer.write(&format!("# {}", name));
        }
    }

    /// Compare `actual` against `expected` and report the outcome
    pub fn check(
        &mut self,
        description: &str,
        actual: impl Into<Outcome>,
        expected: impl Into<Outcome>,
    ) -> CheckResult {
        if !self.block_selected() {
            self.report.record_skip();
            return CheckResult::Skip;
        }

        let actual = actual.into();
        let expected = expected.into();
        let indent = self.indent();

        if deep_equal(&actual, &expected) {
            debug!(check = description, "check passed");
            self.writer.write(&format!("{}[OK] {}", indent, description));
            self.report.record_pass();
            CheckResult::Pass
        } else {
            warn!(check = description, %expected, %actual, "check failed");
            self.writer.write_error(&format!("{}[FAIL] {}", indent, description));
            self.writer.write_error(&format!("{}  Expected: {}", indent, expected));
            self.writer.write_error(&format!("{}  Actual: {}", indent, actual));
            self.report.record_failure(CheckFailure {
                block: self.current_block.clone(),
                description: description.to_string(),
                expected: expected.clone(),
                actual: actual.clone(),
            });
            CheckResult::Fail { expected, actual }
        }
    }

    /// Report accumulated so far
    pub fn report(&self) -> &CheckReport {
        &self.report
    }

    /// Write the summary line and hand back the report
    pub fn finish(self) -> CheckReport {
        info!(
            total = self.report.total,
            failed = self.report.failed,
            "check run finished"
        );
        self.writer.write(&self.report.summary());
        self.report
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}
