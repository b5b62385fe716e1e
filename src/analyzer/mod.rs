use std::panic::{AssertUnwindSafe, catch_unwind};

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::checks::{Check, CheckStatus};
use crate::context::Context;

/// Status of one per-check entry in an analysis. `Faulted` marks a check
/// whose implementation panicked; it is recorded, never dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Passed,
    Warning,
    Failed,
    Faulted,
}

impl From<CheckStatus> for ReportStatus {
    fn from(status: CheckStatus) -> Self {
        match status {
            CheckStatus::Passed => Self::Passed,
            CheckStatus::Warning => Self::Warning,
            CheckStatus::Failed => Self::Failed,
        }
    }
}

/// One check's entry in the aggregated analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    pub status: ReportStatus,
    pub weight: f64,
    pub details: IndexMap<String, Value>,
    pub message: String,
    /// Synthesized hint for UI consumption; currently mirrors `message`.
    pub fix_hint: String,
}

/// Status counts over one analysis. `total` always equals the number of
/// checks actually executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    pub passed: usize,
    pub warnings: usize,
    pub failed: usize,
    pub faulted: usize,
    pub total: usize,
}

/// Aggregated verdict over one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub status: CheckStatus,
    pub checks: IndexMap<String, CheckReport>,
    pub summary: Summary,
}

impl Analysis {
    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self.status, CheckStatus::Passed)
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self.status, CheckStatus::Failed)
    }

    #[must_use]
    pub const fn is_warning(&self) -> bool {
        matches!(self.status, CheckStatus::Warning)
    }
}

/// Runs a set of checks against one `Context` and folds their verdicts into
/// one overall status plus a status-count summary.
///
/// The analyzer holds no state across calls: each `analyze` invocation is a
/// pure fold over the supplied check set and re-entrant.
pub struct Analyzer {
    checks: Vec<Box<dyn Check>>,
}

impl Analyzer {
    #[must_use]
    pub fn new(checks: Vec<Box<dyn Check>>) -> Self {
        Self { checks }
    }

    /// Run every check in order and aggregate. A panicking check is isolated
    /// as a `Faulted` entry; the remaining checks still run.
    ///
    /// Overall status is a strict precedence fold, not an average: any FAIL
    /// dominates, then any WARN (faulted entries count as WARN-grade), else
    /// PASS.
    #[must_use]
    pub fn analyze(&self, context: &Context) -> Analysis {
        let mut checks = IndexMap::with_capacity(self.checks.len());
        let mut summary = Summary::default();

        for check in &self.checks {
            let report = match catch_unwind(AssertUnwindSafe(|| check.run(context))) {
                Ok(result) => {
                    match result.status {
                        CheckStatus::Passed => summary.passed += 1,
                        CheckStatus::Warning => summary.warnings += 1,
                        CheckStatus::Failed => summary.failed += 1,
                    }
                    CheckReport {
                        status: result.status.into(),
                        weight: result.weight,
                        details: result.details,
                        fix_hint: result.message.clone(),
                        message: result.message,
                    }
                }
                Err(payload) => {
                    summary.faulted += 1;
                    let message =
                        format!("Check could not run: {}", panic_message(payload.as_ref()));
                    CheckReport {
                        status: ReportStatus::Faulted,
                        weight: check.weight(),
                        details: IndexMap::new(),
                        fix_hint: message.clone(),
                        message,
                    }
                }
            };
            checks.insert(check.id().to_string(), report);
        }

        summary.total = checks.len();

        let status = if summary.failed > 0 {
            CheckStatus::Failed
        } else if summary.warnings > 0 || summary.faulted > 0 {
            CheckStatus::Warning
        } else {
            CheckStatus::Passed
        };

        Analysis {
            status,
            checks,
            summary,
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    payload.downcast_ref::<&str>().map_or_else(
        || {
            payload
                .downcast_ref::<String>()
                .cloned()
                .unwrap_or_else(|| "unknown panic".to_string())
        },
        |s| (*s).to_string(),
    )
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
