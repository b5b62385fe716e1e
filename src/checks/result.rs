use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Three-way verdict of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Passed,
    Warning,
    Failed,
}

/// One check's verdict: status, weight, structured details and a
/// human-readable message. Constructed once, never mutated after return.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckResult {
    pub status: CheckStatus,
    /// Contribution toward a downstream composite score, in `[0, 1]`.
    pub weight: f64,
    /// Ordered key→value facts (counts, lengths, found/missing lists) for
    /// UI consumption and testing.
    pub details: IndexMap<String, Value>,
    pub message: String,
}

impl CheckResult {
    #[must_use]
    pub fn new(status: CheckStatus, weight: f64, message: impl Into<String>) -> Self {
        Self {
            status,
            weight,
            details: IndexMap::new(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn passed(weight: f64, message: impl Into<String>) -> Self {
        Self::new(CheckStatus::Passed, weight, message)
    }

    #[must_use]
    pub fn warning(weight: f64, message: impl Into<String>) -> Self {
        Self::new(CheckStatus::Warning, weight, message)
    }

    #[must_use]
    pub fn failed(weight: f64, message: impl Into<String>) -> Self {
        Self::new(CheckStatus::Failed, weight, message)
    }

    #[must_use]
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self.status, CheckStatus::Passed)
    }

    #[must_use]
    pub const fn is_warning(&self) -> bool {
        matches!(self.status, CheckStatus::Warning)
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self.status, CheckStatus::Failed)
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
