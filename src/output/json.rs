use serde::Serialize;

use crate::analyzer::Analysis;
use crate::checks::CheckStatus;
use crate::error::Result;

use super::{DocumentReport, OutputFormatter};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: BatchSummary,
    results: Vec<DocumentResult<'a>>,
}

#[derive(Serialize)]
struct BatchSummary {
    total_documents: usize,
    passed: usize,
    warnings: usize,
    failed: usize,
}

#[derive(Serialize)]
struct DocumentResult<'a> {
    source: &'a str,
    #[serde(flatten)]
    analysis: &'a Analysis,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, reports: &[DocumentReport]) -> Result<String> {
        let (passed, warnings, failed) =
            reports
                .iter()
                .fold((0, 0, 0), |(p, w, f), r| match r.analysis.status {
                    CheckStatus::Passed => (p + 1, w, f),
                    CheckStatus::Warning => (p, w + 1, f),
                    CheckStatus::Failed => (p, w, f + 1),
                });

        let output = JsonOutput {
            summary: BatchSummary {
                total_documents: reports.len(),
                passed,
                warnings,
                failed,
            },
            results: reports
                .iter()
                .map(|r| DocumentResult {
                    source: &r.source,
                    analysis: &r.analysis,
                })
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
