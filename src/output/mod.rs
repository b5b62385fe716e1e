mod json;
mod progress;
mod text;

pub use json::JsonFormatter;
pub use progress::AnalysisProgress;
pub use text::{ColorMode, TextFormatter};

use crate::analyzer::Analysis;
use crate::error::Result;

/// One analyzed document paired with where it came from.
#[derive(Debug, Clone)]
pub struct DocumentReport {
    /// Display name for the document (file path or `<stdin>`).
    pub source: String,
    pub analysis: Analysis,
}

/// Trait for formatting analysis reports into various output formats.
pub trait OutputFormatter {
    /// Format the document reports into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, reports: &[DocumentReport]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
