use std::io::Write as IoWrite;

use crate::analyzer::{Analysis, ReportStatus};
use crate::checks::CheckStatus;
use crate::error::Result;

use super::{DocumentReport, OutputFormatter};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        let use_colors = Self::should_use_colors(mode);
        Self { use_colors, verbose }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                // Check if stdout is a TTY
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    const fn status_icon(status: ReportStatus) -> &'static str {
        match status {
            ReportStatus::Passed => "✓",
            ReportStatus::Warning => "⚠",
            ReportStatus::Failed => "✗",
            ReportStatus::Faulted => "◉",
        }
    }

    const fn status_label(status: ReportStatus) -> &'static str {
        match status {
            ReportStatus::Passed => "PASSED",
            ReportStatus::Warning => "WARNING",
            ReportStatus::Failed => "FAILED",
            ReportStatus::Faulted => "FAULTED",
        }
    }

    const fn status_color(status: ReportStatus) -> &'static str {
        match status {
            ReportStatus::Passed => ansi::GREEN,
            ReportStatus::Warning => ansi::YELLOW,
            ReportStatus::Failed => ansi::RED,
            ReportStatus::Faulted => ansi::MAGENTA,
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_document(&self, report: &DocumentReport, output: &mut Vec<u8>) {
        let overall = ReportStatus::from(report.analysis.status);
        let header = self.colorize(Self::status_label(overall), Self::status_color(overall));
        writeln!(
            output,
            "{} {header}: {}",
            Self::status_icon(overall),
            report.source
        )
        .ok();

        for (id, check) in &report.analysis.checks {
            // Passing checks only show up in verbose mode
            if check.status == ReportStatus::Passed && self.verbose < 1 {
                continue;
            }

            let label = self.colorize(
                Self::status_label(check.status),
                Self::status_color(check.status),
            );
            writeln!(
                output,
                "   {} {label} [{id}]: {}",
                Self::status_icon(check.status),
                check.message
            )
            .ok();

            if self.verbose >= 2 {
                for (key, value) in &check.details {
                    writeln!(output, "       {key}: {value}").ok();
                }
            }
        }

        let s = &report.analysis.summary;
        writeln!(
            output,
            "   Checks: {} passed, {} warnings, {} failed{} ({} total)",
            s.passed,
            s.warnings,
            s.failed,
            if s.faulted > 0 {
                format!(", {} faulted", s.faulted)
            } else {
                String::new()
            },
            s.total
        )
        .ok();
    }

    fn format_summary(&self, total: usize, passed: usize, warnings: usize, failed: usize) -> String {
        let passed_str = self.colorize(&passed.to_string(), ansi::GREEN);
        let warnings_str = self.colorize(&warnings.to_string(), ansi::YELLOW);
        let failed_str = self.colorize(&failed.to_string(), ansi::RED);

        format!(
            "Summary: {total} documents analyzed, {passed_str} passed, {warnings_str} warnings, {failed_str} failed"
        )
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, reports: &[DocumentReport]) -> Result<String> {
        let mut output = Vec::new();

        let sort_key = |a: &Analysis| match a.status {
            CheckStatus::Failed => 0,
            CheckStatus::Warning => 1,
            CheckStatus::Passed => 2,
        };
        let mut ordered: Vec<&DocumentReport> = reports.iter().collect();
        ordered.sort_by_key(|r| sort_key(&r.analysis));

        for report in &ordered {
            // Passing documents are summarized only, unless verbose
            if report.analysis.is_passed() && self.verbose < 1 {
                continue;
            }
            self.format_document(report, &mut output);
            writeln!(output).ok();
        }

        let (passed, warnings, failed) =
            reports
                .iter()
                .fold((0, 0, 0), |(p, w, f), r| match r.analysis.status {
                    CheckStatus::Passed => (p + 1, w, f),
                    CheckStatus::Warning => (p, w + 1, f),
                    CheckStatus::Failed => (p, w, f + 1),
                });

        let summary = self.format_summary(reports.len(), passed, warnings, failed);
        writeln!(output, "{summary}").ok();

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
