use serde_json::Value;

use crate::context::Context;

use super::{Check, CheckResult};

const H1_WEIGHT: f64 = 0.08;
const HIERARCHY_WEIGHT: f64 = 0.06;

/// Exactly one non-empty H1, optionally mentioning the focus keyword.
pub struct H1Check;

impl Check for H1Check {
    fn id(&self) -> &'static str {
        "h1-heading"
    }

    fn label(&self) -> &'static str {
        "H1 heading"
    }

    fn description(&self) -> &'static str {
        "Every document needs exactly one H1 that states the page topic."
    }

    fn weight(&self) -> f64 {
        H1_WEIGHT
    }

    fn run(&self, context: &Context) -> CheckResult {
        let h1s: Vec<_> = context
            .ordered_headings()
            .iter()
            .filter(|h| h.level == 1)
            .collect();
        let count = h1s.len();

        if count == 0 {
            return CheckResult::failed(H1_WEIGHT, "Document has no H1 heading. Add exactly one.")
                .with_detail("count", 0);
        }
        if count > 1 {
            let excess = count - 1;
            return CheckResult::warning(
                H1_WEIGHT,
                format!("Document has {count} H1 headings; keep exactly one."),
            )
            .with_detail("count", count)
            .with_detail("excess", excess);
        }

        if let Some(keyword) = context.focus_keyword() {
            let h1_text = h1s[0].text.to_lowercase();
            if !h1_text.contains(&keyword.to_lowercase()) {
                return CheckResult::warning(
                    H1_WEIGHT,
                    format!("The H1 does not mention the focus keyword \"{keyword}\"."),
                )
                .with_detail("count", 1)
                .with_detail("keyword", keyword);
            }
        }

        CheckResult::passed(H1_WEIGHT, "Document has exactly one H1 heading.")
            .with_detail("count", 1)
    }
}

/// Heading levels must not jump by more than one step downward
/// (e.g. H2 followed directly by H4).
pub struct HeadingHierarchyCheck;

impl Check for HeadingHierarchyCheck {
    fn id(&self) -> &'static str {
        "heading-hierarchy"
    }

    fn label(&self) -> &'static str {
        "Heading hierarchy"
    }

    fn description(&self) -> &'static str {
        "Heading levels should descend one step at a time so the outline stays navigable."
    }

    fn weight(&self) -> f64 {
        HIERARCHY_WEIGHT
    }

    fn run(&self, context: &Context) -> CheckResult {
        let headings = context.ordered_headings();
        let violations: Vec<Value> = headings
            .windows(2)
            .filter(|pair| pair[1].level > pair[0].level + 1)
            .map(|pair| {
                Value::String(format!(
                    "h{} -> h{} at \"{}\"",
                    pair[0].level, pair[1].level, pair[1].text
                ))
            })
            .collect();

        let result = match violations.len() {
            0 => CheckResult::passed(HIERARCHY_WEIGHT, "Heading levels descend without jumps."),
            1 => CheckResult::warning(
                HIERARCHY_WEIGHT,
                "One heading level jump found; avoid skipping levels.",
            ),
            n => CheckResult::failed(
                HIERARCHY_WEIGHT,
                format!("{n} heading level jumps found; restructure the outline."),
            ),
        };

        result.with_detail("violations", Value::Array(violations))
    }
}

#[cfg(test)]
#[path = "headings_tests.rs"]
mod tests;
