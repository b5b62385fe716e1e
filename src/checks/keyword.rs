use serde_json::Value;

use crate::context::Context;

use super::{Check, CheckResult};

const WEIGHT: f64 = 0.06;

/// Surfaces the focus keyword is expected to appear on.
const SURFACES: [&str; 3] = ["title", "description", "body"];

/// The focus keyword should appear in the title, the meta description and
/// the body text.
pub struct FocusKeywordCheck;

impl Check for FocusKeywordCheck {
    fn id(&self) -> &'static str {
        "focus-keyword"
    }

    fn label(&self) -> &'static str {
        "Focus keyword coverage"
    }

    fn description(&self) -> &'static str {
        "The focus keyword should appear in the title, meta description and body text."
    }

    fn weight(&self) -> f64 {
        WEIGHT
    }

    fn run(&self, context: &Context) -> CheckResult {
        let Some(keyword) = context.focus_keyword() else {
            return CheckResult::warning(
                WEIGHT,
                "No focus keyword set; pick one to target the page.",
            );
        };
        let needle = keyword.to_lowercase();

        let surfaces = [
            context.title().to_lowercase(),
            context.meta_description().to_lowercase(),
            context.plain_text().to_lowercase(),
        ];

        let mut found = Vec::new();
        let mut missing = Vec::new();
        for (name, haystack) in SURFACES.iter().zip(surfaces.iter()) {
            if haystack.contains(&needle) {
                found.push(Value::String((*name).to_string()));
            } else {
                missing.push(Value::String((*name).to_string()));
            }
        }

        let result = if missing.is_empty() {
            CheckResult::passed(
                WEIGHT,
                format!("Focus keyword \"{keyword}\" appears in title, description and body."),
            )
        } else if found.is_empty() {
            CheckResult::failed(
                WEIGHT,
                format!("Focus keyword \"{keyword}\" appears nowhere on the page."),
            )
        } else {
            CheckResult::warning(
                WEIGHT,
                format!("Focus keyword \"{keyword}\" is missing from some surfaces."),
            )
        };

        result
            .with_detail("keyword", keyword)
            .with_detail("found", Value::Array(found))
            .with_detail("missing", Value::Array(missing))
    }
}

#[cfg(test)]
#[path = "keyword_tests.rs"]
mod tests;
