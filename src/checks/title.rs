use crate::context::Context;

use super::{Check, CheckResult};

const WEIGHT: f64 = 0.10;

/// Ideal title length window for search result display.
const IDEAL_MIN: usize = 50;
const IDEAL_MAX: usize = 60;

/// Tolerated window outside the ideal one; beyond this the title is either
/// uselessly short or guaranteed to be truncated.
const TOLERATED_MIN: usize = 30;
const TOLERATED_MAX: usize = 80;

pub struct TitleLengthCheck;

impl Check for TitleLengthCheck {
    fn id(&self) -> &'static str {
        "title-length"
    }

    fn label(&self) -> &'static str {
        "Title length"
    }

    fn description(&self) -> &'static str {
        "The document title should be 50-60 characters so it displays fully in search results."
    }

    fn weight(&self) -> f64 {
        WEIGHT
    }

    fn run(&self, context: &Context) -> CheckResult {
        let title = context.title();
        let length = title.chars().count();

        let result = if length == 0 {
            CheckResult::failed(WEIGHT, "Document has no title. Add a descriptive <title>.")
        } else if (IDEAL_MIN..=IDEAL_MAX).contains(&length) {
            CheckResult::passed(WEIGHT, format!("Title length of {length} characters is ideal."))
        } else if (TOLERATED_MIN..=TOLERATED_MAX).contains(&length) {
            let direction = if length < IDEAL_MIN { "short" } else { "long" };
            CheckResult::warning(
                WEIGHT,
                format!(
                    "Title is {length} characters, slightly {direction}; aim for {IDEAL_MIN}-{IDEAL_MAX}."
                ),
            )
        } else if length < TOLERATED_MIN {
            CheckResult::failed(
                WEIGHT,
                format!("Title is only {length} characters; aim for {IDEAL_MIN}-{IDEAL_MAX}."),
            )
        } else {
            CheckResult::failed(
                WEIGHT,
                format!(
                    "Title is {length} characters and will be truncated; aim for {IDEAL_MIN}-{IDEAL_MAX}."
                ),
            )
        };

        result.with_detail("length", length)
    }
}

#[cfg(test)]
#[path = "title_tests.rs"]
mod tests;
