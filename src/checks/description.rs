use crate::context::Context;

use super::{Check, CheckResult};

const WEIGHT: f64 = 0.10;

/// Meta description window that displays without truncation.
const MIN_LENGTH: usize = 120;
const MAX_LENGTH: usize = 160;

pub struct MetaDescriptionCheck;

impl Check for MetaDescriptionCheck {
    fn id(&self) -> &'static str {
        "meta-description"
    }

    fn label(&self) -> &'static str {
        "Meta description length"
    }

    fn description(&self) -> &'static str {
        "The meta description should be 120-160 characters to serve as an effective search snippet."
    }

    fn weight(&self) -> f64 {
        WEIGHT
    }

    fn run(&self, context: &Context) -> CheckResult {
        let description = context.meta_description();
        let length = description.chars().count();

        let result = if length == 0 {
            CheckResult::failed(
                WEIGHT,
                "Document has no meta description. Add one summarizing the page.",
            )
        } else if (MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            CheckResult::passed(
                WEIGHT,
                format!("Meta description length of {length} characters is ideal."),
            )
        } else {
            let direction = if length < MIN_LENGTH { "short" } else { "long" };
            CheckResult::warning(
                WEIGHT,
                format!(
                    "Meta description is {length} characters, too {direction}; aim for {MIN_LENGTH}-{MAX_LENGTH}."
                ),
            )
        };

        result.with_detail("length", length)
    }
}

#[cfg(test)]
#[path = "description_tests.rs"]
mod tests;
