use crate::context::Context;

use super::{Check, CheckResult};

const WEIGHT: f64 = 0.06;

/// Alt coverage below this percentage is a hard failure.
const FAIL_BELOW: u64 = 50;
/// Alt coverage below this percentage (but at or above `FAIL_BELOW`) warns.
const WARN_BELOW: u64 = 80;

pub struct ImageAltCheck;

impl Check for ImageAltCheck {
    fn id(&self) -> &'static str {
        "image-alt"
    }

    fn label(&self) -> &'static str {
        "Image alt text"
    }

    fn description(&self) -> &'static str {
        "Images need alt text for accessibility and image search visibility."
    }

    fn weight(&self) -> f64 {
        WEIGHT
    }

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn run(&self, context: &Context) -> CheckResult {
        let images = context.images();
        let total = images.len();

        if total == 0 {
            // Zero images is an opportunity, not a failure.
            return CheckResult::warning(
                WEIGHT,
                "No images found; consider adding supporting visuals.",
            )
            .with_detail("total", 0);
        }

        let with_alt = images.iter().filter(|img| img.has_alt_text()).count();
        let coverage = ((with_alt as f64 / total as f64) * 100.0).round() as u64;

        let result = if coverage < FAIL_BELOW {
            CheckResult::failed(
                WEIGHT,
                format!("Only {with_alt} of {total} images have alt text. Add alt attributes."),
            )
        } else if coverage < WARN_BELOW {
            CheckResult::warning(
                WEIGHT,
                format!("{with_alt} of {total} images have alt text; cover the rest."),
            )
        } else {
            CheckResult::passed(WEIGHT, format!("{with_alt} of {total} images have alt text."))
        };

        result
            .with_detail("total", total)
            .with_detail("with_alt", with_alt)
            .with_detail("coverage", coverage)
    }
}

#[cfg(test)]
#[path = "images_tests.rs"]
mod tests;
