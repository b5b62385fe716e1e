use serde_json::Value;

use crate::context::Context;

use super::{Check, CheckResult};

const OG_WEIGHT: f64 = 0.06;
const TWITTER_WEIGHT: f64 = 0.04;

/// Required Open Graph tags. The image requirement is also satisfied by
/// `og:image:secure_url`.
const OG_REQUIRED: [&str; 4] = ["og:title", "og:description", "og:image", "og:url"];
const OG_IMAGE_FALLBACK: &str = "og:image:secure_url";

/// Required Twitter card tags. The image requirement is also satisfied by
/// `twitter:image:src`.
const TWITTER_REQUIRED: [&str; 4] = [
    "twitter:card",
    "twitter:title",
    "twitter:description",
    "twitter:image",
];
const TWITTER_IMAGE_FALLBACK: &str = "twitter:image:src";

/// Tags may appear with either `property=` (the OG convention) or `name=`.
fn tag_present(context: &Context, tag: &str) -> bool {
    !context.meta_content("property", tag).is_empty()
        || !context.meta_content("name", tag).is_empty()
}

fn missing_tags(
    context: &Context,
    required: &[&str],
    image_tag: &str,
    image_fallback: &str,
) -> Vec<String> {
    let mut missing = Vec::new();
    for tag in required {
        if tag_present(context, tag) {
            continue;
        }
        if *tag == image_tag && tag_present(context, image_fallback) {
            continue;
        }
        missing.push((*tag).to_string());
    }
    missing
}

fn missing_detail(missing: &[String]) -> Value {
    Value::Array(missing.iter().cloned().map(Value::String).collect())
}

pub struct OpenGraphCheck;

impl Check for OpenGraphCheck {
    fn id(&self) -> &'static str {
        "open-graph"
    }

    fn label(&self) -> &'static str {
        "Open Graph tags"
    }

    fn description(&self) -> &'static str {
        "Open Graph tags control how the page renders when shared on social platforms."
    }

    fn weight(&self) -> f64 {
        OG_WEIGHT
    }

    fn run(&self, context: &Context) -> CheckResult {
        let missing = missing_tags(context, &OG_REQUIRED, "og:image", OG_IMAGE_FALLBACK);

        let result = if missing.is_empty() {
            CheckResult::passed(OG_WEIGHT, "All required Open Graph tags are present.")
        } else if missing.len() > 2 {
            CheckResult::failed(
                OG_WEIGHT,
                format!("{} required Open Graph tags are missing.", missing.len()),
            )
        } else {
            CheckResult::warning(
                OG_WEIGHT,
                format!("Missing Open Graph tags: {}.", missing.join(", ")),
            )
        };

        result.with_detail("missing", missing_detail(&missing))
    }
}

pub struct TwitterCardCheck;

impl Check for TwitterCardCheck {
    fn id(&self) -> &'static str {
        "twitter-card"
    }

    fn label(&self) -> &'static str {
        "Twitter card tags"
    }

    fn description(&self) -> &'static str {
        "Twitter card tags control how the page renders when shared on X/Twitter."
    }

    fn weight(&self) -> f64 {
        TWITTER_WEIGHT
    }

    fn run(&self, context: &Context) -> CheckResult {
        let missing = missing_tags(
            context,
            &TWITTER_REQUIRED,
            "twitter:image",
            TWITTER_IMAGE_FALLBACK,
        );

        let result = if missing.is_empty() {
            CheckResult::passed(TWITTER_WEIGHT, "All required Twitter card tags are present.")
        } else if missing.len() >= 2 {
            CheckResult::failed(
                TWITTER_WEIGHT,
                format!("{} required Twitter card tags are missing.", missing.len()),
            )
        } else {
            CheckResult::warning(
                TWITTER_WEIGHT,
                format!("Missing Twitter card tags: {}.", missing.join(", ")),
            )
        };

        result.with_detail("missing", missing_detail(&missing))
    }
}

#[cfg(test)]
#[path = "social_tests.rs"]
mod tests;
