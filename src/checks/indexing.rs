use url::Url;

use crate::context::Context;

use super::{Check, CheckResult};

const CANONICAL_WEIGHT: f64 = 0.08;
const ROBOTS_WEIGHT: f64 = 0.10;

/// The canonical URL must be declared and absolute.
pub struct CanonicalCheck;

impl Check for CanonicalCheck {
    fn id(&self) -> &'static str {
        "canonical-url"
    }

    fn label(&self) -> &'static str {
        "Canonical URL"
    }

    fn description(&self) -> &'static str {
        "A valid absolute canonical URL avoids duplicate-content ambiguity."
    }

    fn weight(&self) -> f64 {
        CANONICAL_WEIGHT
    }

    fn run(&self, context: &Context) -> CheckResult {
        let Some(canonical) = context.canonical() else {
            return CheckResult::failed(
                CANONICAL_WEIGHT,
                "No canonical URL declared. Add <link rel=\"canonical\">.",
            );
        };

        if is_absolute_http_url(&canonical) {
            CheckResult::passed(CANONICAL_WEIGHT, "Canonical URL is a valid absolute URL.")
                .with_detail("url", canonical)
        } else {
            CheckResult::failed(
                CANONICAL_WEIGHT,
                format!("Canonical URL \"{canonical}\" is not a valid absolute URL."),
            )
            .with_detail("url", canonical)
        }
    }
}

fn is_absolute_http_url(candidate: &str) -> bool {
    Url::parse(candidate).is_ok_and(|url| {
        matches!(url.scheme(), "http" | "https") && url.host_str().is_some_and(|h| !h.is_empty())
    })
}

/// The robots directive must not block indexing.
pub struct RobotsCheck;

impl Check for RobotsCheck {
    fn id(&self) -> &'static str {
        "robots-directive"
    }

    fn label(&self) -> &'static str {
        "Robots directive"
    }

    fn description(&self) -> &'static str {
        "The robots directive must allow crawlers to index and follow the page."
    }

    fn weight(&self) -> f64 {
        ROBOTS_WEIGHT
    }

    fn run(&self, context: &Context) -> CheckResult {
        let directive = context.robots().unwrap_or_default();
        let tokens: Vec<String> = directive
            .split(',')
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();

        if tokens.is_empty() {
            return CheckResult::warning(
                ROBOTS_WEIGHT,
                "No robots directive found; crawlers will apply their defaults.",
            );
        }

        let result = if tokens.iter().any(|t| t == "noindex") {
            CheckResult::failed(
                ROBOTS_WEIGHT,
                "Robots directive contains \"noindex\"; the page will not be indexed.",
            )
        } else if tokens.iter().any(|t| t == "nofollow") {
            CheckResult::warning(
                ROBOTS_WEIGHT,
                "Robots directive contains \"nofollow\"; links will not pass authority.",
            )
        } else {
            CheckResult::passed(ROBOTS_WEIGHT, "Robots directive allows indexing.")
        };

        result.with_detail("directive", directive)
    }
}

#[cfg(test)]
#[path = "indexing_tests.rs"]
mod tests;
