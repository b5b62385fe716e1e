use crate::context::{Anchor, Context};

use super::{Check, CheckResult};

const LINKS_WEIGHT: f64 = 0.06;
const LENGTH_WEIGHT: f64 = 0.06;

/// Word count below which the link-density requirement does not apply.
const LINK_EXEMPT_BELOW: usize = 150;
/// One link is expected per this many words.
const WORDS_PER_LINK: usize = 300;

/// Word counts for the thin-content thresholds.
const THIN_BELOW: usize = 150;
const SHORT_BELOW: usize = 300;

/// Whether an anchor counts toward link density. Placeholders, fragment
/// links and non-navigational schemes do not.
fn is_countable(anchor: &Anchor) -> bool {
    let Some(href) = anchor.href.as_deref() else {
        return false;
    };
    let href = href.trim();
    if href.is_empty() || href.starts_with('#') {
        return false;
    }
    let lower = href.to_lowercase();
    !(lower.starts_with("mailto:")
        || lower.starts_with("tel:")
        || lower.starts_with("javascript:"))
}

/// Long-form content should link out roughly once per 300 words.
pub struct InternalLinkCheck;

impl Check for InternalLinkCheck {
    fn id(&self) -> &'static str {
        "internal-links"
    }

    fn label(&self) -> &'static str {
        "Internal link density"
    }

    fn description(&self) -> &'static str {
        "Long-form content should carry roughly one link per 300 words."
    }

    fn weight(&self) -> f64 {
        LINKS_WEIGHT
    }

    fn run(&self, context: &Context) -> CheckResult {
        let words = context.word_count();

        if words < LINK_EXEMPT_BELOW {
            return CheckResult::passed(
                LINKS_WEIGHT,
                "Content is short enough to be exempt from link-density requirements.",
            )
            .with_detail("words", words)
            .with_detail("links", 0)
            .with_detail("required", 0);
        }

        let required = words.div_ceil(WORDS_PER_LINK);
        let links = context.anchors().iter().filter(|a| is_countable(a)).count();

        let result = if links == 0 {
            CheckResult::failed(
                LINKS_WEIGHT,
                format!("No usable links found; add at least {required}."),
            )
        } else if links < required {
            CheckResult::warning(
                LINKS_WEIGHT,
                format!("Only {links} links for {words} words; aim for {required}."),
            )
        } else {
            CheckResult::passed(LINKS_WEIGHT, format!("{links} links cover {words} words."))
        };

        result
            .with_detail("words", words)
            .with_detail("links", links)
            .with_detail("required", required)
    }
}

/// Minimum substance: thin pages rarely rank or satisfy readers.
pub struct ContentLengthCheck;

impl Check for ContentLengthCheck {
    fn id(&self) -> &'static str {
        "content-length"
    }

    fn label(&self) -> &'static str {
        "Content length"
    }

    fn description(&self) -> &'static str {
        "The page body should carry at least 300 words of readable text."
    }

    fn weight(&self) -> f64 {
        LENGTH_WEIGHT
    }

    fn run(&self, context: &Context) -> CheckResult {
        let words = context.word_count();

        let result = if words < THIN_BELOW {
            CheckResult::failed(
                LENGTH_WEIGHT,
                format!("Only {words} words of content; the page is too thin."),
            )
        } else if words < SHORT_BELOW {
            CheckResult::warning(
                LENGTH_WEIGHT,
                format!("{words} words of content; aim for at least {SHORT_BELOW}."),
            )
        } else {
            CheckResult::passed(LENGTH_WEIGHT, format!("{words} words of content."))
        };

        result.with_detail("words", words)
    }
}

#[cfg(test)]
#[path = "links_tests.rs"]
mod tests;
