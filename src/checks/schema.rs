use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::context::Context;

use super::jsonld;
use super::{Check, CheckResult};

const PRESETS_WEIGHT: f64 = 0.08;
const FAQ_WEIGHT: f64 = 0.04;
const HOWTO_WEIGHT: f64 = 0.04;

/// Schema.org types every published page of the site is expected to carry.
const REQUIRED_TYPES: [&str; 3] = ["Organization", "WebSite", "BlogPosting"];

/// Entry count below which a FAQ/HowTo block is too thin to be worth markup.
const MIN_ENTITIES: usize = 3;

static FAQ_HINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(faq|frequently asked questions|q\s*&\s*a)\b")
        .expect("FAQ hint pattern is a compile-time constant")
});

static HOWTO_HINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(how to|step[\s-]by[\s-]step|step \d|tutorial|walkthrough)\b")
        .expect("HowTo hint pattern is a compile-time constant")
});

fn string_list(items: &[String]) -> Value {
    Value::Array(items.iter().cloned().map(Value::String).collect())
}

/// The site's preset schema.org types must all be present across the
/// document's JSON-LD blocks.
pub struct SchemaPresetsCheck;

impl Check for SchemaPresetsCheck {
    fn id(&self) -> &'static str {
        "schema-presets"
    }

    fn label(&self) -> &'static str {
        "Structured data presets"
    }

    fn description(&self) -> &'static str {
        "Organization, WebSite and BlogPosting structured data should all be present."
    }

    fn weight(&self) -> f64 {
        PRESETS_WEIGHT
    }

    fn run(&self, context: &Context) -> CheckResult {
        let decoded = jsonld::decode_blocks(context.json_ld_blocks());
        let types = jsonld::collect_types(&decoded.values);

        let mut found = Vec::new();
        let mut missing = Vec::new();
        for required in REQUIRED_TYPES {
            if types.contains(&required.to_lowercase()) {
                found.push(required.to_string());
            } else {
                missing.push(required.to_string());
            }
        }

        let mut result = if found.is_empty() {
            CheckResult::failed(
                PRESETS_WEIGHT,
                "No expected structured data found. Add Organization, WebSite and BlogPosting markup.",
            )
        } else if missing.is_empty() {
            CheckResult::passed(PRESETS_WEIGHT, "All expected structured data types are present.")
        } else {
            CheckResult::warning(
                PRESETS_WEIGHT,
                format!("Missing structured data types: {}.", missing.join(", ")),
            )
        };

        result = result
            .with_detail("found", string_list(&found))
            .with_detail("missing", string_list(&missing));
        if decoded.malformed > 0 {
            result = result.with_detail("malformed_blocks", decoded.malformed);
        }
        result
    }
}

/// Shared logic for the FAQ and HowTo entity checks: schema entity counting
/// with a plain-text heuristic deciding whether absent markup matters.
fn entity_schema_result(
    weight: f64,
    entity_count: Option<usize>,
    content_matches: bool,
    schema_name: &str,
    entity_name: &str,
) -> CheckResult {
    match entity_count {
        Some(count) if count >= MIN_ENTITIES => CheckResult::passed(
            weight,
            format!("{schema_name} markup with {count} {entity_name} entries found."),
        )
        .with_detail("entries", count),
        Some(count) => CheckResult::warning(
            weight,
            format!(
                "{schema_name} markup has only {count} {entity_name} entries; add at least {MIN_ENTITIES}."
            ),
        )
        .with_detail("entries", count),
        None if content_matches => CheckResult::warning(
            weight,
            format!("Content looks like it would benefit from {schema_name} markup."),
        )
        .with_detail("heuristic", "matched"),
        None => CheckResult::passed(
            weight,
            format!("{schema_name} markup is not applicable to this content."),
        )
        .with_detail("heuristic", "not-applicable"),
    }
}

pub struct FaqSchemaCheck;

impl Check for FaqSchemaCheck {
    fn id(&self) -> &'static str {
        "faq-schema"
    }

    fn label(&self) -> &'static str {
        "FAQ structured data"
    }

    fn description(&self) -> &'static str {
        "FAQ-style content should carry FAQPage markup with at least three questions."
    }

    fn weight(&self) -> f64 {
        FAQ_WEIGHT
    }

    fn run(&self, context: &Context) -> CheckResult {
        let decoded = jsonld::decode_blocks(context.json_ld_blocks());
        let count = jsonld::entity_count(&decoded.values, "FAQPage", "mainEntity", "Question");

        let text = context.plain_text();
        let question_marks = text.matches('?').count();
        let looks_like_faq = FAQ_HINT.is_match(text) || question_marks >= 3;

        entity_schema_result(FAQ_WEIGHT, count, looks_like_faq, "FAQPage", "question")
    }
}

pub struct HowToSchemaCheck;

impl Check for HowToSchemaCheck {
    fn id(&self) -> &'static str {
        "howto-schema"
    }

    fn label(&self) -> &'static str {
        "HowTo structured data"
    }

    fn description(&self) -> &'static str {
        "Guide-style content should carry HowTo markup with at least three steps."
    }

    fn weight(&self) -> f64 {
        HOWTO_WEIGHT
    }

    fn run(&self, context: &Context) -> CheckResult {
        let decoded = jsonld::decode_blocks(context.json_ld_blocks());
        let count = jsonld::entity_count(&decoded.values, "HowTo", "step", "HowToStep");

        let looks_like_guide = HOWTO_HINT.is_match(context.plain_text());

        entity_schema_result(HOWTO_WEIGHT, count, looks_like_guide, "HowTo", "step")
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
