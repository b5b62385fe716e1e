use std::sync::LazyLock;

use scraper::Selector;

use crate::context::Context;

use super::{Check, CheckResult};

const WEIGHT: f64 = 0.04;

/// Composite scoring scale. Each signal contributes fixed points.
const MAX_SCORE: u32 = 12;
const LIST_POINTS: u32 = 2;
const TABLE_POINTS: u32 = 2;
const QUESTION_POINTS: u32 = 2;
const PARAGRAPH_POINTS: u32 = 3;
const WORD_COUNT_POINTS: u32 = 3;

/// Question marks needed for the question-density signal.
const MIN_QUESTION_MARKS: usize = 2;
/// Paragraphs longer than this read as walls of text.
const MAX_AVG_PARAGRAPH_WORDS: usize = 120;
/// Word count needed for the substance signal.
const MIN_WORDS: usize = 300;

/// Thresholds on the 12-point scale: >=75% passes, >=50% warns.
const PASS_AT: u32 = 9;
const WARN_AT: u32 = 6;

static LIST_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("ul, ol").expect("list selector is a compile-time constant")
});

static TABLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("table").expect("table selector is a compile-time constant")
});

/// Composite heuristic for machine-readable content structure: answer-engine
/// crawlers favor pages with lists, tables, direct questions and digestible
/// paragraphs.
pub struct AiStructureCheck;

impl Check for AiStructureCheck {
    fn id(&self) -> &'static str {
        "ai-structure"
    }

    fn label(&self) -> &'static str {
        "Answer-engine structure"
    }

    fn description(&self) -> &'static str {
        "Lists, tables, questions and short paragraphs make content easy for answer engines to cite."
    }

    fn weight(&self) -> f64 {
        WEIGHT
    }

    fn run(&self, context: &Context) -> CheckResult {
        let has_lists = context
            .dom()
            .is_some_and(|dom| dom.select(&LIST_SELECTOR).next().is_some());
        let has_table = context
            .dom()
            .is_some_and(|dom| dom.select(&TABLE_SELECTOR).next().is_some());
        let question_marks = context.plain_text().matches('?').count();
        let words = context.word_count();

        let paragraphs = context.paragraphs();
        let avg_paragraph_words = if paragraphs.is_empty() {
            0
        } else {
            paragraphs
                .iter()
                .map(|p| p.split_whitespace().count())
                .sum::<usize>()
                / paragraphs.len()
        };
        let digestible_paragraphs =
            !paragraphs.is_empty() && avg_paragraph_words <= MAX_AVG_PARAGRAPH_WORDS;

        let mut score = 0;
        if has_lists {
            score += LIST_POINTS;
        }
        if has_table {
            score += TABLE_POINTS;
        }
        if question_marks >= MIN_QUESTION_MARKS {
            score += QUESTION_POINTS;
        }
        if digestible_paragraphs {
            score += PARAGRAPH_POINTS;
        }
        if words >= MIN_WORDS {
            score += WORD_COUNT_POINTS;
        }

        let result = if score >= PASS_AT {
            CheckResult::passed(
                WEIGHT,
                format!("Content structure scores {score}/{MAX_SCORE}."),
            )
        } else if score >= WARN_AT {
            CheckResult::warning(
                WEIGHT,
                format!(
                    "Content structure scores {score}/{MAX_SCORE}; add lists, tables or questions."
                ),
            )
        } else {
            CheckResult::failed(
                WEIGHT,
                format!(
                    "Content structure scores {score}/{MAX_SCORE}; the page is hard to cite."
                ),
            )
        };

        result
            .with_detail("score", score)
            .with_detail("max_score", MAX_SCORE)
            .with_detail("has_lists", has_lists)
            .with_detail("has_table", has_table)
            .with_detail("question_marks", question_marks)
            .with_detail("avg_paragraph_words", avg_paragraph_words)
            .with_detail("words", words)
    }
}

#[cfg(test)]
#[path = "structure_tests.rs"]
mod tests;
