mod description;
mod headings;
mod images;
mod indexing;
pub mod jsonld;
mod keyword;
mod links;
mod result;
mod schema;
mod social;
mod structure;
mod title;

pub use description::MetaDescriptionCheck;
pub use headings::{H1Check, HeadingHierarchyCheck};
pub use images::ImageAltCheck;
pub use indexing::{CanonicalCheck, RobotsCheck};
pub use keyword::FocusKeywordCheck;
pub use links::{ContentLengthCheck, InternalLinkCheck};
pub use result::{CheckResult, CheckStatus};
pub use schema::{FaqSchemaCheck, HowToSchemaCheck, SchemaPresetsCheck};
pub use social::{OpenGraphCheck, TwitterCardCheck};
pub use structure::AiStructureCheck;
pub use title::TitleLengthCheck;

use crate::context::Context;

/// One independent, stateless evaluator of a single content-quality signal.
///
/// Implementations are pure functions of their `Context` argument: no clock,
/// no randomness, no I/O. The same `(check, context)` pair always yields an
/// equal result, and "no data" conditions (empty HTML, zero images, no
/// headings) map to a verdict, never to a panic or error.
pub trait Check: Send + Sync {
    /// Unique lowercase identifier, stable across releases.
    fn id(&self) -> &'static str;

    /// Short human-readable name.
    fn label(&self) -> &'static str;

    /// One-sentence explanation of what the check looks at.
    fn description(&self) -> &'static str;

    /// Fixed contribution toward a downstream composite score, in `[0, 1]`.
    fn weight(&self) -> f64;

    /// Evaluate the document and return a verdict.
    fn run(&self, context: &Context) -> CheckResult;
}

/// The full check catalogue in its canonical execution order.
#[must_use]
pub fn catalogue() -> Vec<Box<dyn Check>> {
    vec![
        Box::new(TitleLengthCheck),
        Box::new(MetaDescriptionCheck),
        Box::new(H1Check),
        Box::new(HeadingHierarchyCheck),
        Box::new(ImageAltCheck),
        Box::new(CanonicalCheck),
        Box::new(RobotsCheck),
        Box::new(OpenGraphCheck),
        Box::new(TwitterCardCheck),
        Box::new(SchemaPresetsCheck),
        Box::new(FaqSchemaCheck),
        Box::new(HowToSchemaCheck),
        Box::new(InternalLinkCheck),
        Box::new(ContentLengthCheck),
        Box::new(FocusKeywordCheck),
        Box::new(AiStructureCheck),
    ]
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
