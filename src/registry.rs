use std::collections::HashMap;
use std::collections::HashSet;

use crate::checks::Check;
use crate::context::Context;

/// Typed extension point: receives the statically filtered check list and
/// may add or remove entries. Applied exactly once per filtering call.
pub type ExtensionHook = Box<dyn Fn(Vec<Box<dyn Check>>) -> Vec<Box<dyn Check>> + Send + Sync>;

/// Decides which checks run for a given invocation.
///
/// Filtering is driven by an explicit enablement map rather than ambient
/// state: ids absent from the map are enabled, ids mapped to `false` are
/// dropped, and ids that match no catalogue entry are silently ignored
/// (they may target a since-removed check).
#[derive(Default)]
pub struct CheckRegistry {
    enabled: HashMap<String, bool>,
    extension: Option<ExtensionHook>,
}

impl CheckRegistry {
    #[must_use]
    pub fn new(enabled: HashMap<String, bool>) -> Self {
        Self {
            enabled,
            extension: None,
        }
    }

    #[must_use]
    pub fn with_extension(mut self, hook: ExtensionHook) -> Self {
        self.extension = Some(hook);
        self
    }

    /// Filter the catalogue down to the enabled subset, preserving catalogue
    /// order and never yielding duplicate ids. The context is forwarded for
    /// extension hooks that key off document features; the static filter
    /// itself never inspects it.
    #[must_use]
    pub fn filter_enabled_checks(
        &self,
        checks: Vec<Box<dyn Check>>,
        _context: &Context,
    ) -> Vec<Box<dyn Check>> {
        let filtered: Vec<Box<dyn Check>> = checks
            .into_iter()
            .filter(|check| *self.enabled.get(check.id()).unwrap_or(&true))
            .collect();

        let extended = match &self.extension {
            Some(hook) => hook(filtered),
            None => filtered,
        };

        // The hook may have introduced duplicates; keep the first occurrence.
        let mut seen = HashSet::new();
        extended
            .into_iter()
            .filter(|check| seen.insert(check.id().to_string()))
            .collect()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
