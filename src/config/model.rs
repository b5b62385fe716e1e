use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Root configuration, loaded from `.seo-guard.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Check enablement map `[checks]`: ids absent from the map are enabled.
    /// Ids that match no catalogue entry are ignored, since they may target
    /// a since-removed check.
    #[serde(default)]
    pub checks: IndexMap<String, bool>,

    #[serde(default)]
    pub analysis: AnalysisConfig,

    #[serde(default)]
    pub scan: ScanConfig,
}

/// Analysis defaults `[analysis]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Site-wide default focus keyword; usually overridden per document.
    #[serde(default)]
    pub focus_keyword: Option<String>,

    /// Treat warnings as failures for the exit code.
    #[serde(default)]
    pub strict: bool,
}

/// Directory scan settings `[scan]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScanConfig {
    /// File extensions treated as documents when scanning directories.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Glob patterns to exclude from directory scans.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude: Vec::new(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    vec!["html".to_string(), "htm".to_string()]
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
