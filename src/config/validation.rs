use crate::error::{Result, SeoGuardError};

use super::Config;

/// Semantic validation beyond what the TOML schema enforces.
///
/// Unknown ids in `[checks]` are deliberately not an error: they may target
/// a check that no longer exists.
pub fn validate_config(config: &Config) -> Result<()> {
    for pattern in &config.scan.exclude {
        globset::Glob::new(pattern).map_err(|e| SeoGuardError::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
    }

    if config.scan.extensions.is_empty() {
        return Err(SeoGuardError::Config(
            "scan.extensions cannot be empty".to_string(),
        ));
    }
    for ext in &config.scan.extensions {
        if ext.is_empty() || ext.starts_with('.') {
            return Err(SeoGuardError::Config(format!(
                "scan.extensions entries must be bare extensions like \"html\", got \"{ext}\""
            )));
        }
    }

    if let Some(keyword) = &config.analysis.focus_keyword
        && keyword.trim().is_empty()
    {
        return Err(SeoGuardError::Config(
            "analysis.focus_keyword cannot be blank".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
