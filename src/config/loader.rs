use std::fs;
use std::path::Path;

use crate::error::Result;

use super::Config;
use super::validation::validate_config;

pub const LOCAL_CONFIG_NAME: &str = ".seo-guard.toml";

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location, falling back to
    /// defaults when no config file exists.
    ///
    /// # Errors
    /// Returns an error if an existing config file cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

/// Loads `.seo-guard.toml` from the working directory.
#[derive(Debug, Default)]
pub struct FileConfigLoader;

impl FileConfigLoader {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn parse(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;
        validate_config(&config)?;
        Ok(config)
    }
}

impl ConfigLoader for FileConfigLoader {
    fn load(&self) -> Result<Config> {
        let path = Path::new(LOCAL_CONFIG_NAME);
        if !path.exists() {
            return Ok(Config::default());
        }
        self.load_from_path(path)
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
