use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use walkdir::WalkDir;

use crate::error::{Result, SeoGuardError};

/// Recursively discovers document files under a directory, filtered by
/// extension and exclude globs.
pub struct DocumentScanner {
    extensions: Vec<String>,
    exclude: GlobSet,
}

impl DocumentScanner {
    /// # Errors
    /// Returns an error when an exclude pattern is not a valid glob.
    pub fn new(extensions: &[String], exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| SeoGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude = builder
            .build()
            .map_err(|e| SeoGuardError::Config(format!("invalid exclude set: {e}")))?;

        Ok(Self {
            extensions: extensions.iter().map(|e| e.to_lowercase()).collect(),
            exclude,
        })
    }

    fn is_document(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == &ext.to_lowercase()))
    }

    /// Scan a directory tree for documents, sorted for deterministic output.
    ///
    /// # Errors
    /// Returns an error when a directory entry cannot be read.
    pub fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root).follow_links(false) {
            let entry = entry.map_err(|e| {
                SeoGuardError::Config(format!("failed to walk {}: {e}", root.display()))
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if self.exclude.is_match(path) {
                continue;
            }
            if self.is_document(path) {
                files.push(path.to_path_buf());
            }
        }
        files.sort();
        Ok(files)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
