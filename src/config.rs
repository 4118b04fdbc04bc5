//! Configuration to acknowledge vault layout and tag conventions as well as set defaults.
//!
//! Specifically, we try to find a dayfill.toml, and if present we load settings from there.
//! This provides the folder filters, the workflow tags and file extension preferences.

use crate::error::{Error, Result};
use facet::Facet;
use std::fs;
use std::path::Path;

/// Config file looked up in the working directory when no path is given.
pub const CONFIG_FILE: &str = "dayfill.toml";

#[derive(Facet, Clone, Debug)]
/// User preferences loaded from dayfill.toml or falling back to defaults.
pub struct Config {
    #[facet(default = default_path_prefixes())]
    /// Path prefixes a document must start with to be aggregated.
    pub path_prefixes: Vec<String>,
    #[facet(default = default_path_prefixes())]
    /// Path prefixes a document must start with to appear in the task index.
    pub index_path_prefixes: Vec<String>,
    #[facet(default = default_workflow_tags())]
    /// Tags that select a document even when it does not link to the current one.
    pub in_progress_tags: Vec<String>,
    #[facet(default = default_workflow_tags())]
    /// Tags ignored when grouping open tasks.
    pub excluded_tags: Vec<String>,
    #[facet(default = default_index_document())]
    /// Name of the document that is never aggregated into itself.
    pub index_document: String,
    #[facet(default = default_file_extensions())]
    /// File suffixes to match when scanning the vault.
    pub file_extensions: Vec<String>,
}

fn default_path_prefixes() -> Vec<String> {
    vec!["002_Projects".to_string(), "005_Personal".to_string()]
}

fn default_workflow_tags() -> Vec<String> {
    vec!["#wip".to_string()]
}

fn default_index_document() -> String {
    "Task Index".to_string()
}

fn default_file_extensions() -> Vec<String> {
    vec!["md".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path_prefixes: default_path_prefixes(),
            index_path_prefixes: default_path_prefixes(),
            in_progress_tags: default_workflow_tags(),
            excluded_tags: default_workflow_tags(),
            index_document: default_index_document(),
            file_extensions: default_file_extensions(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid configuration.
    pub fn from_toml(contents: &str) -> Result<Self> {
        facet_toml::from_str::<Self>(contents).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load configuration from an explicit file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        Self::from_toml(&fs::read_to_string(path)?)
    }

    #[must_use]
    /// Load configuration from dayfill.toml if present, otherwise defaults.
    pub fn load() -> Self {
        if let Ok(contents) = fs::read_to_string(CONFIG_FILE) {
            if let Ok(config) = Self::from_toml(&contents) {
                return config;
            }
        }
        Self::default()
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
