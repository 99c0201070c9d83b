//! Configuration to acknowledge user preferences as well as set defaults.
//!
//! Specifically, we try to find a vitae.toml, and if present we load settings from there.
//! This provides wrapping width, the section kinds offered by the add keys, delete renumbering
//! and the default log level.

use crate::section::SectionKind;
use facet::Facet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

#[derive(Facet, Clone, Debug)]
/// User preferences loaded from vitae.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 100)]
    /// Maximum line width for editor text wrapping.
    pub wrap_width: usize,
    #[facet(default = vec!["experience".to_string(), "education".to_string(), "skills".to_string()])]
    /// Section kinds offered by the add keys, in key order.
    pub add_kinds: Vec<String>,
    #[facet(default = false)]
    /// Renumber the remaining sections after a delete.
    pub renumber_on_delete: bool,
    #[facet(default = "info".to_string())]
    /// Log filter used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wrap_width: 100,
            add_kinds: vec![
                "experience".to_string(),
                "education".to_string(),
                "skills".to_string(),
            ],
            renumber_on_delete: false,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from vitae.toml if present.
    pub fn load() -> Self {
        Self::load_from(Path::new("vitae.toml"))
    }

    #[must_use]
    /// Load configuration from `path`, keeping the defaults if it is missing or unreadable.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents),
            Err(e) if e.kind() == ErrorKind::NotFound => Self::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), "Cannot read config, using defaults: {e}");
                Self::default()
            }
        }
    }

    #[must_use]
    /// Parse configuration text, keeping the defaults if it is invalid.
    pub fn parse(contents: &str) -> Self {
        facet_toml::from_str::<Self>(contents).unwrap_or_else(|e| {
            tracing::warn!("Failed to parse vitae.toml: {e}");
            Self::default()
        })
    }

    #[must_use]
    /// The add-key kinds, skipping names that are not section kinds.
    pub fn add_kinds(&self) -> Vec<SectionKind> {
        self.add_kinds
            .iter()
            .filter_map(|name| match name.parse() {
                Ok(kind) => Some(kind),
                Err(e) => {
                    tracing::warn!("Ignoring add_kinds entry: {e}");
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
