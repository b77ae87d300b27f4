//! Roster configuration loader.

use std::path::Path;

use sheet_core::RulesConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for roster defaults from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing RulesConfig
    ///
    /// # Returns
    ///
    /// Returns a RulesConfig. Missing keys fall back to their defaults.
    pub fn load(path: &Path) -> LoadResult<RulesConfig> {
        let content = read_file(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            "Loaded rules config from {} (starting level {})",
            path.display(),
            config.starting_level
        );
        Ok(config)
    }

    /// Roster defaults embedded at build time.
    pub fn standard() -> LoadResult<RulesConfig> {
        Self::from_toml_str(include_str!("../../data/roster.toml"))
    }

    /// Parse config from TOML text.
    pub fn from_toml_str(content: &str) -> LoadResult<RulesConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}
