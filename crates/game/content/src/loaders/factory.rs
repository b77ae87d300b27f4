//! Content factory for building rosters from data files.

use std::path::{Path, PathBuf};

use sheet_core::{RulesConfig, SkillRoster, TrainingObserver};

use crate::loaders::{ConfigLoader, LoadResult, SkillCatalog};

/// Content factory that loads skill content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── roster.toml
/// └── skills.ron
/// ```
///
/// Either file may be absent, in which case the embedded standard copy is used.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load roster defaults from `roster.toml`.
    pub fn load_config(&self) -> LoadResult<RulesConfig> {
        let path = self.data_dir.join("roster.toml");
        if path.exists() {
            ConfigLoader::load(&path)
        } else {
            tracing::debug!("{} not found, using embedded roster defaults", path.display());
            ConfigLoader::standard()
        }
    }

    /// Load the skill catalog from `skills.ron`.
    pub fn load_catalog(&self) -> LoadResult<SkillCatalog> {
        let path = self.data_dir.join("skills.ron");
        if path.exists() {
            SkillCatalog::load(&path)
        } else {
            tracing::debug!("{} not found, using embedded skill catalog", path.display());
            SkillCatalog::standard()
        }
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Seeds a roster from a catalog and marks the configured class skills.
    ///
    /// Catalog skills are registered in catalog order at the configured
    /// starting level.
    pub fn build_roster(
        catalog: &SkillCatalog,
        config: &RulesConfig,
        observer: impl TrainingObserver + 'static,
    ) -> LoadResult<SkillRoster> {
        let mut roster = SkillRoster::new(config).with_observer(observer);
        for entry in catalog.entries() {
            roster.register(entry.to_skill())?;
        }
        roster.set_class_skills(&config.class_skills)?;

        tracing::info!(
            "Built roster with {} skills at level {}",
            roster.len(),
            roster.level()
        );
        Ok(roster)
    }
}
