//! Content loaders for reading skill data from files.
//!
//! Each loader can read from a path or fall back to the copy embedded at
//! build time from the crate's `data/` directory.

pub mod catalog;
pub mod config;
pub mod factory;

pub use catalog::{CatalogEntry, SkillCatalog};
pub use config::ConfigLoader;
pub use factory::ContentFactory;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
