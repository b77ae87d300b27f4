//! Data-driven skill content and loaders.
//!
//! This crate houses the standard skill catalog and provides loaders for
//! RON/TOML data files:
//! - Standard skill catalog (data-driven via RON)
//! - Roster defaults: starting level and class skills (data-driven via TOML)
//!
//! Content is consumed when building a [`sheet_core::SkillRoster`] and never
//! appears in rules state on its own.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{CatalogEntry, ConfigLoader, ContentFactory, LoadResult, SkillCatalog};
