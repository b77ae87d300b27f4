//! Command implementations.

mod list;
mod train;

pub use list::List;
pub use train::Train;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use sheet_content::{ConfigLoader, ContentFactory, SkillCatalog};
use sheet_core::{RulesError, SheetError, SkillRoster};

use crate::config::CliConfig;
use crate::observer::TracingObserver;

/// Where roster content comes from.
#[derive(Args, Debug)]
pub struct ContentArgs {
    /// Directory with skills.ron and roster.toml (overrides SHEET_DATA_DIR)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

impl ContentArgs {
    /// Builds the character's roster from the data directory or embedded content.
    pub fn load_roster(&self, config: &CliConfig) -> Result<SkillRoster> {
        let data_dir = self.data_dir.as_ref().or(config.data_dir.as_ref());

        let (catalog, rules) = match data_dir {
            Some(dir) => {
                let factory = ContentFactory::new(dir);
                (factory.load_catalog()?, factory.load_config()?)
            }
            None => (SkillCatalog::standard()?, ConfigLoader::standard()?),
        };

        ContentFactory::build_roster(&catalog, &rules, TracingObserver)
            .context("Failed to build skill roster")
    }
}

/// Finds the rules error behind a command failure, if there is one.
pub fn rules_failure(err: &anyhow::Error) -> Option<&SheetError> {
    err.chain().find_map(|cause| cause.downcast_ref::<SheetError>())
}

/// Logs the stable code and severity of a failed rules operation.
pub fn report_failure(err: &anyhow::Error) {
    let Some(rules) = rules_failure(err) else {
        return;
    };
    let severity = rules.severity();
    if severity.is_internal() {
        tracing::error!(code = rules.error_code(), severity = severity.as_str(), "{}", rules);
    } else {
        tracing::warn!(code = rules.error_code(), severity = severity.as_str(), "{}", rules);
    }
}
