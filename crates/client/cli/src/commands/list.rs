//! Print the skill roster.

use anyhow::Result;
use clap::Parser;
use console::style;

use super::ContentArgs;
use crate::config::CliConfig;

/// Print the roster with current bonuses
#[derive(Parser, Debug)]
pub struct List {
    #[command(flatten)]
    pub content: ContentArgs,

    /// Character level to compute rank ceilings for
    #[arg(long)]
    pub level: Option<u32>,

    /// Show only class skills
    #[arg(long)]
    pub class_only: bool,
}

impl List {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let mut roster = self.content.load_roster(config)?;
        if let Some(level) = self.level {
            roster.set_max_ranks(level);
        }

        println!(
            "{} level {}, {} skills",
            style("Roster").bold(),
            style(roster.level()).cyan(),
            roster.len()
        );

        if self.class_only {
            for skill in roster.iter().filter(|skill| skill.is_class_skill()) {
                println!("{}", skill);
            }
        } else {
            print!("{}", roster);
        }
        Ok(())
    }
}
