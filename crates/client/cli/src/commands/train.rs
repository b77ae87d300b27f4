//! Level up and invest skill points.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use sheet_core::SkillRoster;

use super::ContentArgs;
use crate::config::CliConfig;

/// Level up, invest skill points and print the result
#[derive(Parser, Debug)]
pub struct Train {
    #[command(flatten)]
    pub content: ContentArgs,

    /// Skill points available before any level-up
    #[arg(long, default_value_t = 0)]
    pub start_points: u32,

    /// Number of levels to gain
    #[arg(long, default_value_t = 0)]
    pub levels: u32,

    /// Skill points gained per level
    #[arg(long, default_value_t = 0)]
    pub points: u32,

    /// Extra class skills to mark before training
    #[arg(long = "class-skill")]
    pub class_skills: Vec<String>,

    /// Skills whose untrained-use flag is flipped before training
    #[arg(long = "toggle-untrained")]
    pub toggle_untrained: Vec<String>,

    /// Investments applied in order, as NAME=POINTS
    #[arg(long = "invest", value_parser = parse_investment)]
    pub investments: Vec<(String, i32)>,
}

impl Train {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let roster = self.run(config)?;

        println!(
            "{} level {}, {} points available, {} spent",
            style("Roster").bold(),
            style(roster.level()).cyan(),
            roster.points_available(),
            roster.points_spent()
        );
        print!("{}", roster);
        Ok(())
    }

    /// Builds the roster and applies toggles, level-ups and investments in order.
    fn run(&self, config: &CliConfig) -> Result<SkillRoster> {
        let mut roster = self.content.load_roster(config)?;

        roster.set_class_skills(&self.class_skills)?;
        for name in &self.toggle_untrained {
            roster.toggle_untrained(name)?;
        }

        roster.grant_points(self.start_points);
        for _ in 0..self.levels {
            roster.go_up_a_level(self.points);
        }

        for (name, points) in &self.investments {
            let overflow = roster
                .invest(name, *points)
                .with_context(|| format!("Failed to invest {} points in {}", points, name))?;
            let skill = roster
                .get(name)
                .with_context(|| format!("Skill {} disappeared from roster", name))?;

            if overflow.is_zero() {
                println!("{} {}", style("✓").green().bold(), skill);
            } else {
                println!(
                    "{} {} ({} points over the ceiling returned)",
                    style("!").yellow().bold(),
                    skill,
                    style(overflow).yellow()
                );
            }
        }
        Ok(roster)
    }
}

/// Parses a `NAME=POINTS` investment argument.
fn parse_investment(arg: &str) -> Result<(String, i32), String> {
    let (name, points) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=POINTS, got {:?}", arg))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing skill name in {:?}", arg));
    }
    let points = points
        .trim()
        .parse()
        .map_err(|e| format!("invalid points in {:?}: {}", arg, e))?;
    Ok((name.to_owned(), points))
}
