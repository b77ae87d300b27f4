//! Terminal entry point for building and training a character's skill roster.
//!
//! Run with: `sheet <command>`

mod commands;
mod config;
mod observer;

use anyhow::Result;
use clap::Parser;
use commands::{List, Train};
use config::CliConfig;

/// Skill roster tools for a single character sheet
#[derive(Parser)]
#[command(name = "sheet")]
#[command(about = "Skill training and bonus tools for d20 character sheets", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Print the roster with current bonuses
    List(List),

    /// Level up, invest skill points and print the result
    Train(Train),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for SHEET_DATA_DIR and RUST_LOG)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::from_env();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::List(cmd) => cmd.execute(&config),
        Command::Train(cmd) => cmd.execute(&config),
    };
    if let Err(err) = &result {
        commands::report_failure(err);
    }
    result
}
