//! CLI configuration read from the environment.
use std::env;
use std::path::PathBuf;

/// Settings shared by every command.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    /// Directory holding `skills.ron` and `roster.toml`.
    pub data_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SHEET_DATA_DIR` - Directory with roster content (default: embedded content)
    pub fn from_env() -> Self {
        Self {
            data_dir: read_env::<PathBuf>("SHEET_DATA_DIR"),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
