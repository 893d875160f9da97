//! CLI configuration read from the environment.
use std::env;
use std::path::PathBuf;

/// Settings shared by every subcommand.
///
/// Command-line flags take precedence over these values.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    /// Chat rules file (RON or TOML). Bundled site rules when unset.
    pub rules_path: Option<PathBuf>,
    /// Parser configuration file (TOML). Site defaults when unset.
    pub parser_config_path: Option<PathBuf>,
    /// Seed for response picking. Random when unset.
    pub seed: Option<u64>,
    /// Directory for a log file in addition to stderr.
    pub log_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `GHOST_RULES` - Chat rules file
    /// - `GHOST_PARSER_CONFIG` - Parser configuration file
    /// - `GHOST_SEED` - Response seed (u64)
    /// - `GHOST_LOG_DIR` - Log file directory
    pub fn from_env() -> Self {
        Self {
            rules_path: read_env("GHOST_RULES"),
            parser_config_path: read_env("GHOST_PARSER_CONFIG"),
            seed: read_env("GHOST_SEED"),
            log_dir: read_env("GHOST_LOG_DIR"),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
