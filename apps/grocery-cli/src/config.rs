//! # Configuration
//!
//! Resolved once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--db`)
//! 2. Environment variables (`GROCERY_*`)
//! 3. Defaults (platform data directory)

use directories::ProjectDirs;
use grocery_db::{DbConfig, StoreConfig};
use std::path::PathBuf;

/// Database file override.
pub const ENV_DB_PATH: &str = "GROCERY_DB_PATH";
/// `true` lets the store accept empty titles.
pub const ENV_PERMISSIVE_TITLES: &str = "GROCERY_PERMISSIVE_TITLES";
/// Log filter; falls back to `RUST_LOG`, then [`DEFAULT_LOG_FILTER`].
pub const ENV_LOG: &str = "GROCERY_LOG";

pub const DEFAULT_LOG_FILTER: &str = "warn,grocery_cli=info,sqlx=warn";

const DB_FILE_NAME: &str = "grocery.db";

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Could not determine the app data directory; set GROCERY_DB_PATH")]
    NoDataDir,
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// SQLite file holding the list.
    pub database_path: PathBuf,

    /// Store accepts empty titles when set.
    pub permissive_titles: bool,

    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
}

impl CliConfig {
    /// Creates a config from the `--db` flag and the process environment.
    pub fn load(db_flag: Option<PathBuf>) -> Result<Self, ConfigError> {
        CliConfig::from_vars(db_flag, |key| std::env::var(key).ok())
    }

    /// Creates a config from the `--db` flag and an arbitrary variable lookup.
    pub fn from_vars<F>(db_flag: Option<PathBuf>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_path = lookup(ENV_DB_PATH)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        let database_path = match db_flag.or(env_path) {
            Some(path) => path,
            None => default_database_path()?,
        };

        let permissive_titles = match lookup(ENV_PERMISSIVE_TITLES) {
            Some(raw) => parse_bool(&raw)
                .ok_or_else(|| ConfigError::InvalidValue(ENV_PERMISSIVE_TITLES.to_string()))?,
            None => false,
        };

        let log_filter = lookup(ENV_LOG)
            .or_else(|| lookup("RUST_LOG"))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(CliConfig {
            database_path,
            permissive_titles,
            log_filter,
        })
    }

    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.database_path)
    }

    pub fn store_config(&self) -> StoreConfig {
        if self.permissive_titles {
            StoreConfig::permissive()
        } else {
            StoreConfig::default()
        }
    }
}

/// Platform-specific data file.
///
/// - **macOS**: `~/Library/Application Support/com.grocery.grocery-list/grocery.db`
/// - **Windows**: `%APPDATA%\grocery\grocery-list\data\grocery.db`
/// - **Linux**: `~/.local/share/grocery-list/grocery.db`
fn default_database_path() -> Result<PathBuf, ConfigError> {
    let dirs = ProjectDirs::from("com", "grocery", "grocery-list").ok_or(ConfigError::NoDataDir)?;
    Ok(dirs.data_dir().join(DB_FILE_NAME))
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
