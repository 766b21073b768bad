use std::env;
use std::path::PathBuf;

use crate::error::{Result, ZeroWasteError};
use crate::mapping::Country;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Country used for currency formatting in reports.
    pub country: Country,
    /// Emit logs as JSON lines instead of human-readable text.
    pub log_json: bool,
    /// Directory export snapshots are written to.
    pub snapshot_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            country: Country::Philippines,
            log_json: false,
            snapshot_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    /// Every variable is optional.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup so tests don't touch process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let country = match lookup("ZW_COUNTRY") {
            Some(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => defaults.country,
        };

        let log_json = match lookup("ZW_LOG_JSON") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                ZeroWasteError::Config(format!("ZW_LOG_JSON must be true or false, got {raw}"))
            })?,
            None => defaults.log_json,
        };

        let snapshot_dir = lookup("ZW_SNAPSHOT_DIR")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.snapshot_dir);

        Ok(Self {
            country,
            log_json,
            snapshot_dir,
        })
    }

    /// Log the effective configuration.
    pub fn log_redacted(&self) {
        tracing::info!("Config loaded:");
        tracing::info!("  ZW_COUNTRY: {}", self.country);
        tracing::info!("  ZW_LOG_JSON: {}", self.log_json);
        tracing::info!("  ZW_SNAPSHOT_DIR: {}", self.snapshot_dir.display());
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" | "" => Some(false),
        _ => None,
    }
}
