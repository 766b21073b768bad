use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use zerowaste_common::{Config, Country};

/// TOML-backed overrides for the env configuration. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    pub country: Option<Country>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub snapshot_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    pub json: Option<bool>,
}

impl FileConfig {
    /// Values set in the file replace the env-derived ones.
    pub fn apply_to(&self, mut config: Config) -> Config {
        if let Some(country) = self.report.country {
            config.country = country;
        }
        if let Some(dir) = &self.output.snapshot_dir {
            config.snapshot_dir = dir.clone();
        }
        if let Some(json) = self.logging.json {
            config.log_json = json;
        }
        config
    }
}

/// Load and parse a TOML config file.
pub fn load_config(path: &Path) -> Result<FileConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: FileConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    Ok(config)
}
