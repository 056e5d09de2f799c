use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name of the optional per-project defaults file.
pub const CONFIG_NAME: &str = "lockmeta.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default output format (text or json)
    pub format: Option<String>,

    /// Restrict reports to non-dev requirements by default
    #[serde(rename = "no-dev")]
    pub no_dev: Option<bool>,
}

/// Load configuration from lockmeta.toml in the current directory
pub fn load_config() -> Result<Config> {
    let current_dir = std::env::current_dir().context("Failed to determine current directory")?;
    load_config_at(&current_dir)
}

/// Load configuration from lockmeta.toml in the given directory
pub fn load_config_at(dir: &Path) -> Result<Config> {
    let config_path = dir.join(CONFIG_NAME);

    if !config_path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", config_path.display()))?;

    Ok(config)
}
