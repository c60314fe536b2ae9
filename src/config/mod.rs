pub mod schema;

pub use schema::SiteConfig;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable that overrides the configured API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Config file name inside the home directory.
pub const CONFIG_FILE: &str = "sitegen.toml";

/// Default sitegen home directory (~/.sitegen).
pub fn default_home_dir() -> PathBuf {
    directories::BaseDirs::new()
        .map(|d| d.home_dir().join(".sitegen"))
        .unwrap_or_else(|| PathBuf::from(".sitegen"))
}

/// Load config from the given path, or return defaults.
pub fn load_config(path: &Path) -> Result<SiteConfig> {
    if path.exists() {
        let contents =
            std::fs::read_to_string(path).context("Failed to read sitegen config file")?;
        let config: SiteConfig =
            toml::from_str(&contents).context("Failed to parse sitegen config (TOML)")?;
        Ok(config)
    } else {
        debug!("No config at {}, using defaults", path.display());
        Ok(SiteConfig::default())
    }
}

/// Load config and apply the `GEMINI_API_KEY` environment override.
pub fn load_config_with_env(path: &Path) -> Result<SiteConfig> {
    let mut config = load_config(path)?;
    apply_env_key(&mut config, std::env::var(API_KEY_ENV).ok());
    Ok(config)
}

fn apply_env_key(config: &mut SiteConfig, key: Option<String>) {
    if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
        debug!("Using API key from {}", API_KEY_ENV);
        config.api_key = key;
    }
}

/// Save config to the given path (TOML format).
pub fn save_config(config: &SiteConfig, path: &Path) -> Result<()> {
    let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents).context("Failed to write config file")?;
    Ok(())
}
