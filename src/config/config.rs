use std::env;
use std::fs;

use serde::{Deserialize, Serialize};

use crate::config::Platform;
use crate::constants::{BACKEND_URL_ENV, CONFIG_FILE};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    pub backend_url: Option<String>,
    pub default_team_id: Option<String>,
}

pub fn load_config() -> Config {
    let config_path = match dirs::home_dir() {
        Some(home) => home.join(CONFIG_FILE),
        None => return Config::default(),
    };

    if config_path.exists() {
        let config_str = fs::read_to_string(&config_path).unwrap_or_default();
        serde_json::from_str(&config_str).unwrap_or_default()
    } else {
        Config::default()
    }
}

pub fn save_config(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let home_dir = dirs::home_dir().ok_or("Could not find home directory")?;
    let config_path = home_dir.join(CONFIG_FILE);

    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(config_path, config_str)?;

    Ok(())
}

/// Backend address resolved once at startup and passed down unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub base_url: String,
}

impl BackendConfig {
    /// Resolve the base address. Precedence: explicit override (the
    /// `--backend` flag), then the environment variable, then the config
    /// file, then the platform default. Resolution never fails.
    pub fn resolve(platform: Platform, override_url: Option<&str>) -> Self {
        let base_url = override_url
            .map(str::to_string)
            .or_else(|| env::var(BACKEND_URL_ENV).ok())
            .or_else(|| load_config().backend_url)
            .unwrap_or_else(|| platform.base_url().to_string());

        Self { base_url }
    }

    /// A config pinned to a known address, bypassing resolution.
    pub fn fixed(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}
