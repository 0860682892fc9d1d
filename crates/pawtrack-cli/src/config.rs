//! Configuration management for PawTrack CLI
//!
//! Stores the server URL, API key, default pet and UTC offset in
//! ~/.config/pawtrack/config.toml. The reminder store snapshot lives next to
//! it in store.json.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

use pawtrack::DayClock;

const CONFIG_DIR: &str = "pawtrack";
const CONFIG_FILE: &str = "config.toml";
const STORE_FILE: &str = "store.json";

/// CLI Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Pet used by `day` and `reminder add` when `--pet` is omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_pet: Option<Uuid>,
    /// Where calendar days begin, in minutes east of UTC
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            default_pet: None,
            utc_offset_minutes: 0,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Get the store snapshot path
    pub fn store_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(STORE_FILE))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        Self::parse(&content)
    }

    fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {:?}", dir))?;

        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Set API key
    pub fn set_api_key(&mut self, key: String) {
        self.api_key = Some(key);
    }

    /// Day boundaries used for grouping and stats
    pub fn clock(&self) -> Result<DayClock> {
        DayClock::from_offset_minutes(self.utc_offset_minutes)
            .context("Invalid utc_offset_minutes in config")
    }
}
