use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};

use crate::{error::ForecastError, zone::Zone};

pub const DEFAULT_BASE_URL: &str = "https://api.forecast.io/forecast";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// lang = "de"
/// timezone = "Europe/Berlin"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_key: Option<String>,

    /// Language of the textual summaries.
    #[serde(default = "default_lang")]
    pub lang: String,

    /// Log raw requests and responses.
    #[serde(default)]
    pub debug: bool,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Zone used until a response names its own; local time when unset.
    pub timezone: Option<String>,

    /// Per-request timeout. Requests wait indefinitely when unset.
    pub timeout_secs: Option<u64>,

    /// Default number of days for `forecast show`.
    #[serde(default = "default_days")]
    pub days: usize,
}

fn default_lang() -> String {
    "en".to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_days() -> usize {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            lang: default_lang(),
            debug: false,
            base_url: default_base_url(),
            timezone: None,
            timeout_secs: None,
            days: default_days(),
        }
    }
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "forecast", "forecast-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Returns the API key, treating an empty string as missing.
    pub fn api_key(&self) -> Result<&str, ForecastError> {
        self.api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(ForecastError::MissingApiKey)
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    /// The starting zone for a request.
    pub fn zone(&self) -> Result<Zone, ForecastError> {
        match self.timezone.as_deref() {
            None => Ok(Zone::Local),
            Some(name) => {
                Zone::parse(name).ok_or_else(|| ForecastError::InvalidTimezone(name.to_string()))
            }
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
