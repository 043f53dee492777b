//! Persistent configuration
//!
//! Settings are read from `<config_dir>/recipe-search/config.toml`. Every field
//! is optional in the file; CLI flags and environment variables override it.

use crate::api::client::{DEFAULT_BASE_URL, DEFAULT_RESULT_LIMIT};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

/// Values the search endpoint accepts for `number`.
pub const RESULT_LIMIT_RANGE: RangeInclusive<u32> = 1..=100;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Spoonacular API key
    pub api_key: Option<String>,
    /// API host, without trailing path
    pub base_url: String,
    /// Number of recipes requested per search
    pub result_limit: u32,
    /// HTTP timeout in seconds
    pub timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            result_limit: DEFAULT_RESULT_LIMIT,
            timeout_secs: 30,
        }
    }
}

/// Values supplied on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub result_limit: Option<u32>,
    pub timeout_secs: Option<u64>,
}

impl AppConfig {
    pub fn apply(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(api_key) = overrides.api_key {
            self.api_key = Some(api_key);
        }
        if let Some(base_url) = overrides.base_url {
            self.base_url = base_url;
        }
        if let Some(limit) = overrides.result_limit {
            self.result_limit = limit;
        }
        if let Some(timeout) = overrides.timeout_secs {
            self.timeout_secs = timeout;
        }
        self
    }

    pub fn require_api_key(&self) -> Result<&str> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => bail!(
                "No API key configured. Pass --api-key, set SPOONACULAR_API_KEY, \
                 or add `api_key = \"...\"` to the config file"
            ),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !RESULT_LIMIT_RANGE.contains(&self.result_limit) {
            bail!(
                "result_limit must be between {} and {}, got {}",
                RESULT_LIMIT_RANGE.start(),
                RESULT_LIMIT_RANGE.end(),
                self.result_limit
            );
        }
        Ok(())
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }
}

pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_dir().join("config.toml"),
        }
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Load the config file, falling back to defaults when it does not exist.
    pub fn load(&self) -> Result<AppConfig> {
        if !self.config_path.exists() {
            return Ok(AppConfig::default());
        }

        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file {}", self.config_path.display())
        })?;
        let config: AppConfig = toml::from_str(&contents).with_context(|| {
            format!("Failed to parse config file {}", self.config_path.display())
        })?;
        config.validate().with_context(|| {
            format!("Invalid config file {}", self.config_path.display())
        })?;
        Ok(config)
    }

    /// Write `config` as a new file. An existing file is left untouched.
    pub fn create(&self, config: &AppConfig) -> Result<()> {
        if self.config_path.exists() {
            bail!("Config file {} already exists", self.config_path.display());
        }
        self.save(config)
    }

    pub fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let toml_string = toml::to_string_pretty(config).context("Failed to serialize config")?;
        fs::write(&self.config_path, toml_string).context("Failed to write config file")?;
        Ok(())
    }

    fn default_config_dir() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("recipe-search")
        } else if let Some(home) = dirs::home_dir() {
            home.join(".config").join("recipe-search")
        } else {
            PathBuf::from(".recipe-search")
        }
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
