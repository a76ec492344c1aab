//! Tool configuration (YAML). Hourly rates are not here: they live in the
//! data file next to the history they apply to.

use crate::errors::AppResult;
use crate::utils::path::{FixedPath, PathProvider, PlatformDataPath, expand_tilde};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Data file override; the platform data directory is used when unset.
    #[serde(default)]
    pub data_file: Option<String>,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_currency() -> String {
    "€".to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            currency: default_currency(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("punchclock"))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("punchclock.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Where the data file lives: explicit override first, then the config
    /// entry, then the platform default.
    pub fn path_provider(&self, cli_override: Option<&str>) -> Box<dyn PathProvider> {
        match cli_override.or(self.data_file.as_deref()) {
            Some(p) => Box::new(FixedPath(expand_tilde(p))),
            None => Box::new(PlatformDataPath),
        }
    }

    /// Write the config file if it does not exist yet; returns its path.
    pub fn init_file(&self) -> AppResult<PathBuf> {
        let path = Self::config_file();
        if !path.exists() {
            fs::create_dir_all(Self::config_dir())?;
            fs::write(&path, self.to_yaml()?)?;
        }
        Ok(path)
    }
}
