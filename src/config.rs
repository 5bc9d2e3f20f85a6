//! User configuration loaded from `~/.commentboard/config.yaml`

use anyhow::{bail, Context, Result};
use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_TIMESTAMP_FORMAT};
use crate::models::{SortType, ViewOptions};

/// Settings read at startup. Every field is optional in the file.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_sort: SortType,
    pub show_timestamps: bool,
    pub timestamp_format: String,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_sort: SortType::None,
            show_timestamps: true,
            timestamp_format: String::from(DEFAULT_TIMESTAMP_FORMAT),
            log_level: String::from("info"),
        }
    }
}

impl Config {
    /// Directory holding the config file
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR_NAME)
    }

    /// Load `config.yaml` from `dir`. A missing file yields defaults.
    pub fn load_from(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        // An empty file parses as unit, not as a mapping
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if StrftimeItems::new(&self.timestamp_format).any(|item| matches!(item, Item::Error)) {
            bail!("invalid timestamp_format: {:?}", self.timestamp_format);
        }
        if self.log_level().is_none() {
            bail!("invalid log_level: {:?}", self.log_level);
        }
        Ok(())
    }

    pub fn log_level(&self) -> Option<tracing::Level> {
        self.log_level.parse().ok()
    }

    /// Initial view settings for the app
    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            sort: self.default_sort,
            show_timestamps: self.show_timestamps,
        }
    }
}
