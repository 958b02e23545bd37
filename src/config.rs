//! Configuration file handling
//!
//! Loads `~/.gradebook/config.toml`, creating it with defaults on
//! first run. Only display and shell behaviour live here; grades are
//! never persisted.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub history: HistoryConfig,

    /// Ask before clearing all grades
    #[serde(default = "default_true")]
    pub confirm_clear: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Decimal places for the average in the summary
    #[serde(default = "default_average_precision")]
    pub average_precision: usize,

    /// Decimal places for individual grades
    #[serde(default = "default_grade_precision")]
    pub grade_precision: usize,

    /// Colored output (the --no-color flag also disables it)
    #[serde(default = "default_true")]
    pub color: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Persist typed command lines between sessions
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// History file path, `~/.gradebook_history` when unset
    pub file: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

fn default_average_precision() -> usize {
    2
}

fn default_grade_precision() -> usize {
    1
}

impl Default for Config {
    fn default() -> Self {
        Config {
            display: DisplayConfig::default(),
            history: HistoryConfig::default(),
            confirm_clear: default_true(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            average_precision: default_average_precision(),
            grade_precision: default_grade_precision(),
            color: true,
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        HistoryConfig {
            enabled: true,
            file: None,
        }
    }
}

impl Config {
    /// Load configuration, creating a default file if it doesn't exist
    ///
    /// An explicit path (from `--config`) must exist; the default path
    /// is created with defaults on first run.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path()?,
        };

        if !config_path.exists() {
            if path.is_some() {
                anyhow::bail!("config file not found: {}", config_path.display());
            }
            let config = Config::default();
            config.save(&config_path)?;
            return Ok(config);
        }

        let contents = fs::read_to_string(&config_path)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents)
            .context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        fs::write(config_path, toml_string)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Get the default configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .context("Could not determine home directory")?;

        Ok(home.join(".gradebook").join("config.toml"))
    }

    /// Resolve the command-history file, `None` when history is disabled
    pub fn history_file(&self) -> Option<PathBuf> {
        if !self.history.enabled {
            return None;
        }

        self.history
            .file
            .clone()
            .or_else(|| dirs::home_dir().map(|home| home.join(".gradebook_history")))
    }
}
