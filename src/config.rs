use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_LOAD_DELAY_MS, DEFAULT_PULL_THRESHOLD_ROWS,
    DEFAULT_REFRESH_PAUSE_MS, DEFAULT_TOAST_MS,
};

/// When the refresh indicator returns to idle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefreshReset {
    /// Reset when the load the refresh started finishes
    #[default]
    Completion,
    /// Reset after `refresh_pause_ms` whatever the load is doing
    FixedPause,
}

/// What a new load does to one that is still pending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
    /// Abort the pending load, only the newest one writes
    #[default]
    Supersede,
    /// Let every load run, last writer wins
    Race,
}

/// User configuration, read from `~/.pullrefresh/config.yaml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub load_delay_ms: u64,
    pub refresh_pause_ms: u64,
    pub toast_ms: u64,
    pub pull_threshold_rows: u16,
    pub refresh_reset: RefreshReset,
    pub overlap: OverlapPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            load_delay_ms: DEFAULT_LOAD_DELAY_MS,
            refresh_pause_ms: DEFAULT_REFRESH_PAUSE_MS,
            toast_ms: DEFAULT_TOAST_MS,
            pull_threshold_rows: DEFAULT_PULL_THRESHOLD_ROWS,
            refresh_reset: RefreshReset::default(),
            overlap: OverlapPolicy::default(),
        }
    }
}

impl Config {
    /// Default config file location
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Load from the default location, falling back to defaults.
    ///
    /// A missing file is normal; a malformed one is logged and ignored.
    pub fn load() -> Self {
        let path = Self::default_path();
        if !path.exists() {
            return Config::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring invalid config");
                Config::default()
            }
        }
    }

    /// Parse a config file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config.sanitized())
    }

    // A zero threshold would refresh on every click.
    fn sanitized(mut self) -> Self {
        self.pull_threshold_rows = self.pull_threshold_rows.max(1);
        self
    }

    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }

    pub fn refresh_pause(&self) -> Duration {
        Duration::from_millis(self.refresh_pause_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }
}
