use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::app::TimerSize;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClockifyConfig {
    /// Initial timer box size: "normal" or "large".
    #[serde(default)]
    pub timer_size: TimerSize,

    /// tracing-subscriber filter directive, e.g. "clockify_tui=debug".
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Log file location. Defaults to clockify-tui.log next to the config file.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

fn default_log_filter() -> String {
    "clockify_tui=info".to_string()
}

impl Default for ClockifyConfig {
    fn default() -> Self {
        Self {
            timer_size: TimerSize::default(),
            log_filter: default_log_filter(),
            log_file: None,
        }
    }
}

impl ClockifyConfig {
    fn config_dir() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join("clockify-tui"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Where logs go: the configured path or the default next to the config.
    pub fn log_path(&self) -> Result<PathBuf> {
        match &self.log_file {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join("clockify-tui.log")),
        }
    }

    /// Load config from disk. Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        Self::from_toml(&raw).with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(&path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = ClockifyConfig::from_toml("").unwrap();
        assert_eq!(config, ClockifyConfig::default());
        assert_eq!(config.log_filter, "clockify_tui=info");
    }

    #[test]
    fn reads_all_fields() {
        let config = ClockifyConfig::from_toml(
            r#"
            timer_size = "large"
            log_filter = "clockify_tui=trace"
            log_file = "/tmp/clockify.log"
            "#,
        )
        .unwrap();
        assert_eq!(config.timer_size, TimerSize::Large);
        assert_eq!(config.log_filter, "clockify_tui=trace");
        assert_eq!(config.log_path().unwrap(), PathBuf::from("/tmp/clockify.log"));
    }

    #[test]
    fn rejects_unknown_timer_size() {
        assert!(ClockifyConfig::from_toml(r#"timer_size = "huge""#).is_err());
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let raw = toml::to_string_pretty(&ClockifyConfig::default()).unwrap();
        assert_eq!(
            ClockifyConfig::from_toml(&raw).unwrap(),
            ClockifyConfig::default()
        );
    }
}
