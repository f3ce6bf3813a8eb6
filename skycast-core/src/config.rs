use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};

use crate::model::TemperatureUnit;

/// User preferences stored on disk.
///
/// Example TOML:
/// ```toml
/// unit = "fahrenheit"
/// debounce_ms = 300
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Temperature unit requested from the forecast service.
    pub unit: TemperatureUnit,

    /// Quiet period after the last keystroke before a search fires.
    pub debounce_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self { unit: TemperatureUnit::Celsius, debounce_ms: 500 }
    }
}

impl Config {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Load config from disk, or return defaults if the file doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
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
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_widget() {
        let cfg = Config::default();
        assert_eq!(cfg.unit, TemperatureUnit::Celsius);
        assert_eq!(cfg.debounce_ms, 500);
        assert_eq!(cfg.debounce(), Duration::from_millis(500));
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let cfg: Config = toml::from_str("unit = \"fahrenheit\"").expect("parse");
        assert_eq!(cfg.unit, TemperatureUnit::Fahrenheit);
        assert_eq!(cfg.debounce_ms, 500);
    }

    #[test]
    fn round_trips_through_toml() {
        let cfg = Config { unit: TemperatureUnit::Fahrenheit, debounce_ms: 250 };
        let serialized = toml::to_string_pretty(&cfg).expect("serialize");
        let parsed: Config = toml::from_str(&serialized).expect("parse");
        assert_eq!(parsed, cfg);
    }
}
