//! Configuration management for haulage-planner
//!
//! Config stored at: ~/.config/haulage-planner/config.json

use chrono::NaiveTime;
use haulage_domain::model::FleetParameters;
use haulage_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_fleet() -> FleetParameters {
    FleetParameters::default()
}

fn default_day_start() -> NaiveTime {
    NaiveTime::from_hms_opt(8, 0, 0).unwrap()
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default lorry pool used when a scenario does not specify one
    #[serde(default = "default_fleet")]
    pub fleet: FleetParameters,

    /// Clock time the working window opens
    #[serde(default = "default_day_start")]
    pub day_start: NaiveTime,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fleet: default_fleet(),
            day_start: default_day_start(),
            output_format: default_output_format(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("haulage-planner");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Haulage Planner Configuration")?;
        writeln!(f, "=============================")?;
        writeln!(f)?;
        writeln!(f, "Lorry capacity:  {:.1} t", self.fleet.capacity_tonnes)?;
        writeln!(f, "Average speed:   {:.1} mph", self.fleet.speed_mph)?;
        writeln!(f, "Tipping time:    {:.1} min", self.fleet.tip_minutes)?;
        writeln!(f, "Day start:       {}", self.day_start.format("%H:%M"))?;
        writeln!(f, "Output format:   {}", self.output_format)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:     {}", path.display())?;
        }

        Ok(())
    }
}
