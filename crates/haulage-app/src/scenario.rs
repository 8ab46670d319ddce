//! Scenario files: one job (and optionally a fleet) described in TOML or JSON

use haulage_domain::model::{FleetParameters, JobParameters};
use haulage_types::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::Config;

/// A job description loaded from disk. The fleet block is optional; missing
/// fields fall back to the configured defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub job: JobParameters,
    #[serde(default)]
    pub fleet: Option<FleetParameters>,
}

impl Scenario {
    /// Load a scenario from a `.toml` or `.json` file, picked by extension.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("toml") => {
                toml::from_str(&content).map_err(|e| Error::Scenario(e.to_string()))
            }
            Some("json") => Ok(serde_json::from_str(&content)?),
            _ => Err(Error::Scenario(format!(
                "unsupported scenario file: {} (expected .toml or .json)",
                path.display()
            ))),
        }
    }

    /// Split into job and fleet, filling the fleet from config defaults
    /// when the file has no fleet block.
    pub fn resolve(self, config: &Config) -> (JobParameters, FleetParameters) {
        let fleet = self.fleet.unwrap_or_else(|| config.fleet.clone());
        (self.job, fleet)
    }
}
