use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::analysis::DEFAULT_PROBES;
use crate::model::DEFAULT_LENGTH;

/// File a default run writes to and reads back from.
pub const DEFAULT_DATA_FILE: &str = "binary.dat";

fn default_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_length() -> usize {
    DEFAULT_LENGTH
}

fn default_probes() -> usize {
    DEFAULT_PROBES
}

/// Settings for one pipeline run.
///
/// Every field has a default so a config file only needs the fields it changes.
/// The value domain is fixed and deliberately not configurable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Binary data file, relative to the working directory unless absolute.
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,
    /// Number of values to generate.
    #[serde(default = "default_length")]
    pub length: usize,
    /// Random probes issued by the search analyzer.
    #[serde(default = "default_probes")]
    pub probes: usize,
    /// Fixed seed for a reproducible run; the clock is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            length: default_length(),
            probes: default_probes(),
            seed: None,
        }
    }
}

impl RunConfig {
    pub fn validate(&self) -> Result<()> {
        if i32::try_from(self.length).is_err() {
            return Err(anyhow!(
                "Run config 'length' must be at most {}, got {}",
                i32::MAX,
                self.length
            ));
        }
        Ok(())
    }
}

/// Load a run config from a `.json`, `.yaml` or `.yml` file.
pub fn load_run_config(path: &Path) -> Result<RunConfig> {
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read run config at {}", path.display()))?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default().to_ascii_lowercase();
    let config: RunConfig = match ext.as_str() {
        "json" => serde_json::from_str(&body).context("Failed to parse run config JSON")?,
        "yaml" | "yml" => serde_yaml::from_str(&body).context("Failed to parse run config YAML")?,
        other => {
            return Err(anyhow!(
                "Unsupported run config extension '.{other}'. Allowed: json, yaml, yml"
            ))
        }
    };
    config.validate()?;
    Ok(config)
}
