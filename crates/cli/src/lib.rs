//! Library half of the `binary-analyzer` CLI.
//!
//! Commands live here (rather than in `main.rs`) so integration tests can call
//! them directly; `main.rs` only parses arguments and dispatches.

pub mod commands;

use std::path::PathBuf;

use analyzer_core::analysis::AnalyzerKind;
use analyzer_core::config::{load_run_config, RunConfig};
use anyhow::{anyhow, Result};

/// Command-line values that override the run config, field by field.
#[derive(Debug, Clone, Default)]
pub struct RunOverrides {
    pub config: Option<String>,
    pub path: Option<String>,
    pub length: Option<usize>,
    pub probes: Option<usize>,
    pub seed: Option<u64>,
}

/// Start from the config file (or defaults) and apply explicit flags on top.
pub fn resolve_run_config(overrides: &RunOverrides) -> Result<RunConfig> {
    let mut config = match &overrides.config {
        Some(path) => load_run_config(&PathBuf::from(path))?,
        None => RunConfig::default(),
    };
    if let Some(path) = &overrides.path {
        config.data_path = PathBuf::from(path);
    }
    if let Some(length) = overrides.length {
        config.length = length;
    }
    if let Some(probes) = overrides.probes {
        config.probes = probes;
    }
    if overrides.seed.is_some() {
        config.seed = overrides.seed;
    }
    config.validate()?;
    Ok(config)
}

/// Parse a comma-separated analyzer list such as `statistics,search`.
pub fn parse_analyzer_list(list: &str) -> Result<Vec<AnalyzerKind>> {
    let mut kinds = Vec::new();
    for name in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let kind: AnalyzerKind = name.parse()?;
        if !kinds.contains(&kind) {
            kinds.push(kind);
        }
    }
    if kinds.is_empty() {
        return Err(anyhow!("--only needs at least one analyzer name"));
    }
    Ok(kinds)
}
