use analyzer_core::analysis::AnalyzerRegistry;
use analyzer_core::pipeline::PipelineRunner;
use anyhow::{Context, Result};

use crate::{resolve_run_config, RunOverrides};

/// Generate a dataset and write it, without analyzing.
pub fn generate_command(overrides: &RunOverrides) -> Result<()> {
    let config = resolve_run_config(overrides)?;
    let registry = AnalyzerRegistry::new();
    let runner = PipelineRunner { config: &config, registry: &registry };
    let (dataset, seed) = runner.generate_file().with_context(|| {
        format!("Failed to generate data file at {}", config.data_path.display())
    })?;

    println!("Generated data file:");
    println!("  Path: {}", config.data_path.display());
    println!("  Values: {}", dataset.len());
    println!("  Seed: {seed}");
    Ok(())
}
