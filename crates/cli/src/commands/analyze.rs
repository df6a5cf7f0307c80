use analyzer_core::analysis::{default_analyzer_registry, AnalyzerRegistry};
use analyzer_core::pipeline::PipelineRunner;
use anyhow::{Context, Result};

use crate::commands::{analyses_to_json, render_text};
use crate::{parse_analyzer_list, resolve_run_config, RunOverrides};

/// Run analyzers over an existing data file.
///
/// Unlike `run`, a file that cannot be read is an error here: there is nothing
/// to analyze.
pub fn analyze_command(overrides: &RunOverrides, only: Option<&str>, json: bool) -> Result<()> {
    let config = resolve_run_config(overrides)?;
    let registry = match only {
        Some(list) => AnalyzerRegistry::from_kinds(&parse_analyzer_list(list)?, config.probes),
        None => default_analyzer_registry(config.probes),
    };
    let runner = PipelineRunner { config: &config, registry: &registry };
    let analyses = runner
        .analyze_file(&config.data_path)
        .with_context(|| format!("Failed to analyze {}", config.data_path.display()))?;

    if json {
        let body = serde_json::to_string_pretty(&analyses_to_json(&analyses)?)
            .context("Failed to serialize analyses to JSON")?;
        println!("{body}");
    } else {
        print!("{}", render_text(&analyses));
    }
    Ok(())
}
