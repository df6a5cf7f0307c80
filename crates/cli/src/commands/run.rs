use analyzer_core::analysis::default_analyzer_registry;
use analyzer_core::pipeline::{PipelineOutcome, PipelineRunner};
use anyhow::{Context, Result};
use serde_json::json;

use crate::commands::{analyses_to_json, render_text};
use crate::{resolve_run_config, RunOverrides};

/// Full pipeline: generate, write, read back, run all four analyzers.
///
/// Open failures are printed and the run carries on, so this only errors on
/// bad configuration.
pub fn run_command(overrides: &RunOverrides, json: bool) -> Result<()> {
    let config = resolve_run_config(overrides)?;
    let registry = default_analyzer_registry(config.probes);
    let runner = PipelineRunner { config: &config, registry: &registry };
    let outcome = runner.run()?;

    if json {
        println!("{}", render_run_json(&outcome, &config.data_path.display().to_string())?);
    } else {
        print!("{}", render_run_text(&outcome));
    }
    Ok(())
}

pub fn render_run_text(outcome: &PipelineOutcome) -> String {
    let mut out = String::new();
    if let Some(e) = &outcome.write_error {
        out.push_str(&format!("{e}\n"));
    }
    if let Some(e) = &outcome.read_error {
        out.push_str(&format!("{e}\n"));
    }
    out.push_str(&render_text(&outcome.analyses));
    out
}

pub fn render_run_json(outcome: &PipelineOutcome, data_path: &str) -> Result<String> {
    let body = json!({
        "seed": outcome.seed,
        "data_path": data_path,
        "generated": outcome.generated,
        "loaded": outcome.dataset.len(),
        "write_error": outcome.write_error.as_ref().map(|e| e.to_string()),
        "read_error": outcome.read_error.as_ref().map(|e| e.to_string()),
        "domain_error": outcome.domain_error.as_ref().map(|e| e.to_string()),
        "analyses": analyses_to_json(&outcome.analyses)?,
    });
    serde_json::to_string_pretty(&body).context("Failed to serialize run outcome to JSON")
}
