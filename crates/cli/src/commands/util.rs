use analyzer_core::pipeline::AnalyzerOutcome;
use anyhow::{Context, Result};
use serde_json::{json, Value};

/// Human-readable reports, one block per analyzer, in run order.
pub fn render_text(analyses: &[AnalyzerOutcome]) -> String {
    let mut out = String::new();
    for outcome in analyses {
        match &outcome.result {
            Ok(report) => out.push_str(&report.to_string()),
            Err(e) => out.push_str(&format!("{}: {e}", outcome.name)),
        }
        out.push('\n');
    }
    out
}

/// JSON form of each analyzer outcome.
pub fn analyses_to_json(analyses: &[AnalyzerOutcome]) -> Result<Value> {
    analyses
        .iter()
        .map(|outcome| match &outcome.result {
            Ok(report) => {
                let report =
                    serde_json::to_value(report).context("Failed to serialize analysis report")?;
                Ok(json!({ "analyzer": outcome.name, "report": report }))
            }
            Err(e) => Ok(json!({ "analyzer": outcome.name, "error": e.to_string() })),
        })
        .collect::<Result<Vec<_>>>()
        .map(Value::Array)
}
