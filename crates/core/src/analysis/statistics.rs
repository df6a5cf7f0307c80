use std::fmt;

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::algorithms::selection_sort;
use crate::analysis::{AnalysisError, AnalysisReport, Analyzer};
use crate::model::Dataset;

/// Descriptive statistics of a non-empty dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsReport {
    pub min: i32,
    pub max: i32,
    pub mean: f64,
    pub median: f64,
    /// Most frequent value; ties go to the smallest.
    pub mode: i32,
    pub mode_count: usize,
}

impl fmt::Display for StatisticsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "The minimum value is {}", self.min)?;
        writeln!(f, "The maximum value is {}", self.max)?;
        writeln!(f, "The mean value is {}", significant(self.mean, 6))?;
        writeln!(f, "The median value is {}", self.median)?;
        write!(f, "The mode value is {} which occurred {} times", self.mode, self.mode_count)
    }
}

/// Render `value` with at most `digits` significant digits, dropping trailing zeros.
fn significant(value: f64, digits: i32) -> String {
    if value == 0.0 || !value.is_finite() {
        return value.to_string();
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (digits - 1 - magnitude).max(0) as usize;
    let text = format!("{value:.decimals$}");
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

/// Sort a copy of `values` and summarize it.
pub fn describe(values: &[i32]) -> Result<StatisticsReport, AnalysisError> {
    let mut sorted = values.to_vec();
    selection_sort(&mut sorted);
    summarize_sorted(&sorted)
}

fn summarize_sorted(sorted: &[i32]) -> Result<StatisticsReport, AnalysisError> {
    let n = sorted.len();
    if n == 0 {
        return Err(AnalysisError::EmptyDataset);
    }

    let sum: i64 = sorted.iter().map(|&v| i64::from(v)).sum();
    let mean = sum as f64 / n as f64;

    let median = if n % 2 == 1 {
        f64::from(sorted[n / 2])
    } else {
        (f64::from(sorted[n / 2 - 1]) + f64::from(sorted[n / 2])) / 2.0
    };

    let (mode, mode_count) = longest_run(sorted);

    Ok(StatisticsReport { min: sorted[0], max: sorted[n - 1], mean, median, mode, mode_count })
}

/// Longest run of equal values in a non-empty sorted slice.
fn longest_run(sorted: &[i32]) -> (i32, usize) {
    let mut mode = sorted[0];
    let mut max_count = 1;
    let mut current = 1;

    for pair in sorted.windows(2) {
        if pair[1] == pair[0] {
            current += 1;
            continue;
        }
        if current > max_count {
            max_count = current;
            mode = pair[0];
        }
        current = 1;
    }
    // The final run never meets a transition inside the loop.
    if current > max_count {
        max_count = current;
        mode = sorted[sorted.len() - 1];
    }

    (mode, max_count)
}

/// Minimum, maximum, mean, median and mode over a sorted copy.
pub struct StatisticsAnalyzer;

impl Analyzer for StatisticsAnalyzer {
    fn analyze(
        &self,
        dataset: &Dataset,
        _rng: &mut dyn RngCore,
    ) -> Result<AnalysisReport, AnalysisError> {
        describe(dataset.values()).map(AnalysisReport::Statistics)
    }

    fn name(&self) -> &'static str {
        "statistics"
    }
}
