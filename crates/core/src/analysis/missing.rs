use std::collections::HashSet;

use rand::RngCore;

use crate::analysis::{AnalysisError, AnalysisReport, Analyzer};
use crate::model::Dataset;

/// Counts how many values of `[0, domain)` never appear in the dataset.
pub struct MissingAnalyzer {
    domain: i32,
}

impl MissingAnalyzer {
    pub fn new(domain: i32) -> Self {
        Self { domain }
    }

    pub fn domain(&self) -> i32 {
        self.domain
    }

    /// Values outside the domain are seen but never counted as missing.
    pub fn count_missing(&self, values: &[i32]) -> usize {
        let seen: HashSet<i32> = values.iter().copied().collect();
        (0..self.domain).filter(|v| !seen.contains(v)).count()
    }
}

impl Analyzer for MissingAnalyzer {
    fn analyze(
        &self,
        dataset: &Dataset,
        _rng: &mut dyn RngCore,
    ) -> Result<AnalysisReport, AnalysisError> {
        let values = dataset.to_vec();
        Ok(AnalysisReport::Missing { missing: self.count_missing(&values) })
    }

    fn name(&self) -> &'static str {
        "missing"
    }
}
