use std::collections::HashMap;

use rand::RngCore;

use crate::analysis::{AnalysisError, AnalysisReport, Analyzer};
use crate::model::Dataset;

/// Counts how many distinct values occur more than once.
///
/// Frequencies are keyed by the observed value, so values outside the nominal
/// domain are counted like any other.
pub struct DuplicateAnalyzer;

impl DuplicateAnalyzer {
    pub fn count_duplicated(values: &[i32]) -> usize {
        let mut counts: HashMap<i32, usize> = HashMap::new();
        for &v in values {
            *counts.entry(v).or_insert(0) += 1;
        }
        counts.values().filter(|&&c| c > 1).count()
    }
}

impl Analyzer for DuplicateAnalyzer {
    fn analyze(
        &self,
        dataset: &Dataset,
        _rng: &mut dyn RngCore,
    ) -> Result<AnalysisReport, AnalysisError> {
        let values = dataset.to_vec();
        Ok(AnalysisReport::Duplicates { duplicated: Self::count_duplicated(&values) })
    }

    fn name(&self) -> &'static str {
        "duplicates"
    }
}
