use rand::{Rng, RngCore};

use crate::algorithms::{binary_search, selection_sort};
use crate::analysis::{AnalysisError, AnalysisReport, Analyzer};
use crate::model::Dataset;

/// Probes issued per run unless configured otherwise.
pub const DEFAULT_PROBES: usize = 100;

/// Searches a sorted copy for random keys and counts the hits.
///
/// The result is a coverage estimate and varies from run to run. An empty
/// dataset yields zero hits.
pub struct RandomSearchAnalyzer {
    probes: usize,
    domain: i32,
}

impl RandomSearchAnalyzer {
    pub fn new(probes: usize, domain: i32) -> Self {
        Self { probes, domain }
    }

    pub fn probes(&self) -> usize {
        self.probes
    }

    /// Count hits for `probes` random keys against an ascending slice.
    pub fn count_hits(&self, sorted: &[i32], rng: &mut dyn RngCore) -> usize {
        if self.domain <= 0 {
            return 0;
        }
        (0..self.probes)
            .filter(|_| {
                let key = rng.gen_range(0..self.domain);
                binary_search(sorted, key)
            })
            .count()
    }
}

impl Default for RandomSearchAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_PROBES, crate::model::DOMAIN_SIZE)
    }
}

impl Analyzer for RandomSearchAnalyzer {
    fn analyze(
        &self,
        dataset: &Dataset,
        rng: &mut dyn RngCore,
    ) -> Result<AnalysisReport, AnalysisError> {
        let mut values = dataset.to_vec();
        selection_sort(&mut values);
        let hits = self.count_hits(&values, rng);
        Ok(AnalysisReport::Search { hits, probes: self.probes })
    }

    fn name(&self) -> &'static str {
        "search"
    }
}
