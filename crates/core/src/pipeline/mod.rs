//! Sequential driver: generate → write → read → analyze.
//!
//! I/O failures are caught where they happen and recorded on the outcome
//! instead of aborting the run. A failed read leaves the analyzers running
//! over an empty dataset, which is how degraded mode shows up in the reports.

use std::path::Path;

use log::{error, info, warn};
use rand::RngCore;
use thiserror::Error;

use crate::analysis::{AnalysisError, AnalysisReport, AnalyzerRegistry};
use crate::codec::{self, CodecError};
use crate::config::RunConfig;
use crate::generator::{self, GeneratorError};
use crate::model::{Dataset, DatasetError, DOMAIN_SIZE};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Generator(#[from] GeneratorError),
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Result of one analyzer, tagged with the analyzer's name.
#[derive(Debug)]
pub struct AnalyzerOutcome {
    pub name: &'static str,
    pub result: Result<AnalysisReport, AnalysisError>,
}

/// Everything a full run produced, including recorded failures.
#[derive(Debug)]
pub struct PipelineOutcome {
    pub seed: u64,
    pub generated: usize,
    pub write_error: Option<CodecError>,
    pub read_error: Option<CodecError>,
    pub domain_error: Option<DatasetError>,
    /// Dataset as reloaded from disk (empty if the read failed).
    pub dataset: Dataset,
    pub analyses: Vec<AnalyzerOutcome>,
}

impl PipelineOutcome {
    pub fn is_degraded(&self) -> bool {
        self.write_error.is_some() || self.read_error.is_some()
    }
}

/// Coordinator tying a run config to the analyzers it should run.
pub struct PipelineRunner<'a> {
    pub config: &'a RunConfig,
    pub registry: &'a AnalyzerRegistry,
}

impl<'a> PipelineRunner<'a> {
    /// Full run over `config.data_path`.
    pub fn run(&self) -> Result<PipelineOutcome, PipelineError> {
        let (mut rng, seed) = generator::seeded_rng(self.config.seed);
        info!("Random source seeded with {seed}");

        let generated = generator::generate(self.config.length, DOMAIN_SIZE, &mut rng)?;
        let path = self.config.data_path.as_path();

        let write_error = codec::write(&generated, path).err();
        if let Some(e) = &write_error {
            error!("{e}");
        }

        let (dataset, read_error) = match codec::read(path) {
            Ok(dataset) => (dataset, None),
            Err(e) => {
                error!("{e}");
                (Dataset::empty(), Some(e))
            }
        };

        let domain_error = dataset.check_domain(DOMAIN_SIZE).err();
        if let Some(e) = &domain_error {
            warn!("{e}");
        }

        let analyses = self.analyze(&dataset, &mut rng);

        Ok(PipelineOutcome {
            seed,
            generated: generated.len(),
            write_error,
            read_error,
            domain_error,
            dataset,
            analyses,
        })
    }

    /// Generate and persist a dataset without analyzing it.
    pub fn generate_file(&self) -> Result<(Dataset, u64), PipelineError> {
        let (mut rng, seed) = generator::seeded_rng(self.config.seed);
        info!("Random source seeded with {seed}");
        let dataset = generator::generate(self.config.length, DOMAIN_SIZE, &mut rng)?;
        codec::write(&dataset, &self.config.data_path)?;
        Ok((dataset, seed))
    }

    /// Analyze an existing data file; a read failure is returned to the caller.
    pub fn analyze_file(&self, path: &Path) -> Result<Vec<AnalyzerOutcome>, PipelineError> {
        let dataset = codec::read(path)?;
        if let Err(e) = dataset.check_domain(DOMAIN_SIZE) {
            warn!("{e}");
        }
        let (mut rng, seed) = generator::seeded_rng(self.config.seed);
        info!("Random source seeded with {seed}");
        Ok(self.analyze(&dataset, &mut rng))
    }

    /// Run every registered analyzer in order over `dataset`.
    pub fn analyze(&self, dataset: &Dataset, rng: &mut dyn RngCore) -> Vec<AnalyzerOutcome> {
        self.registry
            .iter()
            .map(|analyzer| {
                let result = analyzer.analyze(dataset, &mut *rng);
                if let Err(e) = &result {
                    warn!("Analyzer '{}' failed: {e}", analyzer.name());
                }
                AnalyzerOutcome { name: analyzer.name(), result }
            })
            .collect()
    }
}
