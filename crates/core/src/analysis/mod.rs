//! Analyzers over a reloaded dataset.
//!
//! Every analyzer implements the single-method [`Analyzer`] capability. They
//! receive a shared view of the dataset, copy it before any sorting, and
//! produce an [`AnalysisReport`] that is printed and discarded by the caller.

use std::fmt;
use std::str::FromStr;

use rand::RngCore;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Dataset, DOMAIN_SIZE};

pub mod duplicates;
pub mod missing;
pub mod search;
pub mod statistics;

pub use duplicates::DuplicateAnalyzer;
pub use missing::MissingAnalyzer;
pub use search::{RandomSearchAnalyzer, DEFAULT_PROBES};
pub use statistics::{describe, StatisticsAnalyzer, StatisticsReport};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Dataset is empty; minimum, maximum, median and mode are undefined")]
    EmptyDataset,
    #[error("Unknown analyzer '{0}'. Allowed: statistics, duplicates, missing, search")]
    UnknownAnalyzer(String),
}

/// Result of a single analyzer invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnalysisReport {
    Statistics(StatisticsReport),
    Duplicates { duplicated: usize },
    Missing { missing: usize },
    Search { hits: usize, probes: usize },
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisReport::Statistics(stats) => fmt::Display::fmt(stats, f),
            AnalysisReport::Duplicates { duplicated } => {
                write!(f, "There were {duplicated} duplicated values")
            }
            AnalysisReport::Missing { missing } => write!(f, "There are {missing} missing values"),
            AnalysisReport::Search { hits, .. } => {
                write!(f, "There were {hits} random values found")
            }
        }
    }
}

/// Capability implemented by every analysis.
///
/// `rng` is the run's shared random source; deterministic analyzers ignore it.
pub trait Analyzer {
    fn analyze(
        &self,
        dataset: &Dataset,
        rng: &mut dyn RngCore,
    ) -> Result<AnalysisReport, AnalysisError>;
    fn name(&self) -> &'static str;
}

/// Tag naming each built-in analyzer, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalyzerKind {
    Statistics,
    Duplicates,
    Missing,
    Search,
}

impl AnalyzerKind {
    /// Fixed report order.
    pub const ALL: [AnalyzerKind; 4] = [
        AnalyzerKind::Statistics,
        AnalyzerKind::Duplicates,
        AnalyzerKind::Missing,
        AnalyzerKind::Search,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalyzerKind::Statistics => "statistics",
            AnalyzerKind::Duplicates => "duplicates",
            AnalyzerKind::Missing => "missing",
            AnalyzerKind::Search => "search",
        }
    }

    /// Build the analyzer for this kind over the fixed domain.
    pub fn analyzer(self, probes: usize) -> Box<dyn Analyzer> {
        match self {
            AnalyzerKind::Statistics => Box::new(StatisticsAnalyzer),
            AnalyzerKind::Duplicates => Box::new(DuplicateAnalyzer),
            AnalyzerKind::Missing => Box::new(MissingAnalyzer::new(DOMAIN_SIZE)),
            AnalyzerKind::Search => Box::new(RandomSearchAnalyzer::new(probes, DOMAIN_SIZE)),
        }
    }
}

impl FromStr for AnalyzerKind {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "statistics" => Ok(AnalyzerKind::Statistics),
            "duplicates" => Ok(AnalyzerKind::Duplicates),
            "missing" => Ok(AnalyzerKind::Missing),
            "search" => Ok(AnalyzerKind::Search),
            other => Err(AnalysisError::UnknownAnalyzer(other.to_string())),
        }
    }
}

impl fmt::Display for AnalyzerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered collection of analyzers; runs happen in registration order.
#[derive(Default)]
pub struct AnalyzerRegistry {
    analyzers: Vec<Box<dyn Analyzer>>,
}

impl AnalyzerRegistry {
    pub fn new() -> Self {
        Self { analyzers: Vec::new() }
    }

    pub fn register<A: Analyzer + 'static>(&mut self, analyzer: A) -> &mut Self {
        self.register_boxed(Box::new(analyzer))
    }

    /// Register an analyzer, replacing (in place) any existing one with the same name.
    pub fn register_boxed(&mut self, analyzer: Box<dyn Analyzer>) -> &mut Self {
        match self.analyzers.iter().position(|a| a.name() == analyzer.name()) {
            Some(idx) => self.analyzers[idx] = analyzer,
            None => self.analyzers.push(analyzer),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&dyn Analyzer> {
        self.analyzers.iter().find(|a| a.name() == name).map(|a| &**a)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.analyzers.iter().map(|a| a.name()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Analyzer> {
        self.analyzers.iter().map(|a| &**a)
    }

    pub fn len(&self) -> usize {
        self.analyzers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.analyzers.is_empty()
    }

    /// Registry holding only `kinds`, still in the fixed report order.
    pub fn from_kinds(kinds: &[AnalyzerKind], probes: usize) -> Self {
        let mut registry = Self::new();
        for kind in AnalyzerKind::ALL.iter().filter(|k| kinds.contains(*k)) {
            registry.register_boxed(kind.analyzer(probes));
        }
        registry
    }
}

/// Registry with all four analyzers: statistics, duplicates, missing, search.
pub fn default_analyzer_registry(probes: usize) -> AnalyzerRegistry {
    AnalyzerRegistry::from_kinds(&AnalyzerKind::ALL, probes)
}
