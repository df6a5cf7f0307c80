//! Random dataset generation.
//!
//! The pipeline owns a single random source for the whole run. Without an
//! explicit seed it is seeded from the wall clock so each run differs; the
//! chosen seed is handed back so a run can be replayed with `--seed`.

use chrono::Utc;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::model::Dataset;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Domain size must be positive, got {0}")]
    EmptyDomain(i32),
}

/// Build the run's random source, returning it together with the seed used.
pub fn seeded_rng(seed: Option<u64>) -> (StdRng, u64) {
    let seed = seed.unwrap_or_else(clock_seed);
    (StdRng::seed_from_u64(seed), seed)
}

fn clock_seed() -> u64 {
    let now = Utc::now();
    now.timestamp_nanos_opt().unwrap_or_else(|| now.timestamp()) as u64
}

/// Draw `length` values uniformly from `[0, domain_size)`.
pub fn generate<R: Rng + ?Sized>(
    length: usize,
    domain_size: i32,
    rng: &mut R,
) -> Result<Dataset, GeneratorError> {
    if domain_size <= 0 {
        return Err(GeneratorError::EmptyDomain(domain_size));
    }
    debug!("Generating {length} values in [0, {domain_size})");
    Ok((0..length).map(|_| rng.gen_range(0..domain_size)).collect())
}
