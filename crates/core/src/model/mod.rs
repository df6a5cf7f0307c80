//! Dataset model shared by the generator, the codec and the analyzers.

use std::collections::HashSet;

use thiserror::Error;

/// Exclusive upper bound on generated and analyzed values.
pub const DOMAIN_SIZE: i32 = 1000;

/// Number of values generated by a default run.
pub const DEFAULT_LENGTH: usize = 1000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatasetError {
    #[error("Value {value} at index {index} lies outside the domain [0, {domain})")]
    OutOfDomain { index: usize, value: i32, domain: i32 },
}

/// Ordered sequence of integers under analysis.
///
/// The dataset is owned by whichever component currently holds it. Analyzers
/// only ever see a shared reference and copy the values before sorting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    values: Vec<i32>,
}

impl Dataset {
    pub fn new(values: Vec<i32>) -> Self {
        Self { values }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[i32] {
        &self.values
    }

    /// Private copy of the values, for analyzers that sort in place.
    pub fn to_vec(&self) -> Vec<i32> {
        self.values.clone()
    }

    /// Number of distinct values present.
    pub fn distinct_count(&self) -> usize {
        self.values.iter().collect::<HashSet<_>>().len()
    }

    /// Verify every value lies in `[0, domain)`, reporting the first offender.
    pub fn check_domain(&self, domain: i32) -> Result<(), DatasetError> {
        match self.values.iter().position(|&v| v < 0 || v >= domain) {
            Some(index) => {
                Err(DatasetError::OutOfDomain { index, value: self.values[index], domain })
            }
            None => Ok(()),
        }
    }
}

impl From<Vec<i32>> for Dataset {
    fn from(values: Vec<i32>) -> Self {
        Self::new(values)
    }
}

impl FromIterator<i32> for Dataset {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
