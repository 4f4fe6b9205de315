//! Benchmark Dataset Module
//! Holds the measured series and checks the invariants the chart relies on.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Names used in validation messages.
pub const SIZES: &str = "sizes";
pub const INSERT_TIMES: &str = "insert_times";
pub const SUCCESSOR_TIMES: &str = "successor_times";

/// Rejected input. Raised before anything is drawn.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidInputError {
    #[error("{series} is empty")]
    Empty { series: &'static str },
    #[error(
        "length mismatch: sizes has {sizes} values, insert_times has {insert_times}, \
         successor_times has {successor_times}"
    )]
    LengthMismatch {
        sizes: usize,
        insert_times: usize,
        successor_times: usize,
    },
    #[error("size {size} at index {index} is out of domain (log2(log2(U)) requires U >= 2)")]
    SizeOutOfDomain { index: usize, size: u64 },
    #[error("{series}[{index}] = {value} is not a finite, nonnegative time")]
    InvalidTime {
        series: &'static str,
        index: usize,
        value: f64,
    },
}

/// Measured timings for one benchmark run.
///
/// `sizes[i]` is the universe size U of run `i`; both time vectors are in
/// nanoseconds per operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSet {
    pub sizes: Vec<u64>,
    pub insert_times: Vec<f64>,
    pub successor_times: Vec<f64>,
}

impl DataSet {
    /// Build a dataset, rejecting it if any invariant is violated.
    pub fn new(
        sizes: Vec<u64>,
        insert_times: Vec<f64>,
        successor_times: Vec<f64>,
    ) -> Result<Self, InvalidInputError> {
        let dataset = Self {
            sizes,
            insert_times,
            successor_times,
        };
        dataset.validate()?;
        Ok(dataset)
    }

    pub fn validate(&self) -> Result<(), InvalidInputError> {
        validate_sequences(&self.sizes, &self.insert_times, &self.successor_times)
    }

    /// Number of measurements.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

/// Check the three sequences in order: emptiness, lengths, size domain, times.
pub fn validate_sequences(
    sizes: &[u64],
    insert_times: &[f64],
    successor_times: &[f64],
) -> Result<(), InvalidInputError> {
    for (series, len) in [
        (SIZES, sizes.len()),
        (INSERT_TIMES, insert_times.len()),
        (SUCCESSOR_TIMES, successor_times.len()),
    ] {
        if len == 0 {
            return Err(InvalidInputError::Empty { series });
        }
    }

    if sizes.len() != insert_times.len() || sizes.len() != successor_times.len() {
        return Err(InvalidInputError::LengthMismatch {
            sizes: sizes.len(),
            insert_times: insert_times.len(),
            successor_times: successor_times.len(),
        });
    }

    if let Some((index, &size)) = sizes.iter().enumerate().find(|&(_, &size)| size < 2) {
        return Err(InvalidInputError::SizeOutOfDomain { index, size });
    }

    for (series, times) in [(INSERT_TIMES, insert_times), (SUCCESSOR_TIMES, successor_times)] {
        if let Some((index, &value)) = times
            .iter()
            .enumerate()
            .find(|&(_, &t)| !t.is_finite() || t < 0.0)
        {
            return Err(InvalidInputError::InvalidTime {
                series,
                index,
                value,
            });
        }
    }

    Ok(())
}
