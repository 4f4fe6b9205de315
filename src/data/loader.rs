//! Dataset Loader Module
//! Reads benchmark results from CSV (via Polars) or JSON files.

use crate::data::{DataSet, InvalidInputError};
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// CSV column holding the universe size U.
pub const SIZE_COLUMN: &str = "size";
/// CSV column holding the insert time in ns.
pub const INSERT_COLUMN: &str = "insert_ns";
/// CSV column holding the successor time in ns.
pub const SUCCESSOR_COLUMN: &str = "successor_ns";

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Failed to parse JSON dataset: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Missing column '{0}'")]
    MissingColumn(String),
    #[error("Null or out-of-range value in column '{column}' at row {row}")]
    NullValue { column: String, row: usize },
    #[error("Size '{value}' in column '{column}' at row {row} is not a nonnegative integer")]
    InvalidSize {
        column: String,
        row: usize,
        value: f64,
    },
    #[error("Unsupported dataset format: {0}")]
    UnsupportedFormat(String),
    #[error("Invalid dataset: {0}")]
    Invalid(#[from] InvalidInputError),
}

/// Loads a [`DataSet`] from disk. Every loaded dataset is validated.
pub struct DataLoader;

impl DataLoader {
    /// Load a dataset, picking the reader from the file extension.
    pub fn load(path: &Path) -> Result<DataSet, LoaderError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "csv" => Self::load_csv(path),
            "json" => Self::load_json(path),
            _ => Err(LoaderError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Load a CSV file with `size`, `insert_ns` and `successor_ns` columns.
    /// Column order does not matter and extra columns are ignored.
    pub fn load_csv(path: &Path) -> Result<DataSet, LoaderError> {
        let path_str = path.to_string_lossy().to_string();

        let df = LazyCsvReader::new(&path_str)
            .with_infer_schema_length(Some(10000))
            .finish()?
            .collect()?;
        debug!(rows = df.height(), path = %path_str, "read benchmark csv");

        let sizes = Self::u64_column(&df, SIZE_COLUMN)?;
        let insert_times = Self::f64_column(&df, INSERT_COLUMN)?;
        let successor_times = Self::f64_column(&df, SUCCESSOR_COLUMN)?;

        Ok(DataSet::new(sizes, insert_times, successor_times)?)
    }

    /// Load a JSON object with `sizes`, `insert_times` and `successor_times` arrays.
    pub fn load_json(path: &Path) -> Result<DataSet, LoaderError> {
        let text = std::fs::read_to_string(path).map_err(|source| LoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset: DataSet = serde_json::from_str(&text)?;
        debug!(rows = dataset.len(), path = %path.display(), "read benchmark json");

        dataset.validate()?;
        Ok(dataset)
    }

    fn column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column, LoaderError> {
        df.column(name)
            .map_err(|_| LoaderError::MissingColumn(name.to_string()))
    }

    fn f64_column(df: &DataFrame, name: &str) -> Result<Vec<f64>, LoaderError> {
        let casted = Self::column(df, name)?.cast(&DataType::Float64)?;
        let ca = casted.f64()?;

        (0..df.height())
            .map(|row| {
                ca.get(row).ok_or_else(|| LoaderError::NullValue {
                    column: name.to_string(),
                    row,
                })
            })
            .collect()
    }

    fn u64_column(df: &DataFrame, name: &str) -> Result<Vec<u64>, LoaderError> {
        let column = Self::column(df, name)?;
        if !column.dtype().is_integer() {
            return Self::integral_f64_column(df, name);
        }

        // Non-strict cast: negative sizes become null and are reported as such
        let casted = column.cast(&DataType::UInt64)?;
        let ca = casted.u64()?;

        (0..df.height())
            .map(|row| {
                ca.get(row).ok_or_else(|| LoaderError::NullValue {
                    column: name.to_string(),
                    row,
                })
            })
            .collect()
    }

    /// Sizes written as floats (`16.0`) are accepted only when they are whole.
    fn integral_f64_column(df: &DataFrame, name: &str) -> Result<Vec<u64>, LoaderError> {
        Self::f64_column(df, name)?
            .into_iter()
            .enumerate()
            .map(|(row, value)| {
                if value.fract() == 0.0 && value >= 0.0 && value < u64::MAX as f64 {
                    Ok(value as u64)
                } else {
                    Err(LoaderError::InvalidSize {
                        column: name.to_string(),
                        row,
                        value,
                    })
                }
            })
            .collect()
    }
}
