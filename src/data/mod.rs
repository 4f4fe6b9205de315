//! Data module - benchmark dataset and file loading

mod dataset;
mod loader;

pub use dataset::{
    validate_sequences, DataSet, InvalidInputError, INSERT_TIMES, SIZES, SUCCESSOR_TIMES,
};
pub use loader::{DataLoader, LoaderError, INSERT_COLUMN, SIZE_COLUMN, SUCCESSOR_COLUMN};
