//! loglog-chart - van Emde Boas tree benchmark chart
//!
//! Plots measured insert and successor latencies against log2(log2(U)) so the
//! expected O(log log U) trend can be checked by eye.
//!
//! ```no_run
//! let figure = loglog_chart::render(&[4, 16, 256], &[35.0, 41.0, 48.0], &[20.0, 26.0, 31.0])?;
//! figure.export(std::path::Path::new("veb.svg"))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod charts;
pub mod data;
pub mod gui;

pub use charts::{
    log2_log2, render, ChartRenderer, ExportFormat, Figure, FigureStyle, PresentationError,
    Series,
};
pub use data::{DataLoader, DataSet, InvalidInputError, LoaderError};
