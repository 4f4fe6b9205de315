//! Chart Renderer
//! Turns measured benchmark timings into a [`Figure`] plotted against log2(log2(U)).
//!
//! Layout:
//! 1. Title naming the measured structure
//! 2. Insert times: blue solid line with circle markers
//! 3. Successor times: red dashed line with circle markers
//! 4. Legend, axis labels and grid

use crate::charts::figure::{
    Figure, FigureStyle, LineKind, Series, PRIMARY_COLOR, SECONDARY_COLOR,
};
use crate::data::{validate_sequences, DataSet, InvalidInputError};
use tracing::debug;

pub const TITLE: &str = "Measured Times vs log(log(U)) for VEB Tree Operations";
pub const X_LABEL: &str = "log(log(U))";
pub const Y_LABEL: &str = "Time (ns)";
pub const INSERT_SERIES: &str = "Insert Times (Measured)";
pub const SUCCESSOR_SERIES: &str = "Successor Times (Measured)";

/// Double base-2 logarithm of a universe size. `None` when `size < 2`.
pub fn log2_log2(size: u64) -> Option<f64> {
    (size >= 2).then(|| (size as f64).log2().log2())
}

/// Render with the default style.
pub fn render(
    sizes: &[u64],
    insert_times: &[f64],
    successor_times: &[f64],
) -> Result<Figure, InvalidInputError> {
    ChartRenderer::default().render(sizes, insert_times, successor_times)
}

/// Builds figures. Holds only the style, so a renderer can be reused freely.
#[derive(Debug, Clone, Default)]
pub struct ChartRenderer {
    style: FigureStyle,
}

impl ChartRenderer {
    pub fn new(style: FigureStyle) -> Self {
        Self { style }
    }

    /// Validate the sequences, transform the sizes and build both series.
    ///
    /// Points are kept in input order; unsorted sizes produce a zig-zag line.
    pub fn render(
        &self,
        sizes: &[u64],
        insert_times: &[f64],
        successor_times: &[f64],
    ) -> Result<Figure, InvalidInputError> {
        validate_sequences(sizes, insert_times, successor_times)?;

        let mut xs = Vec::with_capacity(sizes.len());
        for (index, &size) in sizes.iter().enumerate() {
            let x = log2_log2(size).ok_or(InvalidInputError::SizeOutOfDomain { index, size })?;
            xs.push(x);
        }
        debug!(points = xs.len(), "transformed sizes to log2(log2(U))");

        let insert = Series::new(
            INSERT_SERIES,
            PRIMARY_COLOR,
            LineKind::Solid,
            Self::pair(&xs, insert_times),
        );
        let successor = Series::new(
            SUCCESSOR_SERIES,
            SECONDARY_COLOR,
            LineKind::Dashed,
            Self::pair(&xs, successor_times),
        );

        Ok(Figure::new(
            TITLE,
            X_LABEL,
            Y_LABEL,
            self.style.clone(),
            vec![insert, successor],
        ))
    }

    pub fn render_dataset(&self, dataset: &DataSet) -> Result<Figure, InvalidInputError> {
        self.render(
            &dataset.sizes,
            &dataset.insert_times,
            &dataset.successor_times,
        )
    }

    fn pair(xs: &[f64], ys: &[f64]) -> Vec<(f64, f64)> {
        xs.iter().copied().zip(ys.iter().copied()).collect()
    }
}
