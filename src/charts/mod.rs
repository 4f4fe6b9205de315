//! Charts module - Figure model, rendering and export

mod export;
mod figure;
mod plotter;
mod renderer;

pub use export::{ExportFormat, PresentationError};
pub use figure::{
    Figure, FigureStyle, LineKind, Marker, Series, SeriesColor, PRIMARY_COLOR, RANGE_PADDING,
    SECONDARY_COLOR,
};
pub use plotter::ChartPlotter;
pub use renderer::{
    log2_log2, render, ChartRenderer, INSERT_SERIES, SUCCESSOR_SERIES, TITLE, X_LABEL, Y_LABEL,
};
