//! Figure Model
//! The value produced by the renderer: labels, style and the two measured series.

use serde::{Deserialize, Serialize};

/// Fraction of the data span added on each side of an axis.
pub const RANGE_PADDING: f64 = 0.05;

/// RGB color shared by the static exporter and the interactive viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl SeriesColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Primary series color.
pub const PRIMARY_COLOR: SeriesColor = SeriesColor::rgb(52, 152, 219); // Blue
/// Secondary series color.
pub const SECONDARY_COLOR: SeriesColor = SeriesColor::rgb(231, 76, 60); // Red

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineKind {
    Solid,
    Dashed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Marker {
    Circle,
}

/// Size and typography of a figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureStyle {
    /// Pixel width of exported images and initial window width.
    pub width: u32,
    pub height: u32,
    pub title_font_size: u32,
    pub label_font_size: u32,
    /// Marker diameter in pixels.
    pub marker_size: u32,
    pub line_width: u32,
}

impl Default for FigureStyle {
    fn default() -> Self {
        // 10x6 inches at 100 dpi
        Self {
            width: 1000,
            height: 600,
            title_font_size: 14,
            label_font_size: 12,
            marker_size: 8,
            line_width: 2,
        }
    }
}

impl FigureStyle {
    pub fn marker_radius(&self) -> u32 {
        (self.marker_size / 2).max(1)
    }
}

/// One named curve. Points keep the order of the input sequences.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    name: String,
    color: SeriesColor,
    line: LineKind,
    marker: Marker,
    points: Vec<(f64, f64)>,
}

impl Series {
    pub(crate) fn new(
        name: impl Into<String>,
        color: SeriesColor,
        line: LineKind,
        points: Vec<(f64, f64)>,
    ) -> Self {
        Self {
            name: name.into(),
            color,
            line,
            marker: Marker::Circle,
            points,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> SeriesColor {
        self.color
    }

    pub fn line(&self) -> LineKind {
        self.line
    }

    pub fn marker(&self) -> Marker {
        self.marker
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// A rendered chart, owned by whoever called the renderer.
///
/// Nothing is drawn to screen or disk until the owner calls
/// [`Figure::show`], [`Figure::export`] or one of the in-memory encoders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    title: String,
    x_label: String,
    y_label: String,
    grid: bool,
    style: FigureStyle,
    series: Vec<Series>,
}

impl Figure {
    pub(crate) fn new(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
        style: FigureStyle,
        series: Vec<Series>,
    ) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            grid: true,
            style,
            series,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    pub fn y_label(&self) -> &str {
        &self.y_label
    }

    pub fn grid(&self) -> bool {
        self.grid
    }

    pub fn style(&self) -> &FigureStyle {
        &self.style
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// The shared transformed x-values, in input order.
    pub fn x_values(&self) -> Vec<f64> {
        self.series
            .first()
            .map(|s| s.points.iter().map(|&(x, _)| x).collect())
            .unwrap_or_default()
    }

    /// Padded x-axis range covering every series.
    pub fn x_range(&self) -> (f64, f64) {
        padded_range(self.series.iter().flat_map(|s| s.points.iter().map(|&(x, _)| x)))
    }

    /// Padded y-axis range covering every series and zero.
    pub fn y_range(&self) -> (f64, f64) {
        padded_range(
            self.series
                .iter()
                .flat_map(|s| s.points.iter().map(|&(_, y)| y))
                .chain(std::iter::once(0.0)),
        )
    }
}

fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }

    let span = max - min;
    let pad = if span > 0.0 { span * RANGE_PADDING } else { 0.5 };
    (min - pad, max + pad)
}
