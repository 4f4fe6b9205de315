//! Static Figure Export
//! Draws a [`Figure`] with plotters into PNG bytes, PNG files or SVG files.

use crate::charts::figure::{Figure, LineKind, SeriesColor};
use image::{ImageFormat, RgbImage};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::fmt;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

const FONT: &str = "sans-serif";
const GRID_COLOR: RGBColor = RGBColor(220, 220, 220);
const DASH_LENGTH: u32 = 10;
const DASH_SPACING: u32 = 6;

/// The figure could not be shown or written.
#[derive(Error, Debug)]
pub enum PresentationError {
    #[error("Failed to open figure window: {0}")]
    Window(#[from] eframe::Error),
    #[error("Failed to draw figure: {0}")]
    Draw(String),
    #[error("Failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Unsupported export format: {0} (expected .png or .svg)")]
    UnsupportedFormat(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Svg,
}

impl ExportFormat {
    /// Pick the format from the file extension, ignoring case.
    pub fn from_path(path: &Path) -> Result<Self, PresentationError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("png") => Ok(ExportFormat::Png),
            Some("svg") => Ok(ExportFormat::Svg),
            _ => Err(PresentationError::UnsupportedFormat(
                path.display().to_string(),
            )),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Png => write!(f, "PNG"),
            ExportFormat::Svg => write!(f, "SVG"),
        }
    }
}

impl From<SeriesColor> for RGBColor {
    fn from(color: SeriesColor) -> Self {
        RGBColor(color.r, color.g, color.b)
    }
}

impl Figure {
    /// Render to an in-memory PNG image of `style().width` x `style().height` pixels.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>, PresentationError> {
        let (width, height) = self.pixel_size()?;
        let mut buffer = vec![0u8; width as usize * height as usize * 3];

        draw_figure(
            self,
            BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area(),
        )?;

        let image = RgbImage::from_raw(width, height, buffer).ok_or_else(|| {
            PresentationError::Draw("pixel buffer does not match figure size".to_string())
        })?;
        let mut bytes = Vec::new();
        image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        debug!(bytes = bytes.len(), "encoded figure as png");
        Ok(bytes)
    }

    /// Render to an SVG document.
    pub fn to_svg_string(&self) -> Result<String, PresentationError> {
        let size = self.pixel_size()?;
        let mut svg = String::new();
        draw_figure(self, SVGBackend::with_string(&mut svg, size).into_drawing_area())?;
        Ok(svg)
    }

    /// Write the figure to `path`. The extension selects PNG or SVG.
    pub fn export(&self, path: &Path) -> Result<ExportFormat, PresentationError> {
        let format = ExportFormat::from_path(path)?;
        let bytes = match format {
            ExportFormat::Png => self.to_png_bytes()?,
            ExportFormat::Svg => self.to_svg_string()?.into_bytes(),
        };

        std::fs::write(path, bytes).map_err(|source| PresentationError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), %format, "exported figure");
        Ok(format)
    }

    fn pixel_size(&self) -> Result<(u32, u32), PresentationError> {
        let style = self.style();
        if style.width == 0 || style.height == 0 {
            return Err(PresentationError::Draw(format!(
                "figure size {}x{} has no pixels",
                style.width, style.height
            )));
        }
        Ok((style.width, style.height))
    }
}

fn draw_error<E>(err: DrawingAreaErrorKind<E>) -> PresentationError
where
    E: std::error::Error + Send + Sync,
{
    PresentationError::Draw(err.to_string())
}

/// Draw every element of the figure onto `root` and flush it.
fn draw_figure<DB: DrawingBackend>(
    figure: &Figure,
    root: DrawingArea<DB, Shift>,
) -> Result<(), PresentationError> {
    let style = figure.style();
    let (x_min, x_max) = figure.x_range();
    let (y_min, y_max) = figure.y_range();

    root.fill(&WHITE).map_err(draw_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(figure.title(), (FONT, style.title_font_size + 6))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(draw_error)?;

    {
        let mut mesh = chart.configure_mesh();
        mesh.x_desc(figure.x_label())
            .y_desc(figure.y_label())
            .axis_desc_style((FONT, style.label_font_size + 4))
            .label_style((FONT, style.label_font_size))
            .bold_line_style(GRID_COLOR)
            .light_line_style(WHITE);
        if !figure.grid() {
            mesh.disable_mesh();
        }
        mesh.draw().map_err(draw_error)?;
    }

    let radius = style.marker_radius();
    for series in figure.series() {
        let color = RGBColor::from(series.color());
        let stroke = color.stroke_width(style.line_width);
        let points = series.points().iter().copied();

        let anno = match series.line() {
            LineKind::Solid => chart.draw_series(LineSeries::new(points, stroke)),
            LineKind::Dashed => chart.draw_series(DashedLineSeries::new(
                points,
                DASH_LENGTH,
                DASH_SPACING,
                stroke,
            )),
        }
        .map_err(draw_error)?;
        anno.label(series.name())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], stroke));

        chart
            .draw_series(
                series
                    .points()
                    .iter()
                    .map(|&point| Circle::new(point, radius, color.filled())),
            )
            .map_err(draw_error)?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .label_font((FONT, style.label_font_size))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(draw_error)?;

    root.present().map_err(draw_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_extension_case_insensitively() {
        assert_eq!(
            ExportFormat::from_path(Path::new("chart.PNG")).expect("png"),
            ExportFormat::Png
        );
        assert_eq!(
            ExportFormat::from_path(Path::new("out/chart.svg")).expect("svg"),
            ExportFormat::Svg
        );
    }

    #[test]
    fn unknown_or_missing_extension_is_rejected() {
        for name in ["chart.pdf", "chart"] {
            let err = ExportFormat::from_path(Path::new(name)).unwrap_err();
            assert!(matches!(err, PresentationError::UnsupportedFormat(_)));
        }
    }

    #[test]
    fn window_errors_keep_their_source() {
        use std::error::Error as _;

        let cause = std::io::Error::other("no display");
        let err = PresentationError::from(eframe::Error::AppCreation(Box::new(cause)));
        assert!(matches!(err, PresentationError::Window(_)));
        assert!(err.source().is_some());
        assert!(err.to_string().contains("no display"));
    }

    #[test]
    fn series_color_converts_to_plotters_rgb() {
        let color = RGBColor::from(SeriesColor::rgb(1, 2, 3));
        assert_eq!((color.0, color.1, color.2), (1, 2, 3));
    }
}
