//! Chart Plotter Module
//! Draws a [`Figure`] interactively using egui_plot.

use crate::charts::figure::{Figure, LineKind, SeriesColor};
use egui::Color32;
use egui_plot::{Corner, Legend, Line, LineStyle, MarkerShape, Plot, PlotPoints, Points};

/// Dash length of dashed series, in screen points.
const DASH_LENGTH: f32 = 10.0;

impl From<SeriesColor> for Color32 {
    fn from(color: SeriesColor) -> Self {
        Color32::from_rgb(color.r, color.g, color.b)
    }
}

/// Draws figures into an egui `Ui`. Pan, zoom and legend toggling come from egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    pub fn line_style(kind: LineKind) -> LineStyle {
        match kind {
            LineKind::Solid => LineStyle::Solid,
            LineKind::Dashed => LineStyle::Dashed {
                length: DASH_LENGTH,
            },
        }
    }

    /// Draw every series of `figure` as a line plus circle markers.
    /// X-axis: log2(log2(U)), Y-axis: time in ns
    pub fn draw_figure(ui: &mut egui::Ui, figure: &Figure) {
        let style = figure.style();
        let marker_radius = style.marker_radius() as f32;
        let line_width = style.line_width as f32;

        Plot::new("loglog_chart")
            .legend(Legend::default().position(Corner::LeftTop))
            .show_grid(figure.grid())
            .x_axis_label(figure.x_label())
            .y_axis_label(figure.y_label())
            .show(ui, |plot_ui| {
                for series in figure.series() {
                    let color = Color32::from(series.color());
                    let points: Vec<[f64; 2]> =
                        series.points().iter().map(|&(x, y)| [x, y]).collect();

                    plot_ui.line(
                        Line::new(PlotPoints::from_iter(points.iter().copied()))
                            .color(color)
                            .width(line_width)
                            .style(Self::line_style(series.line()))
                            .name(series.name()),
                    );

                    // Same name as the line so the legend toggles both together
                    plot_ui.points(
                        Points::new(PlotPoints::from_iter(points.iter().copied()))
                            .shape(MarkerShape::Circle)
                            .filled(true)
                            .radius(marker_radius)
                            .color(color)
                            .name(series.name()),
                    );
                }
            });
    }
}
