//! Figure Viewer Window
//! Shows one figure with default plot controls and a save button.

use crate::charts::{ChartPlotter, Figure, PresentationError};
use egui::{RichText, TopBottomPanel};
use tracing::{info, warn};

/// Smallest window the plot stays readable in.
const MIN_WINDOW_SIZE: [f32; 2] = [480.0, 320.0];
const DEFAULT_FILE_NAME: &str = "loglog_chart.png";

/// Viewer window for a single figure.
pub struct FigureViewer {
    figure: Figure,
    status: Option<String>,
}

impl FigureViewer {
    pub fn new(_cc: &eframe::CreationContext<'_>, figure: Figure) -> Self {
        Self {
            figure,
            status: None,
        }
    }

    /// Ask for a destination and export the figure there.
    fn handle_save_as(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .add_filter("SVG Image", &["svg"])
            .set_file_name(DEFAULT_FILE_NAME)
            .save_file()
        else {
            return; // User cancelled
        };

        let status = match self.figure.export(&path) {
            Ok(format) => format!("Saved {} to {}", format, path.display()),
            Err(e) => {
                warn!(error = %e, "export from viewer failed");
                format!("Save failed: {}", e)
            }
        };
        self.status = Some(status);
    }
}

impl eframe::App for FigureViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Save As...").clicked() {
                    self.handle_save_as();
                }
                if let Some(status) = &self.status {
                    ui.label(status.as_str());
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let title_size = self.figure.style().title_font_size as f32;
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(self.figure.title()).size(title_size).strong());
            });
            ui.add_space(8.0);
            ChartPlotter::draw_figure(ui, &self.figure);
        });
    }
}

impl Figure {
    /// Open a window showing the figure and block until it is closed.
    ///
    /// There is no headless fallback: without a display this returns
    /// [`PresentationError::Window`].
    pub fn show(self) -> Result<(), PresentationError> {
        let title = self.title().to_string();
        let style = self.style();
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([style.width as f32, style.height as f32])
                .with_min_inner_size(MIN_WINDOW_SIZE)
                .with_title(title.clone()),
            ..Default::default()
        };

        info!(title = %title, "opening figure window");
        eframe::run_native(
            &title,
            options,
            Box::new(|cc| Ok(Box::new(FigureViewer::new(cc, self)))),
        )?;
        info!("figure window closed");
        Ok(())
    }
}
