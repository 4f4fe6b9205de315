//! loglog-chart - show a benchmark dataset against log(log(U))
//!
//! Usage: `loglog-chart [DATASET]` where DATASET is a `.csv` or `.json` file.
//! Without an argument a file picker is opened.

use anyhow::{Context, Result};
use loglog_chart::{ChartRenderer, DataLoader};
use std::path::PathBuf;
use tracing::{info, warn};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let path = match std::env::args_os().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => pick_dataset().context("no dataset selected")?,
    };

    let dataset = DataLoader::load(&path)
        .inspect_err(|e| warn!(error = %e, "rejected dataset"))
        .with_context(|| format!("failed to load dataset from {}", path.display()))?;
    info!(points = dataset.len(), path = %path.display(), "loaded dataset");

    let figure = ChartRenderer::default().render_dataset(&dataset)?;
    // eframe::Error is not guaranteed Send + Sync, which anyhow requires
    figure
        .show()
        .map_err(|e| anyhow::anyhow!("failed to show figure: {e}"))?;
    Ok(())
}

/// Let the user pick a dataset file
fn pick_dataset() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("Benchmark Results", &["csv", "json"])
        .pick_file()
}
