use loglog_chart::charts::{INSERT_SERIES, SUCCESSOR_SERIES, TITLE, X_LABEL};
use loglog_chart::{render, ChartRenderer, ExportFormat, FigureStyle, PresentationError};
use tempfile::TempDir;

#[test]
fn unsupported_extension_writes_nothing() {
    let dir = TempDir::new().expect("tempdir");
    let figure = render(&[4, 16], &[1.0, 2.0], &[1.0, 2.0]).expect("render");
    let path = dir.path().join("chart.pdf");

    let err = figure.export(&path).unwrap_err();
    assert!(matches!(err, PresentationError::UnsupportedFormat(_)));
    assert!(!path.exists());
}

#[test]
fn export_into_missing_directory_fails() {
    let dir = TempDir::new().expect("tempdir");
    let figure = render(&[4, 16], &[1.0, 2.0], &[1.0, 2.0]).expect("render");
    let path = dir.path().join("missing").join("chart.png");

    // Either drawing or the final write fails; both surface as PresentationError
    assert!(figure.export(&path).is_err());
    assert!(!path.exists());
}

#[test]
fn zero_sized_figure_is_rejected_before_drawing() {
    let style = FigureStyle {
        width: 0,
        ..FigureStyle::default()
    };
    let figure = ChartRenderer::new(style)
        .render(&[4], &[1.0], &[1.0])
        .expect("render");

    assert!(matches!(
        figure.to_png_bytes(),
        Err(PresentationError::Draw(_))
    ));
    assert!(matches!(
        figure.to_svg_string(),
        Err(PresentationError::Draw(_))
    ));
}

/// Text layout needs a system font; hosts without one cannot draw at all.
fn font_unavailable(err: &PresentationError) -> bool {
    matches!(err, PresentationError::Draw(msg) if msg.to_lowercase().contains("font"))
}

#[test]
fn svg_contains_title_legend_and_both_series() {
    let figure = render(&[4, 16, 256], &[10.0, 20.0, 30.0], &[5.0, 6.0, 7.0]).expect("render");

    let svg = match figure.to_svg_string() {
        Ok(svg) => svg,
        Err(err) if font_unavailable(&err) => return,
        Err(err) => panic!("svg export failed: {}", err),
    };
    assert!(svg.contains("<svg"));
    assert!(svg.contains(TITLE));
    assert!(svg.contains(INSERT_SERIES));
    assert!(svg.contains(SUCCESSOR_SERIES));
    assert!(svg.contains(X_LABEL));
}

#[test]
fn png_export_writes_a_png_file() {
    let dir = TempDir::new().expect("tempdir");
    let figure = render(&[4, 16, 256], &[10.0, 20.0, 30.0], &[5.0, 6.0, 7.0]).expect("render");
    let path = dir.path().join("chart.png");

    match figure.export(&path) {
        Ok(format) => assert_eq!(format, ExportFormat::Png),
        Err(err) if font_unavailable(&err) => return,
        Err(err) => panic!("png export failed: {}", err),
    }
    let png = std::fs::read(&path).expect("read png");
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
}
