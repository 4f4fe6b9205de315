use loglog_chart::data::{INSERT_COLUMN, SIZE_COLUMN, SUCCESSOR_COLUMN};
use loglog_chart::{DataLoader, InvalidInputError, LoaderError};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

#[test]
fn csv_columns_are_read_by_name() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_file(
        &dir,
        "results.csv",
        "successor_ns,size,note,insert_ns\n7.5,4,warm,10.25\n8,16,warm,12\n9,256,cold,14.5\n",
    );

    let dataset = DataLoader::load(&path).expect("load csv");
    assert_eq!(dataset.sizes, vec![4, 16, 256]);
    assert_eq!(dataset.insert_times, vec![10.25, 12.0, 14.5]);
    assert_eq!(dataset.successor_times, vec![7.5, 8.0, 9.0]);
}

#[test]
fn csv_without_successor_column_is_rejected() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_file(&dir, "results.csv", "size,insert_ns\n4,10\n16,12\n");

    match DataLoader::load(&path) {
        Err(LoaderError::MissingColumn(column)) => assert_eq!(column, SUCCESSOR_COLUMN),
        other => panic!("expected missing column, got {:?}", other),
    }
}

#[test]
fn csv_with_empty_cell_reports_row() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_file(
        &dir,
        "results.csv",
        "size,insert_ns,successor_ns\n4,10.5,7\n16,,8\n",
    );

    match DataLoader::load(&path) {
        Err(LoaderError::NullValue { column, row }) => {
            assert_eq!(column, INSERT_COLUMN);
            assert_eq!(row, 1);
        }
        other => panic!("expected null value, got {:?}", other),
    }
}

#[test]
fn csv_with_fractional_size_is_rejected_not_truncated() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_file(
        &dir,
        "results.csv",
        "size,insert_ns,successor_ns\n4.9,10,7\n16.5,12,8\n",
    );

    match DataLoader::load(&path) {
        Err(LoaderError::InvalidSize { column, row, value }) => {
            assert_eq!(column, SIZE_COLUMN);
            assert_eq!(row, 0);
            assert_eq!(value, 4.9);
        }
        other => panic!("expected invalid size, got {:?}", other),
    }
}

#[test]
fn csv_with_whole_float_sizes_loads() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_file(
        &dir,
        "results.csv",
        "size,insert_ns,successor_ns\n4.0,10,7\n16.0,12,8\n",
    );

    let dataset = DataLoader::load(&path).expect("load csv");
    assert_eq!(dataset.sizes, vec![4, 16]);
}

#[test]
fn csv_with_size_one_fails_validation() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_file(&dir, "results.csv", "size,insert_ns,successor_ns\n1,10,7\n");

    let err = DataLoader::load(&path).unwrap_err();
    assert!(matches!(
        err,
        LoaderError::Invalid(InvalidInputError::SizeOutOfDomain { index: 0, size: 1 })
    ));
}

#[test]
fn json_dataset_loads_and_validates() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_file(
        &dir,
        "results.JSON",
        r#"{"sizes": [4, 16], "insert_times": [10.0, 12.0], "successor_times": [7.0, 8.0]}"#,
    );

    let dataset = DataLoader::load(&path).expect("load json");
    assert_eq!(dataset.len(), 2);

    let mismatched = write_file(
        &dir,
        "short.json",
        r#"{"sizes": [4, 16], "insert_times": [10.0], "successor_times": [7.0, 8.0]}"#,
    );
    let err = DataLoader::load(&mismatched).unwrap_err();
    assert!(matches!(
        err,
        LoaderError::Invalid(InvalidInputError::LengthMismatch { .. })
    ));
}

#[test]
fn missing_json_file_is_an_io_error() {
    let dir = TempDir::new().expect("tempdir");
    let err = DataLoader::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, LoaderError::Io { .. }));
}

#[test]
fn unknown_extension_is_rejected() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_file(&dir, "results.txt", "size insert successor\n");

    let err = DataLoader::load(&path).unwrap_err();
    assert!(matches!(err, LoaderError::UnsupportedFormat(_)));
}
