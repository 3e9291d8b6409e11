// File opening sample, chained with bind

use std::io::Write;

use either_core::left;
use either_samples::{check_path, first_line, read_first_line};
use pretty_assertions::assert_eq;
use tempfile::{tempdir, NamedTempFile};

#[test]
fn test_first_line_of_existing_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "first").unwrap();
    writeln!(file, "second").unwrap();

    let path = file.path().to_str().unwrap();
    assert_eq!(first_line(path).into_right(), Some("first".to_string()));
}

#[test]
fn test_empty_file() {
    let file = NamedTempFile::new().unwrap();
    let path = file.path().to_str().unwrap();
    assert_eq!(first_line(path), left("File is empty".to_string()));
}

#[test]
fn test_missing_file_short_circuits() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("input1.txt");
    let missing = missing.to_str().unwrap();

    let err = first_line(missing).into_left().unwrap();
    assert_eq!(err, format!("File with path {} doesn't exist", missing));
}

#[test]
fn test_directory_is_not_readable_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().to_str().unwrap();
    let err = check_path(path).into_left().unwrap();
    assert!(err.ends_with("doesn't point to a readable file"), "{}", err);
}

#[test]
fn test_read_first_line_directly() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "no trailing newline").unwrap();
    assert_eq!(
        read_first_line(file.path()).into_right(),
        Some("no trailing newline".to_string())
    );
}
