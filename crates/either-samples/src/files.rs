//! Reading the first line of a file, with every failure reported as a left
//! string instead of an `io::Error`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use either_core::algebra::bind;
use either_core::{left, right, Either};

/// Checks that `s` names an existing, readable regular file.
pub fn check_path(s: &str) -> Either<String, PathBuf> {
    let path = PathBuf::from(s);
    if !path.exists() {
        return left(format!("File with path {} doesn't exist", path.display()));
    }
    if path.is_file() && File::open(&path).is_ok() {
        right(path)
    } else {
        left(format!(
            "Path {} doesn't point to a readable file",
            path.display()
        ))
    }
}

/// Reads the first line of a file that [`check_path`] accepted.
pub fn read_first_line(path: &Path) -> Either<String, String> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => return left(format!("Cannot read {}. Got error {}", path.display(), err)),
    };
    match BufReader::new(file).lines().next() {
        Some(Ok(line)) => right(line),
        Some(Err(err)) => left(format!("Cannot read {}. Got error {}", path.display(), err)),
        None => left("File is empty".to_string()),
    }
}

/// [`check_path`] followed by [`read_first_line`].
pub fn first_line(s: &str) -> Either<String, String> {
    bind(check_path(s), |path| read_first_line(&path))
}
