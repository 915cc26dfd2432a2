//! Output root and per-run directory management.
//!
//! Layout: `<root>/<YYYYMMDD-HHMMSS>/`. Creation is idempotent and nothing is
//! ever removed; old runs accumulate.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunDirError {
    #[error("Failed to create directory {}: {source}", .path.display())]
    Create { path: PathBuf, source: io::Error },
    #[error("Failed to list directory {}: {source}", .path.display())]
    List { path: PathBuf, source: io::Error },
}

/// Creates the output root (recursively) and the run directory beneath it,
/// returning the run directory path.
pub fn create_run_dir(root: &Path, name: &str) -> Result<PathBuf, RunDirError> {
    std::fs::create_dir_all(root).map_err(|source| RunDirError::Create {
        path: root.to_path_buf(),
        source,
    })?;
    let run_dir = root.join(name);
    std::fs::create_dir_all(&run_dir).map_err(|source| RunDirError::Create {
        path: run_dir.clone(),
        source,
    })?;
    tracing::debug!("Run directory ready: {}", run_dir.display());
    Ok(run_dir)
}

/// Names of every entry in `dir`, sorted. Entries are not filtered by type
/// or extension.
pub fn list_entries(dir: &Path) -> Result<Vec<String>, RunDirError> {
    let to_err = |source: io::Error| RunDirError::List {
        path: dir.to_path_buf(),
        source,
    };
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(to_err)? {
        let entry = entry.map_err(to_err)?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_root_and_run_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("nested").join("output");
        let run_dir = create_run_dir(&root, "20241018-090507").unwrap();
        assert!(run_dir.is_dir());
        assert_eq!(run_dir, root.join("20241018-090507"));
    }

    #[test]
    fn create_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let first = create_run_dir(tmp.path(), "20241018-090507").unwrap();
        std::fs::write(first.join("AAPL.csv"), "Date\n").unwrap();
        let second = create_run_dir(tmp.path(), "20241018-090507").unwrap();
        assert_eq!(first, second);
        assert!(second.join("AAPL.csv").exists());
    }

    #[test]
    fn create_under_file_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("not-a-dir");
        std::fs::write(&file, "x").unwrap();
        let result = create_run_dir(&file, "20241018-090507");
        assert!(matches!(result, Err(RunDirError::Create { .. })));
    }

    #[test]
    fn list_entries_is_sorted_and_unfiltered() {
        let tmp = tempfile::tempdir().unwrap();
        for name in ["MSFT.csv", "AAPL.csv", ".DS_Store"] {
            std::fs::write(tmp.path().join(name), "").unwrap();
        }
        let names = list_entries(tmp.path()).unwrap();
        assert_eq!(names, vec![".DS_Store", "AAPL.csv", "MSFT.csv"]);
    }

    #[test]
    fn list_missing_dir_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let result = list_entries(&tmp.path().join("gone"));
        assert!(matches!(result, Err(RunDirError::List { .. })));
    }
}
