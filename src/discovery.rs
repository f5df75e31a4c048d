//! Locates fixture files on disk.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::errors::SpecError;

/// Recursively scans a directory for `.txt` fixture files.
///
/// The returned list is sorted to ensure deterministic execution order.
pub fn discover_spec_files<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>, SpecError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root.as_ref()) {
        let entry = entry.map_err(|e| SpecError::Io {
            path: root.as_ref().display().to_string(),
            source: e.into(),
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if !is_spec_file(path) {
            continue;
        }

        files.push(path.to_path_buf());
    }
    files.sort();
    Ok(files)
}

/// Returns true if the given path has a .txt extension.
fn is_spec_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "txt")
}
