//! Input collection.
//!
//! Resolves the user's input path into an ordered list of image files:
//! a single file is taken as-is (whatever its extension — the decode step
//! will reject it if it isn't an image), a directory is walked and filtered
//! to known image extensions. Sorted by path so batch order is deterministic
//! across filesystems.

use crate::sizing::INPUT_EXTENSIONS;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("input path not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to read directory entry: {0}")]
    Walk(#[from] walkdir::Error),
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            INPUT_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Collect input image files from a file or directory path.
pub fn collect_inputs(input: &Path, recursive: bool) -> Result<Vec<PathBuf>, ScanError> {
    if !input.exists() {
        return Err(ScanError::NotFound(input.to_path_buf()));
    }
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut files = Vec::new();
    for entry in WalkDir::new(input).max_depth(max_depth).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() && has_image_extension(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
