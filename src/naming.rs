//! Output filename construction.
//!
//! Resized files keep the input's name and extension with a configurable
//! suffix spliced in before the extension: `photo.jpg` + `_resized` →
//! `photo_resized.jpg`. The extension is preserved verbatim, so the output
//! stays in the input's format (the codec maps unknown extensions to JPEG).

use std::path::{Path, PathBuf};

/// Build the output path for an input file: `<dir>/<stem><suffix>.<ext>`.
pub fn output_path(output_dir: &Path, input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    match input.extension() {
        Some(ext) => output_dir.join(format!("{stem}{suffix}.{}", ext.to_string_lossy())),
        None => output_dir.join(format!("{stem}{suffix}")),
    }
}
