//! CLI output formatting.
//!
//! All formatting is isolated here as pure functions returning strings;
//! `main` owns the actual printing. Each file gets a `[i/n]` header line
//! from its `Started` event and an indented result line from `Completed` or
//! `Failed`:
//!
//! ```text
//! Found 3 image(s) to process
//! Target size: 100.0 KB
//! Quality: 85
//! ---
//! [1/3] dawn.jpg
//!     1037x691, 98.4 KB
//! [2/3] mountains.jpg
//!     640x480, 101.2 KB (target size not met)
//! [3/3] broken.jpg
//!     error: unsupported image: decode failed: ...
//! ---
//! Processing complete: 2 succeeded, 1 failed
//! ```

use crate::batch::{BatchSummary, JobEvent};
use crate::sizing::ResizeRequest;
use std::path::Path;

/// Human-readable byte size: `512 B`, `94.2 KB`, `1.5 MB`.
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = 1024.0 * 1024.0;
    let b = bytes as f64;
    if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{bytes} B")
    }
}

/// Header lines describing the job before processing starts.
pub fn format_job_header(total: usize, request: &ResizeRequest) -> Vec<String> {
    let mut lines = vec![format!("Found {total} image(s) to process")];
    match *request {
        ResizeRequest::FixedDimensions {
            width,
            height,
            preserve_aspect,
            quality,
        } => {
            lines.push(format!("Target dimensions: {width}x{height} pixels"));
            lines.push(format!(
                "Preserving aspect ratio: {}",
                if preserve_aspect { "yes" } else { "no" }
            ));
            lines.push(format!("Quality: {quality}"));
        }
        ResizeRequest::TargetByteSize {
            max_bytes, quality, ..
        } => {
            lines.push(format!("Target size: {}", format_size(max_bytes)));
            lines.push(format!("Quality: {quality}"));
        }
    }
    lines.push("---".to_string());
    lines
}

/// One display line per progress event.
pub fn format_job_event(event: &JobEvent) -> String {
    match event {
        JobEvent::Started {
            index,
            total,
            filename,
        } => format!("[{}/{}] {}", index + 1, total, filename),
        JobEvent::Completed {
            width,
            height,
            bytes,
            target_met,
            ..
        } => {
            let note = if *target_met {
                ""
            } else {
                " (target size not met)"
            };
            format!("    {width}x{height}, {}{note}", format_size(*bytes))
        }
        JobEvent::Failed { reason, .. } => format!("    error: {reason}"),
    }
}

/// Closing lines after the batch finishes.
pub fn format_summary(summary: &BatchSummary, output_dir: &Path) -> Vec<String> {
    let mut lines = vec![
        "---".to_string(),
        format!(
            "Processing complete: {} succeeded, {} failed",
            summary.succeeded, summary.failed
        ),
    ];
    if summary.succeeded > 0 {
        lines.push(format!("Resized images saved to: {}", output_dir.display()));
    }
    lines
}
