//! Sequential batch processing.
//!
//! Takes a list of input files and one [`ResizeRequest`], and processes each
//! image to completion before the next: read → decode → resize → write.
//! Per-image failures (unreadable file, undecodable image) are reported and
//! the batch continues with the remaining images; only environment-level
//! problems (output directory cannot be created) abort the run.
//!
//! Progress flows through an optional [`mpsc`](std::sync::mpsc) channel of
//! [`JobEvent`]s so the caller owns all printing. The returned
//! [`BatchSummary`] serializes to JSON for machine-readable reports.
//!
//! The batch holds no cross-file state — each request is independent, so a
//! caller could parallelize per-image later without coordination.

use crate::naming;
use crate::sizing::{Codec, OutputFormat, ResizeRequest, SizingError, resize};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

/// Batch-level failure: aborts the whole run.
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("no input images found")]
    NoInputs,
}

/// Per-file failure: reported, then the batch moves on.
#[derive(Error, Debug)]
enum FileError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Resize(#[from] SizingError),
}

/// Everything the batch needs besides the file list, passed as one immutable
/// struct per run.
#[derive(Debug, Clone)]
pub struct JobConfig {
    pub request: ResizeRequest,
    /// Appended to output filename stems (e.g. `photo_resized.jpg`).
    pub suffix: String,
}

/// Progress events, one `Started` and one `Completed`/`Failed` per file.
#[derive(Debug, Clone, PartialEq)]
pub enum JobEvent {
    Started {
        index: usize,
        total: usize,
        filename: String,
    },
    Completed {
        filename: String,
        width: u32,
        height: u32,
        bytes: u64,
        target_met: bool,
    },
    Failed {
        filename: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub input: String,
    pub output: String,
    pub width: u32,
    pub height: u32,
    pub bytes: u64,
    pub target_met: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FailureReport {
    pub input: String,
    pub reason: String,
}

#[derive(Debug, Serialize)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
    pub files: Vec<FileReport>,
    pub failures: Vec<FailureReport>,
}

impl BatchSummary {
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

/// Run the batch: resize every input into `output_dir`.
pub fn run(
    codec: &impl Codec,
    inputs: &[PathBuf],
    output_dir: &Path,
    config: &JobConfig,
    events: Option<Sender<JobEvent>>,
) -> Result<BatchSummary, BatchError> {
    if inputs.is_empty() {
        return Err(BatchError::NoInputs);
    }
    std::fs::create_dir_all(output_dir)?;

    let send = |event: JobEvent| {
        if let Some(tx) = &events {
            // A dropped receiver just means nobody is listening
            let _ = tx.send(event);
        }
    };

    let mut files = Vec::new();
    let mut failures = Vec::new();

    for (index, input) in inputs.iter().enumerate() {
        let filename = input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| input.display().to_string());

        send(JobEvent::Started {
            index,
            total: inputs.len(),
            filename: filename.clone(),
        });

        match process_file(codec, input, output_dir, config) {
            Ok(report) => {
                send(JobEvent::Completed {
                    filename,
                    width: report.width,
                    height: report.height,
                    bytes: report.bytes,
                    target_met: report.target_met,
                });
                files.push(report);
            }
            Err(err) => {
                let reason = err.to_string();
                send(JobEvent::Failed { filename, reason: reason.clone() });
                failures.push(FailureReport {
                    input: input.display().to_string(),
                    reason,
                });
            }
        }
    }

    Ok(BatchSummary {
        succeeded: files.len(),
        failed: failures.len(),
        files,
        failures,
    })
}

/// Process a single image end to end.
fn process_file(
    codec: &impl Codec,
    input: &Path,
    output_dir: &Path,
    config: &JobConfig,
) -> Result<FileReport, FileError> {
    let source_bytes = std::fs::read(input)?;
    let image = codec.decode(&source_bytes).map_err(SizingError::from)?;

    let output_path = naming::output_path(output_dir, input, &config.suffix);
    let format = OutputFormat::for_path(&output_path);

    let result = resize(codec, &image, &config.request, format)?;
    std::fs::write(&output_path, &result.bytes)?;

    Ok(FileReport {
        input: input.display().to_string(),
        output: output_path.display().to_string(),
        width: result.width,
        height: result.height,
        bytes: result.achieved_bytes(),
        target_met: result.target_met,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sizing::RustCodec;
    use image::{ImageEncoder, RgbImage};
    use std::sync::mpsc;

    /// Create a small valid JPEG file with the given dimensions.
    fn create_test_jpeg(path: &Path, width: u32, height: u32) {
        let img = RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        });
        let file = std::fs::File::create(path).unwrap();
        let writer = std::io::BufWriter::new(file);
        image::codecs::jpeg::JpegEncoder::new(writer)
            .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
            .unwrap();
    }

    fn fixed_config() -> JobConfig {
        JobConfig {
            request: ResizeRequest::FixedDimensions {
                width: 100,
                height: 100,
                preserve_aspect: true,
                quality: 85,
            },
            suffix: "_resized".to_string(),
        }
    }

    #[test]
    fn batch_resizes_all_inputs() {
        let tmp = tempfile::TempDir::new().unwrap();
        let a = tmp.path().join("a.jpg");
        let b = tmp.path().join("b.jpg");
        create_test_jpeg(&a, 400, 300);
        create_test_jpeg(&b, 300, 400);
        let out_dir = tmp.path().join("out");

        let codec = RustCodec::new();
        let summary = run(&codec, &[a, b], &out_dir, &fixed_config(), None).unwrap();

        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.failed, 0);
        assert!(summary.all_succeeded());

        // 400x300 fit into 100x100 → 100x75
        let out_a = out_dir.join("a_resized.jpg");
        assert!(out_a.exists());
        let decoded = image::open(&out_a).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (100, 75));

        let out_b = out_dir.join("b_resized.jpg");
        let decoded = image::open(&out_b).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (75, 100));
    }

    #[test]
    fn batch_continues_past_bad_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let good = tmp.path().join("good.jpg");
        let bad = tmp.path().join("bad.jpg");
        create_test_jpeg(&good, 200, 200);
        std::fs::write(&bad, b"this is not a jpeg").unwrap();
        let out_dir = tmp.path().join("out");

        let codec = RustCodec::new();
        let summary = run(
            &codec,
            &[bad.clone(), good],
            &out_dir,
            &fixed_config(),
            None,
        )
        .unwrap();

        assert_eq!(summary.succeeded, 1);
        assert_eq!(summary.failed, 1);
        assert!(!summary.all_succeeded());
        assert_eq!(summary.failures[0].input, bad.display().to_string());
        assert!(out_dir.join("good_resized.jpg").exists());
    }

    #[test]
    fn batch_rejects_empty_input_list() {
        let tmp = tempfile::TempDir::new().unwrap();
        let codec = RustCodec::new();
        let result = run(&codec, &[], tmp.path(), &fixed_config(), None);
        assert!(matches!(result, Err(BatchError::NoInputs)));
    }

    #[test]
    fn batch_emits_events_in_order() {
        let tmp = tempfile::TempDir::new().unwrap();
        let a = tmp.path().join("a.jpg");
        create_test_jpeg(&a, 200, 200);
        let out_dir = tmp.path().join("out");

        let codec = RustCodec::new();
        let (tx, rx) = mpsc::channel();
        run(&codec, &[a], &out_dir, &fixed_config(), Some(tx)).unwrap();

        let events: Vec<JobEvent> = rx.iter().collect();
        assert_eq!(events.len(), 2);
        assert!(matches!(
            &events[0],
            JobEvent::Started { index: 0, total: 1, filename } if filename == "a.jpg"
        ));
        assert!(matches!(
            &events[1],
            JobEvent::Completed { width: 100, height: 100, target_met: true, .. }
        ));
    }

    #[test]
    fn batch_byte_budget_stays_under_budget() {
        let tmp = tempfile::TempDir::new().unwrap();
        let input = tmp.path().join("photo.jpg");
        create_test_jpeg(&input, 640, 480);
        let out_dir = tmp.path().join("out");

        let budget = 10 * 1024;
        let config = JobConfig {
            request: ResizeRequest::TargetByteSize {
                max_bytes: budget,
                preserve_aspect: true,
                quality: 85,
            },
            suffix: "_small".to_string(),
        };

        let codec = RustCodec::new();
        let summary = run(&codec, &[input], &out_dir, &config, None).unwrap();
        assert_eq!(summary.succeeded, 1);

        let report = &summary.files[0];
        assert!(report.target_met);
        assert!(report.bytes <= budget);
        let written = std::fs::metadata(&report.output).unwrap().len();
        assert_eq!(written, report.bytes);
    }

    #[test]
    fn summary_serializes_to_json() {
        let summary = BatchSummary {
            succeeded: 1,
            failed: 0,
            files: vec![FileReport {
                input: "a.jpg".to_string(),
                output: "out/a_resized.jpg".to_string(),
                width: 100,
                height: 75,
                bytes: 4321,
                target_met: true,
            }],
            failures: vec![],
        };

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"succeeded\":1"));
        assert!(json.contains("a_resized.jpg"));
    }
}
