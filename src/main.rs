use clap::Parser;
use imgfit::sizing::{ResizeRequest, RustCodec};
use imgfit::{batch, output, scan};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let hash = env!("GIT_HASH");
    if hash.is_empty() {
        env!("CARGO_PKG_VERSION")
    } else {
        // Leaked once at startup — trivial, called exactly once
        Box::leak(format!("{} ({hash})", env!("CARGO_PKG_VERSION")).into_boxed_str())
    }
}

#[derive(Parser)]
#[command(name = "imgfit")]
#[command(about = "Resize images to fixed dimensions or a target file size")]
#[command(long_about = "\
Resize images to fixed dimensions or a target file size

Two modes:

  Dimensions (default):  images are fitted inside --width x --height,
      keeping the aspect ratio unless --no-aspect-ratio is given.

  Target size (--max-kb):  for each image, the largest dimensions whose
      encoded file stays at or under the budget are found by trial
      encodes at the given --quality. The bound is best-effort: when even
      the smallest candidate overshoots, the closest result is written
      and flagged in the output.

Input may be a single image or a directory (filtered to image files;
--recursive descends into subdirectories). Outputs keep their format and
name, with --suffix spliced in before the extension. Failing images are
reported and skipped; the exit code is non-zero if any image failed.")]
#[command(version = version_string())]
struct Cli {
    /// Input image file or directory
    input: PathBuf,

    /// Output directory (created if missing)
    output: PathBuf,

    /// Target width in pixels
    #[arg(long, default_value_t = 800, conflicts_with = "max_kb")]
    width: u32,

    /// Target height in pixels
    #[arg(long, default_value_t = 600, conflicts_with = "max_kb")]
    height: u32,

    /// Target file size in KB — switches to size-targeted mode
    #[arg(long)]
    max_kb: Option<u64>,

    /// Stretch to the exact dimensions instead of fitting inside them
    #[arg(long)]
    no_aspect_ratio: bool,

    /// JPEG quality (1-100)
    #[arg(long, default_value_t = 85, value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: u8,

    /// Suffix added to output filenames
    #[arg(long, default_value = "_resized")]
    suffix: String,

    /// Recurse into subdirectories when input is a directory
    #[arg(long)]
    recursive: bool,

    /// Write a JSON batch report to this path
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let preserve_aspect = !cli.no_aspect_ratio;
    let request = match cli.max_kb {
        Some(kb) => ResizeRequest::TargetByteSize {
            max_bytes: kb * 1024,
            preserve_aspect,
            quality: cli.quality,
        },
        None => ResizeRequest::FixedDimensions {
            width: cli.width,
            height: cli.height,
            preserve_aspect,
            quality: cli.quality,
        },
    };

    let inputs = scan::collect_inputs(&cli.input, cli.recursive)?;
    for line in output::format_job_header(inputs.len(), &request) {
        println!("{line}");
    }

    let config = batch::JobConfig {
        request,
        suffix: cli.suffix.clone(),
    };

    let codec = RustCodec::new();
    let (tx, rx) = std::sync::mpsc::channel();
    let printer = std::thread::spawn(move || {
        for event in rx {
            println!("{}", output::format_job_event(&event));
        }
    });
    let summary = batch::run(&codec, &inputs, &cli.output, &config, Some(tx))?;
    printer.join().unwrap();

    for line in output::format_summary(&summary, &cli.output) {
        println!("{line}");
    }

    if let Some(report_path) = &cli.report {
        std::fs::write(report_path, serde_json::to_string_pretty(&summary)?)?;
    }

    if !summary.all_succeeded() {
        std::process::exit(1);
    }
    Ok(())
}
