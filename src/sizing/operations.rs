//! High-level resize operations.
//!
//! These functions combine the dimension calculations with a [`Codec`]:
//! validate the request, compute candidate dimensions (directly, or by
//! bisecting a scale factor against a byte budget), and hand the pixel work
//! to the codec. No disk I/O happens here; results stay in memory until the
//! caller persists them.

use super::calculations::{fit_within, scaled};
use super::codec::{Codec, CodecError, OutputFormat};
use super::params::{ResizeRequest, ResizeResult};
use image::DynamicImage;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SizingError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("unsupported image: {0}")]
    UnsupportedImage(#[from] CodecError),
}

/// Iteration cap for the byte-budget scale search. Twelve halvings resolve
/// the scale to ~1/4096, finer than one pixel on any realistic source.
pub const MAX_SEARCH_ITERATIONS: u32 = 12;

/// Early-stop tolerance: a feasible candidate within this fraction below the
/// budget is close enough, and further trial encodes are skipped.
pub const BYTE_TOLERANCE: f64 = 0.05;

fn check_quality(quality: u8) -> Result<(), SizingError> {
    if (1..=100).contains(&quality) {
        Ok(())
    } else {
        Err(SizingError::InvalidRequest(format!(
            "quality must be 1-100, got {quality}"
        )))
    }
}

/// Resolve the output dimensions for a fixed-dimension request.
///
/// With `preserve_aspect` the image fits inside the `width`×`height` box
/// without exceeding either edge; without it the target is taken literally
/// and the image will be stretched. Rejects zero dimensions.
pub fn resolve_fixed(
    source: (u32, u32),
    width: u32,
    height: u32,
    preserve_aspect: bool,
) -> Result<(u32, u32), SizingError> {
    if width == 0 || height == 0 {
        return Err(SizingError::InvalidRequest(format!(
            "target dimensions must be positive, got {width}x{height}"
        )));
    }
    Ok(if preserve_aspect {
        fit_within(source, (width, height))
    } else {
        (width, height)
    })
}

/// Resize an image per a [`ResizeRequest`].
pub fn resize(
    codec: &impl Codec,
    image: &DynamicImage,
    request: &ResizeRequest,
    format: OutputFormat,
) -> Result<ResizeResult, SizingError> {
    match *request {
        ResizeRequest::FixedDimensions {
            width,
            height,
            preserve_aspect,
            quality,
        } => resize_to_dimensions(codec, image, width, height, preserve_aspect, quality, format),
        // Byte-budget scaling applies one factor to both axes, which keeps
        // the ratio regardless of the preserve_aspect flag
        ResizeRequest::TargetByteSize {
            max_bytes, quality, ..
        } => resize_to_byte_budget(codec, image, max_bytes, quality, format),
    }
}

/// Resize to explicit dimensions and encode.
pub fn resize_to_dimensions(
    codec: &impl Codec,
    image: &DynamicImage,
    width: u32,
    height: u32,
    preserve_aspect: bool,
    quality: u8,
    format: OutputFormat,
) -> Result<ResizeResult, SizingError> {
    check_quality(quality)?;
    let source = (image.width(), image.height());
    let (out_w, out_h) = resolve_fixed(source, width, height, preserve_aspect)?;

    let bytes = if (out_w, out_h) == source {
        // Already at the target; encoding alone suffices
        codec.encode(image, format, quality)?
    } else {
        let resampled = codec.resample(image, out_w, out_h);
        codec.encode(&resampled, format, quality)?
    };

    Ok(ResizeResult {
        bytes,
        width: out_w,
        height: out_h,
        target_met: true,
    })
}

/// Find the largest dimensions whose encoded size stays at or under
/// `max_bytes`, by bisecting a scale factor in `(0, 1]`.
///
/// Encoded size grows monotonically with scale at fixed quality, so
/// bisection converges in `O(log 1/ε)` trial encodes — each trial is a full
/// resample + encode, the expensive step. The search is approximate-optimal:
/// real codecs show minor non-monotonicity at quantization boundaries, which
/// the tolerance window absorbs.
///
/// The full-size encode is probed first; an image already under budget is
/// returned untouched. If even the smallest candidate tried overshoots the
/// budget, the smallest one is returned with `target_met` unset — a soft
/// condition, not an error.
pub fn resize_to_byte_budget(
    codec: &impl Codec,
    image: &DynamicImage,
    max_bytes: u64,
    quality: u8,
    format: OutputFormat,
) -> Result<ResizeResult, SizingError> {
    check_quality(quality)?;
    if max_bytes == 0 {
        return Err(SizingError::InvalidRequest(
            "target byte size must be positive".to_string(),
        ));
    }

    let source = (image.width(), image.height());
    let full = codec.encode(image, format, quality)?;
    if full.len() as u64 <= max_bytes {
        return Ok(ResizeResult {
            bytes: full,
            width: source.0,
            height: source.1,
            target_met: true,
        });
    }

    let close_floor = max_bytes as f64 * (1.0 - BYTE_TOLERANCE);
    let (mut low, mut high) = (0.0_f64, 1.0_f64);
    let mut best: Option<ResizeResult> = None;
    // Best-effort fallback, replaced by the smallest candidate tried
    let mut fallback = ResizeResult {
        bytes: full,
        width: source.0,
        height: source.1,
        target_met: false,
    };

    for _ in 0..MAX_SEARCH_ITERATIONS {
        let mid = (low + high) / 2.0;
        let (width, height) = scaled(source, mid);
        let candidate = codec.resample(image, width, height);
        let encoded = codec.encode(&candidate, format, quality)?;
        let len = encoded.len() as u64;

        if len <= max_bytes {
            let close_enough = len as f64 >= close_floor;
            // Feasible candidates only grow as `low` rises, so the latest
            // one is always the best so far
            best = Some(ResizeResult {
                bytes: encoded,
                width,
                height,
                target_met: true,
            });
            if close_enough {
                break;
            }
            low = mid;
        } else {
            if (width as u64 * height as u64)
                < (fallback.width as u64 * fallback.height as u64)
            {
                fallback = ResizeResult {
                    bytes: encoded,
                    width,
                    height,
                    target_met: false,
                };
            }
            high = mid;
        }
    }

    Ok(best.unwrap_or(fallback))
}
