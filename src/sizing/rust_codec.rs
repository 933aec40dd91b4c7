//! Pure Rust codec built on the `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, GIF, BMP, TIFF, WebP) | `image::load_from_memory` |
//! | Resample | `image::DynamicImage::resize_exact` with `Lanczos3` |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` (quality-aware) |
//! | Encode → PNG/GIF/BMP/TIFF/WebP | `image::DynamicImage::write_to` (lossless) |
//!
//! Everything is statically linked; no ImageMagick or other system binaries.

use super::codec::{Codec, CodecError, OutputFormat};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ExtendedColorType, ImageEncoder, ImageFormat};
use std::io::Cursor;

/// File extensions whose decoders are compiled in.
pub const INPUT_EXTENSIONS: &[&str] =
    &["jpg", "jpeg", "png", "gif", "bmp", "tif", "tiff", "webp"];

/// Codec implementation using the `image` crate.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustCodec;

impl RustCodec {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustCodec {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode as JPEG at the given quality. JPEG has no alpha channel, so the
/// image is flattened to RGB8 first.
fn encode_jpeg(image: &DynamicImage, quality: u8) -> Result<Vec<u8>, CodecError> {
    let rgb = image.to_rgb8();
    let mut buffer = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut buffer, quality)
        .write_image(
            rgb.as_raw(),
            rgb.width(),
            rgb.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| CodecError::Encode(format!("JPEG: {e}")))?;
    Ok(buffer.into_inner())
}

/// Encode via `write_to` for the formats that take no quality parameter.
fn encode_lossless(image: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>, CodecError> {
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, format)
        .map_err(|e| CodecError::Encode(format!("{format:?}: {e}")))?;
    Ok(buffer.into_inner())
}

impl Codec for RustCodec {
    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage, CodecError> {
        image::load_from_memory(bytes).map_err(|e| CodecError::Decode(e.to_string()))
    }

    fn resample(&self, image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
        // Exact dimensions: aspect decisions were already made by the caller
        image.resize_exact(width, height, FilterType::Lanczos3)
    }

    fn encode(
        &self,
        image: &DynamicImage,
        format: OutputFormat,
        quality: u8,
    ) -> Result<Vec<u8>, CodecError> {
        match format {
            OutputFormat::Jpeg => encode_jpeg(image, quality),
            OutputFormat::Png => encode_lossless(image, ImageFormat::Png),
            // The GIF encoder wants RGBA input
            OutputFormat::Gif => {
                let rgba = DynamicImage::ImageRgba8(image.to_rgba8());
                encode_lossless(&rgba, ImageFormat::Gif)
            }
            OutputFormat::Bmp => encode_lossless(image, ImageFormat::Bmp),
            OutputFormat::Tiff => encode_lossless(image, ImageFormat::Tiff),
            OutputFormat::WebP => encode_lossless(image, ImageFormat::WebP),
        }
    }
}
