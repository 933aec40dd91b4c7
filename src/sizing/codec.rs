//! Codec collaborator trait and shared types.
//!
//! The [`Codec`] trait is the seam between the search logic and actual pixel
//! work: decode bytes to an image, resample an image, encode an image back to
//! bytes. Everything stays in memory — no path in this interface touches the
//! filesystem.
//!
//! The production implementation is
//! [`RustCodec`](super::rust_codec::RustCodec), built on the `image` crate.
//! Tests use a mock with a deterministic encoded-size model, so the
//! byte-budget search can be exercised without real encoding.

use image::DynamicImage;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("decode failed: {0}")]
    Decode(String),
    #[error("encode failed: {0}")]
    Encode(String),
}

/// Output encodings supported by the codec.
///
/// Quality only affects [`Jpeg`](OutputFormat::Jpeg); the remaining formats
/// encode losslessly and ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
    Png,
    Gif,
    Bmp,
    Tiff,
    WebP,
}

impl OutputFormat {
    /// Map a file extension to an output format, case-insensitively.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            "gif" => Some(Self::Gif),
            "bmp" => Some(Self::Bmp),
            "tif" | "tiff" => Some(Self::Tiff),
            "webp" => Some(Self::WebP),
            _ => None,
        }
    }

    /// Format for an output path. Unknown or missing extensions fall back to
    /// JPEG, matching how unrecognized files are re-encoded.
    pub fn for_path(path: &Path) -> Self {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
            .unwrap_or(Self::Jpeg)
    }
}

/// Trait for image codecs.
///
/// `Sync` so a single codec instance can be shared by callers that process
/// images from multiple threads; implementations hold no per-call state.
pub trait Codec: Sync {
    /// Decode an encoded image into pixels.
    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage, CodecError>;

    /// Resample an image to exactly `width`×`height` pixels.
    fn resample(&self, image: &DynamicImage, width: u32, height: u32) -> DynamicImage;

    /// Encode an image at the given quality (1–100, lossy formats only).
    fn encode(
        &self,
        image: &DynamicImage,
        format: OutputFormat,
        quality: u8,
    ) -> Result<Vec<u8>, CodecError>;
}
