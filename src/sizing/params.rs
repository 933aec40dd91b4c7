//! Request and result types for resize operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between callers (the batch loop, the CLI) and the
//! [`operations`](super::operations) module, which validates them and drives
//! the [`Codec`](super::codec::Codec).

/// A single resize job for one image.
///
/// Quality (1–100) is carried by both variants: in byte-budget mode it is
/// fixed while dimensions are searched, and in fixed-dimension mode it feeds
/// the final encode. It only affects lossy output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeRequest {
    /// Resize to explicit pixel dimensions.
    FixedDimensions {
        width: u32,
        height: u32,
        /// When true, fit inside the `width`×`height` box keeping the source
        /// ratio; when false, stretch to exactly `width`×`height`.
        preserve_aspect: bool,
        quality: u8,
    },
    /// Search for the largest dimensions whose encoded size stays at or
    /// under `max_bytes`.
    TargetByteSize {
        max_bytes: u64,
        /// Carried for request-surface symmetry. Byte-budget scaling applies
        /// one scale factor to both axes, so the ratio is kept either way.
        preserve_aspect: bool,
        quality: u8,
    },
}

impl ResizeRequest {
    pub fn quality(&self) -> u8 {
        match *self {
            ResizeRequest::FixedDimensions { quality, .. } => quality,
            ResizeRequest::TargetByteSize { quality, .. } => quality,
        }
    }
}

/// The outcome of one resize: encoded bytes plus the dimensions they encode.
///
/// Produced once per request and immutable; the caller persists or discards
/// it. The core never writes to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeResult {
    /// Encoded image, ready to be written as a file.
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// False only in byte-budget mode, when even the smallest candidate
    /// tried overshot the budget and the result is best-effort.
    pub target_met: bool,
}

impl ResizeResult {
    /// Size of the encoded output in bytes.
    pub fn achieved_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }
}
