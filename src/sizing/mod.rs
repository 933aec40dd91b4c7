//! Size-targeted resizing — pure Rust, fully in-memory.
//!
//! | Operation | Where |
//! |---|---|
//! | **Dimension math** | [`fit_within`] / [`scaled`] (pure functions) |
//! | **Fixed-dimension resize** | [`resize_to_dimensions`] |
//! | **Byte-budget search** | [`resize_to_byte_budget`] (scale bisection) |
//! | **Pixel work** | [`Codec`] trait, implemented by [`RustCodec`] |
//!
//! The module is split into:
//! - **Calculations**: pure functions for dimension math (unit testable)
//! - **Parameters**: data structures describing resize requests and results
//! - **Codec**: [`Codec`] trait + [`RustCodec`]
//! - **Operations**: high-level functions combining calculations + codec

mod calculations;
pub mod codec;
pub mod operations;
mod params;
pub mod rust_codec;

pub use calculations::{aspect_ratio, fit_within, scaled};
pub use codec::{Codec, CodecError, OutputFormat};
pub use operations::{
    BYTE_TOLERANCE, MAX_SEARCH_ITERATIONS, SizingError, resize, resize_to_byte_budget,
    resize_to_dimensions, resolve_fixed,
};
pub use params::{ResizeRequest, ResizeResult};
pub use rust_codec::{INPUT_EXTENSIONS, RustCodec};
