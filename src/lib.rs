//! # imgfit
//!
//! Batch image resizer: fit photos to exact pixel dimensions or to an
//! approximate target file size.
//!
//! # Architecture
//!
//! The crate is one core component behind thin adapters:
//!
//! ```text
//! scan      input path        →  ordered file list
//! sizing    image + request   →  encoded bytes + dimensions   (the core)
//! batch     file list         →  output files + summary
//! ```
//!
//! The core never touches the filesystem or the terminal: it borrows a
//! decoded image, talks to a [`sizing::Codec`] for resampling and encoding,
//! and returns bytes. File I/O lives in [`batch`], printing in `main` via
//! [`output`]. That separation keeps the search logic testable against a
//! mock codec, with no images encoded in unit tests.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`sizing`] | Dimension math, the `Codec` seam, and the byte-budget scale search |
//! | [`scan`] | Input collection: single file or directory walk with extension filter |
//! | [`batch`] | Sequential per-file loop, skip-and-continue error policy, JSON-able summary |
//! | [`naming`] | Output filename construction (`photo.jpg` → `photo_resized.jpg`) |
//! | [`output`] | CLI line formatting for progress events and the final summary |
//!
//! # Design Decisions
//!
//! ## Byte budgets via scale bisection
//!
//! Encoded size grows monotonically with pixel count at fixed quality, so
//! the target-size mode bisects a scale factor in `(0, 1]` rather than
//! scanning candidate sizes linearly. Each trial costs a full resample +
//! encode — the expensive step — so convergence in a dozen trials matters.
//! The result is approximate-optimal: the search stops once a feasible
//! candidate lands within 5% below the budget, and a budget smaller than the
//! smallest achievable encode yields a best-effort result with a flag, not
//! an error.
//!
//! ## Sequential batches, parallel-ready core
//!
//! Images are processed one at a time; the resizer holds no cross-call
//! state and every request is an immutable struct, so per-image parallelism
//! could be added by a caller later without touching the core.

pub mod batch;
pub mod naming;
pub mod output;
pub mod scan;
pub mod sizing;
