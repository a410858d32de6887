#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod io;
pub mod mask;
pub mod trace;
pub mod types;

// Stage-level modules – still public, but considered unstable internals.
pub mod binarize;
pub mod collect;

// --- High-level re-exports -------------------------------------------------

// Main entry points: tracing + results.
pub use crate::trace::{find_contours, find_contours_batch, trace_borders, Border, TraceOptions};
pub use crate::types::{BorderKind, Contour, ContourId, ContourSet, Point};

// Input views and validation.
pub use crate::mask::{BinaryGrid, InvalidInput, MaskF32};

// Stage-level helpers that are generally useful on their own.
pub use crate::binarize::{binarize, DEFAULT_THRESHOLD};
pub use crate::collect::collect_contours;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use mask_contours::prelude::*;
///
/// # fn main() {
/// let (w, h) = (64usize, 48usize);
/// let values = vec![0.0f32; w * h];
/// let mask = MaskF32 { w, h, data: &values };
///
/// let contours = find_contours(&mask, TraceOptions::default()).unwrap();
/// println!("found {} contours", contours.len());
/// # }
/// ```
pub mod prelude {
    pub use crate::mask::MaskF32;
    pub use crate::{find_contours, ContourSet, TraceOptions};
}
