//! Geometry for images rendered with `object-fit: cover`.
//!
//! This module answers one question for the drag mapper: along which axis is
//! the image cropped, and by how much?
//!
//! # Pipeline
//!
//! 1. [`scale_to_contain`] scales the natural size so the image spans the
//!    rendered box on its relatively shorter side
//! 2. [`compute_dimension_delta`] compares that size against the rendered box
//!    and reports the overflowing axis
//! 3. [`DeltaTracker`] re-runs step 2 whenever the host reports a resize or a
//!    new image source
//!
//! # Preconditions
//!
//! The unchecked functions divide by the natural size. Callers must wait for
//! the image to load and report a non-zero natural size, or use the `try_`
//! variants which return [`GeometryError`].

mod contain;
mod delta;
mod tracker;

pub use contain::{scale_to_contain, try_scale_to_contain};
pub use delta::{
    compute_dimension_delta, compute_dimension_delta_with_threshold, try_compute_dimension_delta,
    AxisDelta, ChangedDimension, CursorHint, ImageDimensionDelta, DELTA_THRESHOLD_PX,
};
pub use tracker::DeltaTracker;

use thiserror::Error;

/// Precondition violations reported by the checked geometry functions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Natural size is zero or negative on one axis.
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be greater than zero")]
    ZeroDimension { width: f64, height: f64 },

    /// A dimension is NaN or infinite.
    #[error("Non-finite dimensions: width ({width}), height ({height})")]
    NonFiniteDimension { width: f64, height: f64 },
}
