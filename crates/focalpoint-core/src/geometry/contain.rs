//! Contain-scale calculator.
//!
//! Given a source aspect ratio and a target rectangle, fix the axis along
//! which the source is relatively shorter to the rectangle and scale the other
//! proportionally. The result overshoots the rectangle on exactly the axis
//! `object-fit: cover` would crop, and by exactly the amount it would crop.

use super::GeometryError;
use crate::Dimensions;

/// Scale `source` into `rect`, preserving aspect ratio.
///
/// If the source is relatively wider than `rect`, the height is fixed to
/// `rect.height` and the width grows past `rect.width`. Otherwise the width is
/// fixed to `rect.width` and the height grows past `rect.height`.
///
/// # Preconditions
///
/// `source` must have non-zero width and height. A zero natural size divides
/// by zero and produces NaN or infinity.
///
/// # Example
///
/// ```
/// use focalpoint_core::{scale_to_contain, Dimensions};
///
/// let scaled = scale_to_contain(Dimensions::new(800.0, 600.0), Dimensions::new(400.0, 400.0));
/// assert_eq!(scaled.height, 400.0);
/// assert!((scaled.width - 533.333).abs() < 1e-3);
/// ```
pub fn scale_to_contain(source: Dimensions, rect: Dimensions) -> Dimensions {
    let source_ratio = source.width / source.height;
    let rect_ratio = rect.width / rect.height;

    if source_ratio > rect_ratio {
        Dimensions::new(rect.height * source_ratio, rect.height)
    } else {
        Dimensions::new(rect.width, rect.width / source_ratio)
    }
}

/// Checked [`scale_to_contain`].
///
/// Rejects a non-positive or non-finite natural size and a non-finite rect.
pub fn try_scale_to_contain(
    source: Dimensions,
    rect: Dimensions,
) -> Result<Dimensions, GeometryError> {
    validate_source(source)?;
    if !rect.width.is_finite() || !rect.height.is_finite() {
        return Err(GeometryError::NonFiniteDimension {
            width: rect.width,
            height: rect.height,
        });
    }
    Ok(scale_to_contain(source, rect))
}

pub(super) fn validate_source(source: Dimensions) -> Result<(), GeometryError> {
    if !source.width.is_finite() || !source.height.is_finite() {
        return Err(GeometryError::NonFiniteDimension {
            width: source.width,
            height: source.height,
        });
    }
    if source.width <= 0.0 || source.height <= 0.0 {
        return Err(GeometryError::ZeroDimension {
            width: source.width,
            height: source.height,
        });
    }
    Ok(())
}


// ============================================================================
// Property-Based Tests
// ============================================================================
