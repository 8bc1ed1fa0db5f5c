//! Dimension-delta detector.
//!
//! Works out which axis `object-fit: cover` crops and how far the image can
//! travel along it, both in pixels and as a percentage of the scaled image.

use serde::{Deserialize, Serialize};

use super::contain::{scale_to_contain, validate_source};
use super::GeometryError;
use crate::percent::to_percentage;
use crate::Dimensions;

/// Pixel overflow below which an axis is treated as not cropped.
pub const DELTA_THRESHOLD_PX: f64 = 1.0;

/// The axis along which cover-fit removes content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangedDimension {
    Width,
    Height,
}

impl ChangedDimension {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangedDimension::Width => "width",
            ChangedDimension::Height => "height",
        }
    }
}

/// Cursor affordance shown over the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CursorHint {
    /// Horizontal panning (width is cropped).
    ColResize,
    /// Vertical panning (height is cropped).
    RowResize,
    /// Nothing to pan.
    #[default]
    Crosshair,
}

impl CursorHint {
    /// CSS `cursor` value.
    pub fn as_css(self) -> &'static str {
        match self {
            CursorHint::ColResize => "col-resize",
            CursorHint::RowResize => "row-resize",
            CursorHint::Crosshair => "crosshair",
        }
    }
}

impl From<Option<ChangedDimension>> for CursorHint {
    fn from(changed: Option<ChangedDimension>) -> Self {
        match changed {
            Some(ChangedDimension::Width) => CursorHint::ColResize,
            Some(ChangedDimension::Height) => CursorHint::RowResize,
            None => CursorHint::Crosshair,
        }
    }
}

/// Overflow along one axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisDelta {
    /// Pixels hidden by the crop, never negative.
    pub px: f64,
    /// `px` as a percentage of the scaled image size on this axis.
    pub percent: f64,
}

/// How much of the image is cropped on each axis.
///
/// At most one of `width.px` / `height.px` exceeds the threshold, and
/// `changed_dimension` names that axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDimensionDelta {
    pub width: AxisDelta,
    pub height: AxisDelta,
    pub changed_dimension: Option<ChangedDimension>,
}

impl ImageDimensionDelta {
    /// Overflow along `dimension`.
    pub fn axis(&self, dimension: ChangedDimension) -> AxisDelta {
        match dimension {
            ChangedDimension::Width => self.width,
            ChangedDimension::Height => self.height,
        }
    }

    /// True when there is an axis to pan along.
    pub fn is_pannable(&self) -> bool {
        self.changed_dimension.is_some()
    }

    pub fn cursor_hint(&self) -> CursorHint {
        CursorHint::from(self.changed_dimension)
    }
}

/// Compare the natural size against the rendered box using the default
/// 1px threshold.
///
/// # Preconditions
///
/// `natural` must be non-zero on both axes; see [`try_compute_dimension_delta`].
///
/// # Example
///
/// ```
/// use focalpoint_core::{compute_dimension_delta, ChangedDimension, Dimensions};
///
/// let delta = compute_dimension_delta(Dimensions::new(800.0, 600.0), Dimensions::new(400.0, 400.0));
/// assert_eq!(delta.changed_dimension, Some(ChangedDimension::Width));
/// assert!((delta.width.percent - 25.0).abs() < 1e-9);
/// ```
pub fn compute_dimension_delta(natural: Dimensions, rect: Dimensions) -> ImageDimensionDelta {
    compute_dimension_delta_with_threshold(natural, rect, DELTA_THRESHOLD_PX)
}

/// [`compute_dimension_delta`] with an explicit pixel threshold.
pub fn compute_dimension_delta_with_threshold(
    natural: Dimensions,
    rect: Dimensions,
    threshold_px: f64,
) -> ImageDimensionDelta {
    let scaled = scale_to_contain(natural, rect);

    // The axis that fits has a non-positive delta; only overflow matters.
    let width_px = (scaled.width - rect.width).max(0.0);
    let height_px = (scaled.height - rect.height).max(0.0);

    let changed_dimension = if width_px > threshold_px {
        Some(ChangedDimension::Width)
    } else if height_px > threshold_px {
        Some(ChangedDimension::Height)
    } else {
        None
    };

    ImageDimensionDelta {
        width: AxisDelta {
            px: width_px,
            percent: axis_percent(width_px, scaled.width),
        },
        height: AxisDelta {
            px: height_px,
            percent: axis_percent(height_px, scaled.height),
        },
        changed_dimension,
    }
}

/// Checked [`compute_dimension_delta_with_threshold`].
pub fn try_compute_dimension_delta(
    natural: Dimensions,
    rect: Dimensions,
    threshold_px: f64,
) -> Result<ImageDimensionDelta, GeometryError> {
    validate_source(natural)?;
    if !rect.width.is_finite() || !rect.height.is_finite() {
        return Err(GeometryError::NonFiniteDimension {
            width: rect.width,
            height: rect.height,
        });
    }
    Ok(compute_dimension_delta_with_threshold(
        natural,
        rect,
        threshold_px,
    ))
}

fn axis_percent(delta_px: f64, scaled: f64) -> f64 {
    if scaled <= 0.0 {
        0.0
    } else {
        to_percentage(delta_px, scaled)
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn dimensions_strategy() -> impl Strategy<Value = Dimensions> {
        (1.0f64..=4000.0, 1.0f64..=4000.0).prop_map(|(w, h)| Dimensions::new(w, h))
    }

    proptest! {
        /// Property: Pixel deltas are never negative.
        #[test]
        fn prop_deltas_non_negative(natural in dimensions_strategy(), rect in dimensions_strategy()) {
            let delta = compute_dimension_delta(natural, rect);
            prop_assert!(delta.width.px >= 0.0);
            prop_assert!(delta.height.px >= 0.0);
        }

        /// Property: At most one axis overflows past the threshold.
        #[test]
        fn prop_single_cropped_axis(natural in dimensions_strategy(), rect in dimensions_strategy()) {
            let delta = compute_dimension_delta(natural, rect);
            let over = [delta.width.px, delta.height.px]
                .iter()
                .filter(|px| **px > DELTA_THRESHOLD_PX)
                .count();
            prop_assert!(over <= 1);
        }

        /// Property: The changed dimension is the one whose overflow exceeds the threshold.
        #[test]
        fn prop_changed_dimension_consistent(natural in dimensions_strategy(), rect in dimensions_strategy()) {
            let delta = compute_dimension_delta(natural, rect);
            match delta.changed_dimension {
                Some(dim) => prop_assert!(delta.axis(dim).px > DELTA_THRESHOLD_PX),
                None => {
                    prop_assert!(delta.width.px <= DELTA_THRESHOLD_PX);
                    prop_assert!(delta.height.px <= DELTA_THRESHOLD_PX);
                }
            }
        }

        /// Property: Percent overflow stays within [0, 100).
        #[test]
        fn prop_percent_bounded(natural in dimensions_strategy(), rect in dimensions_strategy()) {
            let delta = compute_dimension_delta(natural, rect);
            prop_assert!(delta.width.percent >= 0.0 && delta.width.percent < 100.0);
            prop_assert!(delta.height.percent >= 0.0 && delta.height.percent < 100.0);
        }
    }
}
