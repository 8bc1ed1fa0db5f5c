//! Focalpoint Core - object-position geometry and aspect-ratio engine
//!
//! This crate computes the declarative `object-position` value for an image
//! rendered with `object-fit: cover`, and maps aspect ratios onto a
//! logarithmic slider. It performs no pixel work: the rendering surface does
//! the visual crop, this crate only tells it where to anchor.
//!
//! # Module Structure
//!
//! - `percent` - clamp, percentage and rounding helpers
//! - `position` - `"X% Y%"` object-position codec
//! - `geometry` - contain-scale calculator, dimension-delta detector and the
//!   resize-driven delta tracker
//! - `drag` - pointer-drag to object-position mapper
//! - `controller` - glue pairing the delta tracker with drag sessions
//! - `aspect` - logarithmic aspect-ratio scale, catalog, slider and precision codec
//! - `config` - editor configuration with serde defaults

pub mod aspect;
pub mod config;
pub mod controller;
pub mod drag;
pub mod geometry;
pub mod percent;
pub mod position;

pub use aspect::{
    AspectRatio, AspectRatioCatalog, AspectRatioSlider, CatalogConfig, CatalogError, LogScale,
    NamedRatio, RulerTick, ScaleError, SliderKey,
};
pub use config::EditorConfig;
pub use controller::FocalPointController;
pub use drag::{map_drag_to_position, DragMapper, DragSession};
pub use geometry::{
    compute_dimension_delta, scale_to_contain, AxisDelta, ChangedDimension, CursorHint,
    DeltaTracker, GeometryError, ImageDimensionDelta,
};
pub use position::{parse_object_position_string, to_object_position_string, ObjectPosition};

use serde::{Deserialize, Serialize};

/// Generic 2D point.
///
/// The unit depends on context: pixels for pointer events, percent for
/// object-position values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
}

impl Coordinates {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - origin`.
    pub fn delta_from(self, origin: Coordinates) -> Coordinates {
        Coordinates::new(self.x - origin.x, self.y - origin.y)
    }
}

/// Width and height of a box or image, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width divided by height.
    ///
    /// Returns NaN or infinity for a zero height; callers guard upstream.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// True when both sides are finite and strictly positive.
    pub fn is_positive(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}
