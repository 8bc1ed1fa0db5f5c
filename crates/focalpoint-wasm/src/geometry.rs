//! WASM bindings for the stateless geometry helpers.
//!
//! These mirror the core functions for callers that manage their own state;
//! `FocalPointEditor` wraps the same logic behind an event-driven interface.

use crate::types::{to_js, JsDimensionDelta};
use focalpoint_core::geometry::{try_compute_dimension_delta, try_scale_to_contain};
use focalpoint_core::{
    parse_object_position_string as core_parse, to_object_position_string as core_format,
    Coordinates, Dimensions,
};
use wasm_bindgen::prelude::*;

/// Format percentages as a CSS `object-position` value.
///
/// Each axis is clamped to [0, 100] and rounded to two decimals.
///
/// # Example (TypeScript)
///
/// ```typescript
/// to_object_position_string(150, -20); // "100% 0%"
/// ```
#[wasm_bindgen]
pub fn to_object_position_string(x: f64, y: f64) -> String {
    core_format(Coordinates::new(x, y))
}

/// Parse an `"X% Y%"` value into `[x, y]`.
///
/// Malformed components come back as `NaN`.
#[wasm_bindgen]
pub fn parse_object_position_string(value: &str) -> Vec<f64> {
    let coords = core_parse(value);
    vec![coords.x, coords.y]
}

/// Size of the image when scaled to span the rendered box on its relatively
/// shorter side, as `{ width, height }`.
///
/// # Errors
///
/// Returns an error if the natural size is zero (image not loaded) or any
/// dimension is not finite.
#[wasm_bindgen]
pub fn scale_to_contain(
    natural_width: f64,
    natural_height: f64,
    rect_width: f64,
    rect_height: f64,
) -> Result<JsValue, JsValue> {
    let scaled = try_scale_to_contain(
        Dimensions::new(natural_width, natural_height),
        Dimensions::new(rect_width, rect_height),
    )
    .map_err(|e| JsValue::from_str(&e.to_string()))?;
    to_js(&scaled)
}

/// Measure how much `object-fit: cover` crops an image on each axis.
///
/// # Arguments
///
/// * `natural_width`, `natural_height` - Natural image size (`img.naturalWidth`)
/// * `rect_width`, `rect_height` - Rendered box size
/// * `threshold_px` - Overflow below which an axis counts as not cropped
///   (the default is 1)
///
/// # Errors
///
/// Returns an error if the natural size is zero or any dimension is not finite.
#[wasm_bindgen]
pub fn compute_dimension_delta(
    natural_width: f64,
    natural_height: f64,
    rect_width: f64,
    rect_height: f64,
    threshold_px: Option<f64>,
) -> Result<JsDimensionDelta, JsValue> {
    try_compute_dimension_delta(
        Dimensions::new(natural_width, natural_height),
        Dimensions::new(rect_width, rect_height),
        threshold_px.unwrap_or(focalpoint_core::geometry::DELTA_THRESHOLD_PX),
    )
    .map(JsDimensionDelta::from)
    .map_err(|e| JsValue::from_str(&e.to_string()))
}


/// WASM-specific tests that require JsValue.
///
/// These tests use functions that return `Result<T, JsValue>` and can only
/// run on wasm32 targets. Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_compute_dimension_delta_width() {
        let delta = compute_dimension_delta(800.0, 600.0, 400.0, 400.0, None).unwrap();
        assert_eq!(delta.changed_dimension().as_deref(), Some("width"));
        assert!((delta.width_percent() - 25.0).abs() < 1e-9);
    }

    #[wasm_bindgen_test]
    fn test_compute_dimension_delta_custom_threshold() {
        let delta = compute_dimension_delta(440.0, 400.0, 400.0, 400.0, Some(50.0)).unwrap();
        assert_eq!(delta.changed_dimension(), None);
    }

    #[wasm_bindgen_test]
    fn test_compute_dimension_delta_unloaded_image() {
        assert!(compute_dimension_delta(0.0, 0.0, 400.0, 400.0, None).is_err());
    }

    #[wasm_bindgen_test]
    fn test_scale_to_contain() {
        let scaled = scale_to_contain(800.0, 600.0, 400.0, 400.0).unwrap();
        let height = js_sys::Reflect::get(&scaled, &"height".into()).unwrap();
        assert_eq!(height.as_f64(), Some(400.0));
    }

    #[wasm_bindgen_test]
    fn test_scale_to_contain_rejects_zero() {
        assert!(scale_to_contain(0.0, 600.0, 400.0, 400.0).is_err());
    }
}
