//! WASM-compatible wrapper types.
//!
//! This module provides JavaScript-friendly types that wrap the core
//! Focalpoint types, and the serde conversions used at the boundary.

use focalpoint_core::{EditorConfig, ImageDimensionDelta};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Crop measurement for an image, readable from JavaScript.
///
/// Wraps the core `ImageDimensionDelta`: how many pixels (and what percentage
/// of the scaled image) `object-fit: cover` hides on each axis.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy)]
pub struct JsDimensionDelta {
    inner: ImageDimensionDelta,
}

#[wasm_bindgen]
impl JsDimensionDelta {
    /// Hidden pixels on the horizontal axis
    #[wasm_bindgen(getter)]
    pub fn width_px(&self) -> f64 {
        self.inner.width.px
    }

    /// Hidden share of the scaled width, in percent
    #[wasm_bindgen(getter)]
    pub fn width_percent(&self) -> f64 {
        self.inner.width.percent
    }

    /// Hidden pixels on the vertical axis
    #[wasm_bindgen(getter)]
    pub fn height_px(&self) -> f64 {
        self.inner.height.px
    }

    /// Hidden share of the scaled height, in percent
    #[wasm_bindgen(getter)]
    pub fn height_percent(&self) -> f64 {
        self.inner.height.percent
    }

    /// `"width"`, `"height"`, or `undefined` when nothing is cropped
    #[wasm_bindgen(getter)]
    pub fn changed_dimension(&self) -> Option<String> {
        self.inner
            .changed_dimension
            .map(|d| d.as_str().to_string())
    }

    /// CSS cursor for the image: `col-resize`, `row-resize` or `crosshair`
    #[wasm_bindgen(getter)]
    pub fn cursor(&self) -> String {
        self.inner.cursor_hint().as_css().to_string()
    }

    /// Serialize to a plain object (`{ width, height, changedDimension }`)
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner)
    }
}

impl From<ImageDimensionDelta> for JsDimensionDelta {
    fn from(inner: ImageDimensionDelta) -> Self {
        Self { inner }
    }
}

impl JsDimensionDelta {
    #[allow(dead_code)] // Used by the native tests
    pub(crate) fn inner(&self) -> &ImageDimensionDelta {
        &self.inner
    }
}

/// Serialize a core value into a plain JavaScript object.
pub(crate) fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Read an `EditorConfig` from a JavaScript object.
///
/// `undefined` and `null` give the defaults; missing fields take their
/// default values.
pub(crate) fn config_from_js(value: JsValue) -> Result<EditorConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(EditorConfig::default());
    }
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Invalid editor config: {}", e)))
}
