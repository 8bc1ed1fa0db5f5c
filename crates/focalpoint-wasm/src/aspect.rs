//! WASM bindings for the aspect-ratio slider.
//!
//! The slider is a native `<input type="range">` running from `min_value` to
//! `max_value`. Values map onto a logarithmic aspect-ratio scale; the ruler
//! ticks mark the named ratios of the catalog.

use crate::types::{config_from_js, to_js};
use focalpoint_core::aspect::{
    aspect_ratio_of, from_precise_aspect_ratio as core_from_precise,
    to_aspect_ratio as core_to_aspect_ratio, to_log_position as core_to_log_position,
    to_precise_aspect_ratio as core_to_precise,
};
use focalpoint_core::{AspectRatioSlider, Dimensions, EditorConfig, SliderKey};
use wasm_bindgen::prelude::*;

/// Slider state for picking an aspect ratio.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const control = new AspectRatioControl({});
/// control.set_original_from_dimensions(img.naturalWidth, img.naturalHeight);
/// input.min = String(control.min_value);
/// input.max = String(control.max_value);
/// input.addEventListener('keydown', (e) => {
///   const next = control.handle_key(e.key, Number(input.value));
///   if (next !== undefined) {
///     e.preventDefault();
///     input.value = String(next);
///   }
/// });
/// ```
#[wasm_bindgen]
pub struct AspectRatioControl {
    inner: AspectRatioSlider,
}

#[wasm_bindgen]
impl AspectRatioControl {
    /// Create a control with no original ratio.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` cannot be read, its ratio list is empty or
    /// holds a non-positive ratio, or a threshold or the precision is out of
    /// range.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<AspectRatioControl, JsValue> {
        Self::from_config(config_from_js(config)?).map_err(|e| JsValue::from_str(&e))
    }

    /// Set the natural ratio of the current image, or clear it with `undefined`.
    pub fn set_original(&mut self, ratio: Option<f64>) -> Result<(), JsValue> {
        self.inner
            .set_original(ratio)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Set the original ratio from a natural image size. A zero size clears it.
    pub fn set_original_from_dimensions(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        self.set_original(aspect_ratio_of(Dimensions::new(width, height)))
    }

    #[wasm_bindgen(getter)]
    pub fn min_value(&self) -> i32 {
        to_i32(self.inner.min_value())
    }

    #[wasm_bindgen(getter)]
    pub fn max_value(&self) -> i32 {
        to_i32(self.inner.max_value())
    }

    /// Natural ratio of the current image, if set
    #[wasm_bindgen(getter)]
    pub fn original(&self) -> Option<f64> {
        self.inner.catalog().original()
    }

    /// Slider value for an aspect ratio, clamped to the slider range.
    pub fn value_for_ratio(&self, ratio: f64) -> i32 {
        to_i32(self.inner.value_for_ratio(ratio))
    }

    /// Aspect ratio for a slider value.
    pub fn ratio_for_value(&self, value: i32) -> f64 {
        self.inner.ratio_for_value(i64::from(value))
    }

    /// Name of the catalog ratio the slider rests on, if any.
    pub fn active_entry(&self, value: i32) -> Option<String> {
        self.inner
            .active_entry(i64::from(value))
            .map(|entry| entry.name.clone())
    }

    /// Slider value after a `keydown`, or `undefined` if the key is not
    /// handled or there is no tick in that direction.
    pub fn handle_key(&self, key: &str, current_value: i32) -> Option<i32> {
        let key = SliderKey::from_key(key)?;
        self.inner
            .handle_key(key, i64::from(current_value))
            .map(to_i32)
    }

    /// Catalog entries as `[{ name, value, position }]`, sorted by ratio.
    pub fn catalog(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.catalog().entries())
    }

    /// Ruler ticks as `[{ name, key, position, slider_value }]`.
    pub fn ruler_ticks(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.ruler_ticks())
    }
}

impl AspectRatioControl {
    pub(crate) fn from_config(config: EditorConfig) -> Result<Self, String> {
        AspectRatioSlider::new(config)
            .map(|inner| Self { inner })
            .map_err(|e| e.to_string())
    }
}

/// Slider values stay within `[0, precision]`; saturate anything outside i32.
fn to_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Log-scale position of `ratio` between `min` and `max`.
#[wasm_bindgen]
pub fn to_log_position(ratio: f64, min: f64, max: f64) -> f64 {
    core_to_log_position(ratio, min, max)
}

/// Aspect ratio at log-scale `position` between `min` and `max`.
#[wasm_bindgen]
pub fn to_aspect_ratio(position: f64, min: f64, max: f64) -> f64 {
    core_to_aspect_ratio(position, min, max)
}

/// Ratio scaled to a fixed-precision integer key.
///
/// Returned as a float since JavaScript numbers hold these keys exactly.
#[wasm_bindgen]
pub fn to_precise_aspect_ratio(ratio: f64) -> f64 {
    core_to_precise(ratio) as f64
}

/// Inverse of [`to_precise_aspect_ratio`].
#[wasm_bindgen]
pub fn from_precise_aspect_ratio(precise: f64) -> f64 {
    core_from_precise(precise.round() as i64)
}
