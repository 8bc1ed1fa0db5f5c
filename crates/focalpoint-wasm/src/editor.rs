//! WASM bindings for the object-position editor.
//!
//! The host wires DOM events to the editor: a `ResizeObserver` calls
//! `on_resize`, the image `load` event calls `on_source`, and pointer events
//! call the `pointer_*` methods. New `object-position` values are returned
//! from `pointer_move` and also passed to the optional change callback.

use crate::types::{config_from_js, JsDimensionDelta};
use focalpoint_core::{Coordinates, Dimensions, EditorConfig, FocalPointController};
use wasm_bindgen::prelude::*;

/// Drag-to-pan editor for one `<img>` with `object-fit: cover`.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const editor = new FocalPointEditor({ delta_threshold_px: 1 });
/// img.addEventListener('pointerdown', (e) => {
///   if (editor.pointer_down(e.pointerId, e.clientX, e.clientY, img.style.objectPosition)) {
///     img.setPointerCapture(e.pointerId);
///   }
/// });
/// img.addEventListener('pointermove', (e) => editor.pointer_move(e.pointerId, e.clientX, e.clientY));
/// img.addEventListener('pointerup', (e) => editor.pointer_up(e.pointerId));
/// ```
#[wasm_bindgen]
pub struct FocalPointEditor {
    inner: FocalPointController,
    on_change: Option<js_sys::Function>,
}

#[wasm_bindgen]
impl FocalPointEditor {
    /// Create an editor.
    ///
    /// # Arguments
    ///
    /// * `config` - Partial `EditorConfig` object, or `undefined` for defaults
    ///
    /// # Errors
    ///
    /// Returns an error if `config` cannot be read as an editor config.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<FocalPointEditor, JsValue> {
        Ok(Self::from_config(&config_from_js(config)?))
    }

    /// Register a callback receiving each new `object-position` string.
    pub fn set_on_change(&mut self, callback: Option<js_sys::Function>) {
        self.on_change = callback;
    }

    /// Report the rendered box size. Returns the CSS cursor to show.
    pub fn on_resize(&mut self, width: f64, height: f64) -> String {
        self.inner
            .on_resize(Dimensions::new(width, height))
            .as_css()
            .to_string()
    }

    /// Report the natural size of a newly loaded image. Returns the CSS cursor.
    pub fn on_source(&mut self, natural_width: f64, natural_height: f64) -> String {
        self.inner
            .on_source(Dimensions::new(natural_width, natural_height))
            .as_css()
            .to_string()
    }

    /// Forget the current image.
    pub fn clear_source(&mut self) {
        self.inner.clear_source();
    }

    /// Start a drag from the image's current `object-position`.
    ///
    /// Returns true if the image is cropped and can be panned.
    pub fn pointer_down(
        &mut self,
        pointer_id: Option<i32>,
        x: f64,
        y: f64,
        current_position: &str,
    ) -> bool {
        self.inner
            .pointer_down(pointer_id, Coordinates::new(x, y), current_position)
    }

    /// Pointer moved. Returns the new `object-position`, or `undefined` when
    /// no drag is active for this pointer or the image cannot be panned.
    pub fn pointer_move(&self, pointer_id: Option<i32>, x: f64, y: f64) -> Option<String> {
        let position = self.inner.pointer_move(pointer_id, Coordinates::new(x, y))?;
        self.notify(&position);
        Some(position)
    }

    /// End the drag. Returns false if the pointer did not own the session.
    pub fn pointer_up(&mut self, pointer_id: Option<i32>) -> bool {
        self.inner.pointer_up(pointer_id)
    }

    /// Abort the drag. Returns false if the pointer did not own the session.
    pub fn pointer_cancel(&mut self, pointer_id: Option<i32>) -> bool {
        self.inner.pointer_cancel(pointer_id)
    }

    /// CSS cursor for the current crop axis
    #[wasm_bindgen(getter)]
    pub fn cursor(&self) -> String {
        self.inner.cursor_hint().as_css().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn is_dragging(&self) -> bool {
        self.inner.is_dragging()
    }

    /// Latest crop measurement, `undefined` until an image has loaded
    #[wasm_bindgen(getter)]
    pub fn delta(&self) -> Option<JsDimensionDelta> {
        self.inner.delta().map(JsDimensionDelta::from)
    }
}

impl FocalPointEditor {
    pub(crate) fn from_config(config: &EditorConfig) -> Self {
        Self {
            inner: FocalPointController::new(config),
            on_change: None,
        }
    }

    fn notify(&self, position: &str) {
        let Some(callback) = &self.on_change else {
            return;
        };
        if let Err(err) = callback.call1(&JsValue::NULL, &JsValue::from_str(position)) {
            log::warn!("object-position change callback failed: {:?}", err);
        }
    }
}
