//! Focalpoint WASM - WebAssembly bindings for Focalpoint
//!
//! This crate exposes the focalpoint-core geometry engine to the browser:
//! the rendering surface feeds it resize, image-load and pointer events, and
//! the aspect-ratio control converts slider values and key presses.
//!
//! # Module Structure
//!
//! - `editor` - Object-position editor driven by pointer and resize events
//! - `aspect` - Logarithmic aspect-ratio slider and catalog
//! - `geometry` - Stateless geometry and object-position helpers
//! - `types` - WASM-compatible wrapper types and config conversion
//! - `logging` - `log` backend writing to the browser console
//!
//! # Usage
//!
//! ```typescript
//! import init, { FocalPointEditor } from '@focalpoint/wasm';
//!
//! await init();
//!
//! const editor = new FocalPointEditor({});
//! editor.set_on_change((position: string) => { img.style.objectPosition = position; });
//! editor.on_source(img.naturalWidth, img.naturalHeight);
//! new ResizeObserver(([entry]) => {
//!   const { width, height } = entry.contentRect;
//!   img.style.cursor = editor.on_resize(width, height);
//! }).observe(img);
//! ```

use wasm_bindgen::prelude::*;

mod aspect;
mod editor;
mod geometry;
mod logging;
mod types;

// Re-export public types
pub use aspect::{
    from_precise_aspect_ratio, to_aspect_ratio, to_log_position, to_precise_aspect_ratio,
    AspectRatioControl,
};
pub use editor::FocalPointEditor;
pub use geometry::{
    compute_dimension_delta, parse_object_position_string, scale_to_contain,
    to_object_position_string,
};
pub use logging::set_log_level;
pub use types::JsDimensionDelta;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    logging::install(log::Level::Warn);
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
