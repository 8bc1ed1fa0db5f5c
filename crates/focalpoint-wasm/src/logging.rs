//! Browser console logging.
//!
//! focalpoint-core logs drag sessions and catalog rebuilds through `log`;
//! `wasm-logger` routes those records to the browser console.

use log::LevelFilter;
use wasm_bindgen::prelude::*;

/// Install the console logger. Only the first call has any effect.
pub(crate) fn install(level: log::Level) {
    #[cfg(target_arch = "wasm32")]
    wasm_logger::init(wasm_logger::Config::new(level));

    #[cfg(not(target_arch = "wasm32"))]
    let _ = level;
}

/// Change the console log level at runtime.
///
/// Accepts `off`, `error`, `warn`, `info`, `debug` or `trace`, in any case.
///
/// # Example (TypeScript)
///
/// ```typescript
/// set_log_level('debug'); // show drag sessions and catalog rebuilds
/// ```
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let filter: LevelFilter = level
        .parse()
        .map_err(|_| JsValue::from_str(&format!("Unknown log level: {}", level)))?;
    log::set_max_level(filter);
    Ok(())
}
