//! Editor configuration.
//!
//! Every field has a default, so hosts can pass a partial object (or nothing)
//! and override only what they need.

use serde::{Deserialize, Serialize};

use crate::aspect::{CatalogConfig, DEFAULT_SNAP_THRESHOLD, PRECISION};
use crate::geometry::DELTA_THRESHOLD_PX;

/// Tunables for the geometry engine and the aspect-ratio control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Pixel overflow below which an axis is not considered cropped.
    pub delta_threshold_px: f64,
    /// Aspect-ratio catalog policy.
    pub catalog: CatalogConfig,
    /// Integer steps across the full slider range.
    pub slider_precision: f64,
    /// Distance on the `[0, 1]` scale treated as resting on a tick.
    pub snap_threshold: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            delta_threshold_px: DELTA_THRESHOLD_PX,
            catalog: CatalogConfig::default(),
            slider_precision: PRECISION,
            snap_threshold: DEFAULT_SNAP_THRESHOLD,
        }
    }
}

impl EditorConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::new();
        assert_eq!(config.delta_threshold_px, 1.0);
        assert_eq!(config.slider_precision, 100_000.0);
        assert!((config.snap_threshold - 1.0 / 300.0).abs() < f64::EPSILON);
        assert_eq!(config.catalog.dedup_threshold, 0.01);
        assert!(config.catalog.widen_bounds);
        assert_eq!(config.catalog.original_name, "original");
        assert_eq!(config.catalog.ratios.len(), 14);
    }

    #[test]
    fn test_partial_override() {
        let mut config = EditorConfig::default();
        config.catalog.widen_bounds = false;
        assert_ne!(config, EditorConfig::default());
        assert_eq!(config.slider_precision, EditorConfig::default().slider_precision);
    }
}
