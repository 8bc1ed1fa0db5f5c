//! Integer slider model over the log-scale catalog.
//!
//! Native range inputs step through integers, so the `[0, 1]` log position is
//! multiplied by a precision constant and rounded. Keyboard navigation snaps
//! to catalog ticks instead of moving by one raw step.

use serde::{Deserialize, Serialize};

use super::catalog::{AspectRatio, AspectRatioCatalog, CatalogError};
use super::precision::to_precise_aspect_ratio;
use crate::config::EditorConfig;

/// Distance on the `[0, 1]` scale treated as "already on this tick".
pub const DEFAULT_SNAP_THRESHOLD: f64 = 1.0 / 300.0;

/// Integer slider value for a log position.
#[inline]
pub fn to_slider_value(position: f64, precision: f64) -> i64 {
    (position * precision).round() as i64
}

/// Log position for an integer slider value.
#[inline]
pub fn from_slider_value(value: i64, precision: f64) -> f64 {
    value as f64 / precision
}

/// Keys the slider reacts to, named after `KeyboardEvent.key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderKey {
    ArrowLeft,
    ArrowRight,
    Home,
    End,
}

impl SliderKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(SliderKey::ArrowLeft),
            "ArrowRight" => Some(SliderKey::ArrowRight),
            "Home" => Some(SliderKey::Home),
            "End" => Some(SliderKey::End),
            _ => None,
        }
    }
}

/// Tick drawn under the slider for one catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulerTick {
    pub name: String,
    /// Precise ratio, stable across rebuilds.
    pub key: i64,
    /// Log position in `[0, 1]`.
    pub position: f64,
    /// Slider value the tick sits at.
    pub slider_value: i64,
}

/// Slider state for the aspect-ratio control.
#[derive(Debug, Clone)]
pub struct AspectRatioSlider {
    config: EditorConfig,
    catalog: AspectRatioCatalog,
}

impl AspectRatioSlider {
    pub fn new(config: EditorConfig) -> Result<Self, CatalogError> {
        Self::with_original(config, None)
    }

    /// Build the slider, rejecting a non-positive precision or a negative
    /// snap threshold.
    pub fn with_original(config: EditorConfig, original: Option<f64>) -> Result<Self, CatalogError> {
        let precision = config.slider_precision;
        if !(precision.is_finite() && precision > 0.0) {
            return Err(CatalogError::InvalidPrecision(precision));
        }
        let snap = config.snap_threshold;
        if !(snap.is_finite() && snap >= 0.0) {
            return Err(CatalogError::InvalidSnapThreshold(snap));
        }
        let catalog = AspectRatioCatalog::build(&config.catalog, original)?;
        Ok(Self { config, catalog })
    }

    pub fn catalog(&self) -> &AspectRatioCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Rebuild the catalog for a new natural image ratio.
    ///
    /// Does nothing if the ratio is unchanged. On error the previous catalog
    /// is kept.
    pub fn set_original(&mut self, original: Option<f64>) -> Result<(), CatalogError> {
        let incoming = original.filter(|v| v.is_finite() && *v > 0.0);
        if incoming == self.catalog.original() {
            return Ok(());
        }
        self.catalog = AspectRatioCatalog::build(&self.config.catalog, incoming)?;
        Ok(())
    }

    pub fn min_value(&self) -> i64 {
        0
    }

    pub fn max_value(&self) -> i64 {
        to_slider_value(1.0, self.config.slider_precision)
    }

    /// Slider value for `ratio`, clamped to the slider range.
    pub fn value_for_ratio(&self, ratio: f64) -> i64 {
        self.position_to_value(self.catalog.scale().position(ratio))
    }

    /// Aspect ratio for a raw slider value.
    pub fn ratio_for_value(&self, value: i64) -> f64 {
        self.catalog
            .scale()
            .ratio(from_slider_value(value, self.config.slider_precision))
    }

    /// Catalog entry the slider is resting on, if any.
    pub fn active_entry(&self, value: i64) -> Option<&AspectRatio> {
        let position = from_slider_value(value, self.config.slider_precision);
        self.catalog
            .entry_at_position(position, self.config.snap_threshold)
    }

    /// New slider value after a key press, or `None` if there is no tick to
    /// move to.
    ///
    /// Arrow keys jump to the neighbouring catalog tick, skipping the one the
    /// slider is already on. Home and End go to the first and last tick. A
    /// tick outside the slider range clamps to its end; landing back on
    /// `current_value` counts as no move.
    pub fn handle_key(&self, key: SliderKey, current_value: i64) -> Option<i64> {
        let current = from_slider_value(current_value, self.config.slider_precision);
        let threshold = self.config.snap_threshold;
        let target = match key {
            SliderKey::ArrowRight => self.catalog.next_position(current, threshold),
            SliderKey::ArrowLeft => self.catalog.previous_position(current, threshold),
            SliderKey::Home => self.catalog.first().map(|e| e.position),
            SliderKey::End => self.catalog.last().map(|e| e.position),
        }?;
        let value = self.position_to_value(target);
        (value != current_value).then_some(value)
    }

    /// One tick per catalog entry.
    pub fn ruler_ticks(&self) -> Vec<RulerTick> {
        self.catalog
            .entries()
            .iter()
            .map(|entry| RulerTick {
                name: entry.name.clone(),
                key: to_precise_aspect_ratio(entry.value),
                position: entry.position,
                slider_value: self.position_to_value(entry.position),
            })
            .collect()
    }

    fn position_to_value(&self, position: f64) -> i64 {
        to_slider_value(position, self.config.slider_precision).clamp(self.min_value(), self.max_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aspect::CatalogConfig;

    fn slider() -> AspectRatioSlider {
        AspectRatioSlider::new(EditorConfig::default()).unwrap()
    }

    fn value_of(slider: &AspectRatioSlider, name: &str) -> i64 {
        let entry = slider
            .catalog()
            .entries()
            .iter()
            .find(|e| e.name == name)
            .unwrap();
        slider.value_for_ratio(entry.value)
    }

    #[test]
    fn test_slider_value_conversion() {
        assert_eq!(to_slider_value(0.5, 100_000.0), 50_000);
        assert_eq!(to_slider_value(0.123456, 100_000.0), 12_346);
        assert_eq!(from_slider_value(25_000, 100_000.0), 0.25);
    }

    #[test]
    fn test_slider_key_from_str() {
        assert_eq!(SliderKey::from_key("ArrowLeft"), Some(SliderKey::ArrowLeft));
        assert_eq!(SliderKey::from_key("ArrowRight"), Some(SliderKey::ArrowRight));
        assert_eq!(SliderKey::from_key("Home"), Some(SliderKey::Home));
        assert_eq!(SliderKey::from_key("End"), Some(SliderKey::End));
        assert_eq!(SliderKey::from_key("ArrowUp"), None);
    }

    #[test]
    fn test_range() {
        let slider = slider();
        assert_eq!(slider.min_value(), 0);
        assert_eq!(slider.max_value(), 100_000);
        assert_eq!(slider.value_for_ratio(9.0 / 16.0), 0);
        assert_eq!(slider.value_for_ratio(4.0), 100_000);
    }

    #[test]
    fn test_value_for_ratio_clamps() {
        let slider = slider();
        assert_eq!(slider.value_for_ratio(0.1), 0);
        assert_eq!(slider.value_for_ratio(50.0), 100_000);
    }

    #[test]
    fn test_ratio_round_trip_through_value() {
        let slider = slider();
        for ratio in [0.6, 1.0, 1.5, 16.0 / 9.0, 3.0] {
            let back = slider.ratio_for_value(slider.value_for_ratio(ratio));
            // One slider step is 1e-5 of the log range
            assert!((back - ratio).abs() / ratio < 1e-4, "{} -> {}", ratio, back);
        }
    }

    #[test]
    fn test_arrow_right_snaps_to_next_tick() {
        let slider = slider();
        let square = value_of(&slider, "1:1");
        assert_eq!(
            slider.handle_key(SliderKey::ArrowRight, square),
            Some(value_of(&slider, "5:4"))
        );
    }

    #[test]
    fn test_arrow_left_snaps_to_previous_tick() {
        let slider = slider();
        let square = value_of(&slider, "1:1");
        assert_eq!(
            slider.handle_key(SliderKey::ArrowLeft, square),
            Some(value_of(&slider, "4:5"))
        );
    }

    #[test]
    fn test_arrow_skips_tick_within_threshold() {
        let slider = slider();
        // Slightly past 1:1 but within the snap threshold still counts as on it
        let near_square = value_of(&slider, "1:1") + 100;
        assert_eq!(
            slider.handle_key(SliderKey::ArrowRight, near_square),
            Some(value_of(&slider, "5:4"))
        );
        assert_eq!(
            slider.handle_key(SliderKey::ArrowLeft, near_square),
            Some(value_of(&slider, "4:5"))
        );
    }

    #[test]
    fn test_arrow_between_ticks() {
        let slider = slider();
        let between = (value_of(&slider, "1:1") + value_of(&slider, "5:4")) / 2;
        assert_eq!(
            slider.handle_key(SliderKey::ArrowRight, between),
            Some(value_of(&slider, "5:4"))
        );
        assert_eq!(
            slider.handle_key(SliderKey::ArrowLeft, between),
            Some(value_of(&slider, "1:1"))
        );
    }

    #[test]
    fn test_arrow_at_ends() {
        let slider = slider();
        assert_eq!(slider.handle_key(SliderKey::ArrowRight, slider.max_value()), None);
        assert_eq!(slider.handle_key(SliderKey::ArrowLeft, slider.min_value()), None);
    }

    #[test]
    fn test_home_end() {
        let slider = slider();
        assert_eq!(slider.handle_key(SliderKey::Home, 50_000), Some(0));
        assert_eq!(slider.handle_key(SliderKey::End, 50_000), Some(100_000));
    }

    #[test]
    fn test_active_entry() {
        let slider = slider();
        let value = value_of(&slider, "3:2");
        assert_eq!(slider.active_entry(value).unwrap().name, "3:2");
        assert!(slider.active_entry(value + 2_000).is_none());
    }

    #[test]
    fn test_set_original_rebuilds() {
        let mut slider = slider();
        slider.set_original(Some(1.505)).unwrap();
        let names: Vec<_> = slider.catalog().entries().iter().map(|e| e.name.clone()).collect();
        assert!(names.contains(&"original".to_string()));
        assert!(!names.contains(&"3:2".to_string()));

        slider.set_original(None).unwrap();
        assert!(slider.catalog().original().is_none());
        assert_eq!(slider.catalog().entries().len(), 14);
    }

    #[test]
    fn test_set_original_keeps_catalog_on_error() {
        let config = EditorConfig {
            catalog: CatalogConfig {
                ratios: vec![crate::aspect::NamedRatio::from_sides(1, 1)],
                ..CatalogConfig::default()
            },
            ..EditorConfig::default()
        };
        let mut slider = AspectRatioSlider::with_original(config, Some(2.0)).unwrap();
        // Removing the original collapses the range to a single ratio
        assert!(slider.set_original(None).is_err());
        assert_eq!(slider.catalog().original(), Some(2.0));
    }

    #[test]
    fn test_invalid_precision_rejected() {
        for precision in [0.0, -10.0, f64::NAN] {
            let config = EditorConfig {
                slider_precision: precision,
                ..EditorConfig::default()
            };
            assert!(matches!(
                AspectRatioSlider::new(config),
                Err(CatalogError::InvalidPrecision(_))
            ));
        }
    }

    #[test]
    fn test_invalid_snap_threshold_rejected() {
        for snap in [-0.01, f64::NAN, f64::INFINITY] {
            let config = EditorConfig {
                snap_threshold: snap,
                ..EditorConfig::default()
            };
            assert!(matches!(
                AspectRatioSlider::new(config),
                Err(CatalogError::InvalidSnapThreshold(_))
            ));
        }

        let config = EditorConfig {
            snap_threshold: 0.0,
            ..EditorConfig::default()
        };
        assert!(AspectRatioSlider::new(config).is_ok());
    }

    #[test]
    fn test_arrow_onto_clamped_tick_is_no_move() {
        // Without widening, an original below 9:16 sits left of the slider range
        let config = EditorConfig {
            catalog: CatalogConfig {
                widen_bounds: false,
                ..CatalogConfig::default()
            },
            ..EditorConfig::default()
        };
        let slider = AspectRatioSlider::with_original(config, Some(0.25)).unwrap();
        assert_eq!(slider.handle_key(SliderKey::ArrowLeft, 0), None);
        assert_eq!(slider.handle_key(SliderKey::Home, 0), None);
        assert_eq!(slider.handle_key(SliderKey::ArrowLeft, 2_000), Some(0));
    }

    #[test]
    fn test_ruler_ticks() {
        let slider = AspectRatioSlider::with_original(EditorConfig::default(), Some(1.2)).unwrap();
        let ticks = slider.ruler_ticks();
        assert_eq!(ticks.len(), 15);
        assert_eq!(ticks.first().unwrap().slider_value, 0);
        assert_eq!(ticks.last().unwrap().slider_value, 100_000);

        let original = ticks.iter().find(|t| t.name == "original").unwrap();
        assert_eq!(original.key, 120_000);
        for pair in ticks.windows(2) {
            assert!(pair[0].key < pair[1].key);
            assert!(pair[0].slider_value < pair[1].slider_value);
        }
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: Arrow right always moves strictly right, arrow left strictly left.
        #[test]
        fn prop_arrows_move_in_direction(value in 0i64..=100_000) {
            let slider = AspectRatioSlider::new(EditorConfig::default()).unwrap();
            if let Some(next) = slider.handle_key(SliderKey::ArrowRight, value) {
                prop_assert!(next > value);
            }
            if let Some(prev) = slider.handle_key(SliderKey::ArrowLeft, value) {
                prop_assert!(prev < value);
            }
        }

        /// Property: Arrow keys land exactly on catalog ticks.
        #[test]
        fn prop_arrows_land_on_ticks(value in 0i64..=100_000) {
            let slider = AspectRatioSlider::new(EditorConfig::default()).unwrap();
            let ticks: Vec<i64> = slider.ruler_ticks().iter().map(|t| t.slider_value).collect();
            for key in [SliderKey::ArrowLeft, SliderKey::ArrowRight] {
                if let Some(target) = slider.handle_key(key, value) {
                    prop_assert!(ticks.contains(&target));
                }
            }
        }

        /// Property: Slider values map to ratios inside the catalog bounds.
        #[test]
        fn prop_values_within_bounds(value in 0i64..=100_000) {
            let slider = AspectRatioSlider::new(EditorConfig::default()).unwrap();
            let ratio = slider.ratio_for_value(value);
            let scale = slider.catalog().scale();
            prop_assert!(ratio >= scale.min() * (1.0 - 1e-12));
            prop_assert!(ratio <= scale.max() * (1.0 + 1e-12));
        }
    }
}
