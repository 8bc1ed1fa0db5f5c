//! Named aspect-ratio catalog.
//!
//! The catalog is a sorted list of named ratios, each with its log-scale
//! position. When the image's natural ratio is known it is inserted as an
//! `"original"` entry and catalog entries that are nearly the same ratio are
//! dropped, so the slider never shows two ticks on top of each other.
//!
//! # Deduplication
//!
//! A catalog entry is dropped when it lies within `dedup_threshold` of the
//! original, relative to the original's value: with the default 1%, an
//! original of 1.5 removes entries in `(1.485, 1.515)`.
//!
//! # Bounds
//!
//! The scale bounds come from the configured ratios. With `widen_bounds` the
//! bounds are stretched to include the original, keeping every position in
//! `[0, 1]`. Without it, an original outside the catalog range gets a position
//! outside `[0, 1]`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::scale::{LogScale, ScaleError};
use crate::Dimensions;

/// Name given to the entry representing the image's natural ratio.
pub const ORIGINAL_RATIO_NAME: &str = "original";

/// Relative distance from the original within which catalog entries are dropped.
pub const DEFAULT_DEDUP_THRESHOLD: f64 = 0.01;

/// Errors from building a catalog.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// No ratios configured.
    #[error("Aspect ratio catalog is empty")]
    Empty,

    /// A configured ratio has a non-positive or non-finite side.
    #[error("Invalid aspect ratio {name:?}: {width}:{height}")]
    InvalidRatio {
        name: String,
        width: f64,
        height: f64,
    },

    /// The ratios do not span a usable range.
    #[error("Invalid catalog bounds: {0}")]
    Bounds(#[from] ScaleError),

    /// The dedup threshold is zero, negative or not finite.
    #[error("Dedup threshold must be finite and greater than zero, got {0}")]
    InvalidDedupThreshold(f64),

    /// The slider precision is zero, negative or not finite.
    #[error("Slider precision must be finite and greater than zero, got {0}")]
    InvalidPrecision(f64),

    /// The snap threshold is negative or not finite.
    #[error("Snap threshold must be finite and not negative, got {0}")]
    InvalidSnapThreshold(f64),
}

/// A configured ratio before positions are assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedRatio {
    pub name: String,
    pub width: f64,
    pub height: f64,
}

impl NamedRatio {
    pub fn new(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }

    /// Ratio named `"W:H"` after its integer sides.
    pub fn from_sides(width: u32, height: u32) -> Self {
        Self::new(format!("{}:{}", width, height), width as f64, height as f64)
    }

    pub fn value(&self) -> f64 {
        self.width / self.height
    }

    fn validate(&self) -> Result<f64, CatalogError> {
        let valid = self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0;
        if !valid {
            return Err(CatalogError::InvalidRatio {
                name: self.name.clone(),
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.value())
    }
}

/// Standard photo, print and screen ratios.
pub fn default_ratios() -> Vec<NamedRatio> {
    [
        (9, 16),
        (4, 5),
        (5, 7),
        (3, 4),
        (3, 5),
        (2, 3),
        (1, 1),
        (3, 2),
        (5, 3),
        (4, 3),
        (7, 5),
        (5, 4),
        (16, 9),
        (4, 1),
    ]
    .into_iter()
    .map(|(w, h)| NamedRatio::from_sides(w, h))
    .collect()
}

/// Catalog construction policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Ratios shown on the slider, in any order.
    pub ratios: Vec<NamedRatio>,
    /// Relative distance from the original below which entries are dropped.
    pub dedup_threshold: f64,
    /// Stretch the scale bounds to include the original ratio.
    pub widen_bounds: bool,
    /// Name of the inserted original entry.
    pub original_name: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            ratios: default_ratios(),
            dedup_threshold: DEFAULT_DEDUP_THRESHOLD,
            widen_bounds: true,
            original_name: ORIGINAL_RATIO_NAME.to_string(),
        }
    }
}

/// A catalog entry with its slider position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectRatio {
    pub name: String,
    /// `width / height`.
    pub value: f64,
    /// Log-scale position, `[0, 1]` within the catalog bounds.
    pub position: f64,
}

impl AspectRatio {
    /// Natural ratio of an image; `None` until it reports a non-zero size.
    pub fn from_dimensions(name: impl Into<String>, dims: Dimensions, scale: &LogScale) -> Option<Self> {
        let value = aspect_ratio_of(dims)?;
        Some(Self {
            name: name.into(),
            value,
            position: scale.position(value),
        })
    }
}

/// `width / height`, or `None` for an empty or unloaded image.
pub fn aspect_ratio_of(dims: Dimensions) -> Option<f64> {
    dims.is_positive().then(|| dims.aspect_ratio())
}

/// Sorted catalog with positions on a shared log scale.
#[derive(Debug, Clone, PartialEq)]
pub struct AspectRatioCatalog {
    entries: Vec<AspectRatio>,
    scale: LogScale,
    original: Option<f64>,
}

impl AspectRatioCatalog {
    /// Build from `config`, inserting `original` if it is a valid ratio.
    ///
    /// Invalid originals (zero, negative, NaN) are ignored so the catalog can
    /// be built before an image has loaded.
    pub fn build(config: &CatalogConfig, original: Option<f64>) -> Result<Self, CatalogError> {
        if config.ratios.is_empty() {
            return Err(CatalogError::Empty);
        }
        if !(config.dedup_threshold.is_finite() && config.dedup_threshold > 0.0) {
            return Err(CatalogError::InvalidDedupThreshold(config.dedup_threshold));
        }

        let mut named = Vec::with_capacity(config.ratios.len() + 1);
        for ratio in &config.ratios {
            named.push((ratio.name.clone(), ratio.validate()?));
        }

        let (mut min, mut max) = named
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (_, v)| {
                (lo.min(*v), hi.max(*v))
            });

        let original = original.filter(|v| v.is_finite() && *v > 0.0);
        if let Some(original) = original {
            let threshold = original * config.dedup_threshold;
            named.retain(|(_, value)| (value - original).abs() >= threshold);
            named.push((config.original_name.clone(), original));

            if config.widen_bounds {
                min = min.min(original);
                max = max.max(original);
            }
        }

        let scale = LogScale::new(min, max)?;
        named.sort_by(|a, b| a.1.total_cmp(&b.1));

        let entries: Vec<AspectRatio> = named
            .into_iter()
            .map(|(name, value)| AspectRatio {
                name,
                value,
                position: scale.position(value),
            })
            .collect();

        log::debug!(
            "aspect ratio catalog rebuilt: {} entries, bounds [{}, {}], original {:?}",
            entries.len(),
            scale.min(),
            scale.max(),
            original
        );

        Ok(Self {
            entries,
            scale,
            original,
        })
    }

    /// Entries sorted ascending by value.
    pub fn entries(&self) -> &[AspectRatio] {
        &self.entries
    }

    pub fn scale(&self) -> &LogScale {
        &self.scale
    }

    /// The inserted original ratio, if any.
    pub fn original(&self) -> Option<f64> {
        self.original
    }

    pub fn first(&self) -> Option<&AspectRatio> {
        self.entries.first()
    }

    pub fn last(&self) -> Option<&AspectRatio> {
        self.entries.last()
    }

    /// Entry whose value is multiplicatively closest to `ratio`.
    pub fn nearest_entry(&self, ratio: f64) -> Option<&AspectRatio> {
        let target = ratio.ln();
        self.entries
            .iter()
            .min_by(|a, b| {
                let da = (a.value.ln() - target).abs();
                let db = (b.value.ln() - target).abs();
                da.total_cmp(&db)
            })
    }

    /// Entry whose position is within `threshold` of `position`.
    pub fn entry_at_position(&self, position: f64, threshold: f64) -> Option<&AspectRatio> {
        self.entries
            .iter()
            .find(|entry| (entry.position - position).abs() <= threshold)
    }

    /// Smallest entry position strictly greater than `current + threshold`.
    pub fn next_position(&self, current: f64, threshold: f64) -> Option<f64> {
        self.entries
            .iter()
            .map(|entry| entry.position)
            .find(|position| *position > current + threshold)
    }

    /// Largest entry position strictly less than `current - threshold`.
    pub fn previous_position(&self, current: f64, threshold: f64) -> Option<f64> {
        self.entries
            .iter()
            .rev()
            .map(|entry| entry.position)
            .find(|position| *position < current - threshold)
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
