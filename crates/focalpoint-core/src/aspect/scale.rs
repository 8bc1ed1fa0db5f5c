//! Logarithmic mapping between aspect ratios and slider positions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Invalid log-scale bounds.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScaleError {
    /// A bound is zero, negative or not finite.
    #[error("Scale bounds must be finite and greater than zero, got min={min}, max={max}")]
    NonPositiveBound { min: f64, max: f64 },

    /// The range is empty or inverted.
    #[error("Scale minimum ({min}) must be less than maximum ({max})")]
    EmptyRange { min: f64, max: f64 },
}

/// Position of `ratio` on the log scale between `min` and `max`.
///
/// Exactly 0 at `min`, exactly 1 at `max`, 0.5 at the geometric mean.
/// Ratios outside the bounds extrapolate outside `[0, 1]`; nothing is clamped.
#[inline]
pub fn to_log_position(ratio: f64, min: f64, max: f64) -> f64 {
    let log_min = min.ln();
    (ratio.ln() - log_min) / (max.ln() - log_min)
}

/// Inverse of [`to_log_position`].
#[inline]
pub fn to_aspect_ratio(position: f64, min: f64, max: f64) -> f64 {
    let log_min = min.ln();
    (position * (max.ln() - log_min) + log_min).exp()
}

/// Validated log-scale bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogScale {
    min: f64,
    max: f64,
}

impl LogScale {
    pub fn new(min: f64, max: f64) -> Result<Self, ScaleError> {
        if !(min.is_finite() && max.is_finite() && min > 0.0 && max > 0.0) {
            return Err(ScaleError::NonPositiveBound { min, max });
        }
        if min >= max {
            return Err(ScaleError::EmptyRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Log position of `ratio`.
    pub fn position(&self, ratio: f64) -> f64 {
        to_log_position(ratio, self.min, self.max)
    }

    /// Ratio at log `position`.
    pub fn ratio(&self, position: f64) -> f64 {
        to_aspect_ratio(position, self.min, self.max)
    }

    /// True if `ratio` lies within the bounds.
    pub fn contains(&self, ratio: f64) -> bool {
        (self.min..=self.max).contains(&ratio)
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
