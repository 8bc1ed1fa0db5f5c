//! Fixed-precision codec for aspect ratios.
//!
//! Stores a ratio as an integer so it can be used as a sort key or a ruler
//! coordinate without float drift.

/// Multiplier between a ratio and its integer form.
pub const PRECISION: f64 = 100_000.0;

/// `round(ratio * PRECISION)`.
#[inline]
pub fn to_precise_aspect_ratio(ratio: f64) -> i64 {
    (ratio * PRECISION).round() as i64
}

/// `precise / PRECISION`.
#[inline]
pub fn from_precise_aspect_ratio(precise: i64) -> f64 {
    precise as f64 / PRECISION
}


// ============================================================================
// Property-Based Tests
// ============================================================================
