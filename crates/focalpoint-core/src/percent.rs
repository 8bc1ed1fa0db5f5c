//! Numeric helpers shared by the geometry and position code.

/// Clamp `value` into `[min, max]`.
///
/// A NaN `value` passes through unchanged.
///
/// # Panics
///
/// Panics if `min > max` or either bound is NaN.
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.clamp(min, max)
}

/// Express `value` as a percentage of `total`.
///
/// A zero `total` yields infinity or NaN; callers only pass a total that
/// exceeds the pan threshold.
#[inline]
pub fn to_percentage(value: f64, total: f64) -> f64 {
    (value / total) * 100.0
}

/// The amount that `percent` percent of `total` represents.
#[inline]
pub fn percentage_of(percent: f64, total: f64) -> f64 {
    total * percent / 100.0
}

/// Round to `decimals` places, half away from zero.
///
/// `f64::EPSILON` is added first so values like `1.005` whose binary form
/// sits just below the midpoint still round up.
#[inline]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    ((value + f64::EPSILON) * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(150.0, 0.0, 100.0), 100.0);
        assert_eq!(clamp(-20.0, 0.0, 100.0), 0.0);
        assert_eq!(clamp(42.0, 0.0, 100.0), 42.0);
        assert!(clamp(f64::NAN, 0.0, 100.0).is_nan());
    }

    #[test]
    #[should_panic]
    fn test_clamp_inverted_bounds_panics() {
        clamp(50.0, 100.0, 0.0);
    }

    #[test]
    #[should_panic]
    fn test_clamp_nan_bound_panics() {
        clamp(50.0, f64::NAN, 100.0);
    }

    #[test]
    fn test_to_percentage() {
        assert_eq!(to_percentage(25.0, 100.0), 25.0);
        assert_eq!(to_percentage(-50.0, 200.0), -25.0);
        assert!((to_percentage(133.333, 533.332) - 25.0).abs() < 1e-3);
    }

    #[test]
    fn test_percentage_of() {
        assert_eq!(percentage_of(25.0, 400.0), 100.0);
        assert_eq!(percentage_of(0.0, 400.0), 0.0);
    }

    #[test]
    fn test_round_to_two_decimals() {
        assert_eq!(round_to(33.3333, 2), 33.33);
        assert_eq!(round_to(12.346, 2), 12.35);
        assert_eq!(round_to(1.005, 2), 1.01);
        assert_eq!(round_to(50.0, 2), 50.0);
    }

    #[test]
    fn test_round_to_zero_decimals() {
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(2.4, 0), 2.0);
    }
}
