//! Object-position codec.
//!
//! Converts between [`Coordinates`] in percent and the CSS `"X% Y%"` string
//! consumed by the rendering surface.
//!
//! # Format
//!
//! - Each axis is clamped to `[0, 100]` and rounded to two decimals on write
//! - Numbers are printed in their shortest form: `"100% 0%"`, `"33.33% 12.5%"`
//! - Parsing is permissive: a malformed component becomes NaN rather than an
//!   error. [`ObjectPosition::from_str`] is the strict alternative.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::percent::{clamp, round_to};
use crate::Coordinates;

/// Lowest object-position percentage on either axis.
pub const POSITION_MIN: f64 = 0.0;

/// Highest object-position percentage on either axis.
pub const POSITION_MAX: f64 = 100.0;

/// Decimal places kept when serializing.
const POSITION_DECIMALS: i32 = 2;

/// Error returned by the strict object-position parser.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PositionParseError {
    /// Fewer than two space-separated components.
    #[error("Object position must have an x and a y component, got {0:?}")]
    MissingComponent(String),

    /// A component does not end in `%`.
    #[error("Object position component {0:?} is missing a trailing '%'")]
    MissingPercent(String),

    /// A component is not a finite number.
    #[error("Object position component {0:?} is not a finite number")]
    InvalidNumber(String),

    /// More than two components.
    #[error("Unexpected trailing input in object position: {0:?}")]
    TrailingInput(String),
}

/// An object-position in percent, `(0, 0)` = top-left, `(100, 100)` = bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectPosition {
    pub x: f64,
    pub y: f64,
}

impl ObjectPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The CSS initial value, `50% 50%`.
    pub fn center() -> Self {
        Self::new(50.0, 50.0)
    }

    /// Clamp both axes into range and round to two decimals.
    pub fn normalized(self) -> Self {
        Self {
            x: round_to(clamp(self.x, POSITION_MIN, POSITION_MAX), POSITION_DECIMALS),
            y: round_to(clamp(self.y, POSITION_MIN, POSITION_MAX), POSITION_DECIMALS),
        }
    }

    pub fn coordinates(self) -> Coordinates {
        Coordinates::new(self.x, self.y)
    }
}

impl Default for ObjectPosition {
    fn default() -> Self {
        Self::center()
    }
}

impl From<Coordinates> for ObjectPosition {
    fn from(coords: Coordinates) -> Self {
        Self::new(coords.x, coords.y)
    }
}

impl fmt::Display for ObjectPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let normalized = self.normalized();
        write!(f, "{}% {}%", normalized.x, normalized.y)
    }
}

impl FromStr for ObjectPosition {
    type Err = PositionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(' ');
        let x = parts
            .next()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| PositionParseError::MissingComponent(s.to_string()))?;
        let y = parts
            .next()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| PositionParseError::MissingComponent(s.to_string()))?;
        if parts.next().is_some() {
            return Err(PositionParseError::TrailingInput(s.to_string()));
        }
        Ok(Self::new(parse_strict(x)?, parse_strict(y)?))
    }
}

fn parse_strict(component: &str) -> Result<f64, PositionParseError> {
    let number = component
        .strip_suffix('%')
        .ok_or_else(|| PositionParseError::MissingPercent(component.to_string()))?;
    number
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| PositionParseError::InvalidNumber(component.to_string()))
}

/// Serialize coordinates in percent as `"X% Y%"`.
///
/// # Example
///
/// ```
/// use focalpoint_core::{to_object_position_string, Coordinates};
///
/// assert_eq!(to_object_position_string(Coordinates::new(150.0, -20.0)), "100% 0%");
/// ```
pub fn to_object_position_string(coords: Coordinates) -> String {
    ObjectPosition::from(coords).to_string()
}

/// Parse `"X% Y%"` into coordinates without validation.
///
/// Splits on a single space and strips the `%` suffix. Components that are
/// missing or non-numeric come back as NaN; values are not re-clamped.
pub fn parse_object_position_string(s: &str) -> Coordinates {
    let mut parts = s.split(' ');
    let x = parse_permissive(parts.next());
    let y = parse_permissive(parts.next());
    Coordinates::new(x, y)
}

fn parse_permissive(component: Option<&str>) -> f64 {
    component
        .map(|c| c.trim_end_matches('%'))
        .and_then(|c| c.parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
