//! Aspect-ratio control: logarithmic scale, named-ratio catalog and slider.
//!
//! Aspect ratios span a multiplicative range (9:16 is as far from 1:1 as
//! 16:9 is), so the slider works on a log scale where equal slider distance
//! means an equal ratio *factor*.
//!
//! # Representations
//!
//! - **Ratio** - `width / height` as a float, always `> 0`
//! - **Position** - `[0, 1]` on the log scale between the catalog bounds
//! - **Slider value** - position times the slider precision, rounded to an
//!   integer for native range inputs
//! - **Precise ratio** - ratio times [`PRECISION`], rounded; a stable key for
//!   ruler ticks independent of the log scale

mod catalog;
mod precision;
mod scale;
mod slider;

pub use catalog::{
    aspect_ratio_of, default_ratios, AspectRatio, AspectRatioCatalog, CatalogConfig, CatalogError,
    NamedRatio, DEFAULT_DEDUP_THRESHOLD, ORIGINAL_RATIO_NAME,
};
pub use precision::{from_precise_aspect_ratio, to_precise_aspect_ratio, PRECISION};
pub use scale::{to_aspect_ratio, to_log_position, LogScale, ScaleError};
pub use slider::{
    from_slider_value, to_slider_value, AspectRatioSlider, RulerTick, SliderKey,
    DEFAULT_SNAP_THRESHOLD,
};
