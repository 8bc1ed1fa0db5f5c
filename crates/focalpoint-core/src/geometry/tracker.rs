//! Recompute-on-notify wrapper around the dimension-delta detector.
//!
//! The host forwards resize observations and image-source changes here. The
//! tracker keeps the latest inputs and the delta derived from them; the
//! geometry functions themselves stay pure.

use super::delta::{
    compute_dimension_delta_with_threshold, CursorHint, ImageDimensionDelta, DELTA_THRESHOLD_PX,
};
use crate::Dimensions;

/// Single-writer cache of the latest [`ImageDimensionDelta`].
#[derive(Debug, Clone)]
pub struct DeltaTracker {
    natural: Option<Dimensions>,
    rect: Option<Dimensions>,
    threshold_px: f64,
    delta: Option<ImageDimensionDelta>,
}

impl Default for DeltaTracker {
    fn default() -> Self {
        Self::new(DELTA_THRESHOLD_PX)
    }
}

impl DeltaTracker {
    pub fn new(threshold_px: f64) -> Self {
        Self {
            natural: None,
            rect: None,
            threshold_px,
            delta: None,
        }
    }

    /// The rendered box changed size.
    pub fn notify_resize(&mut self, rect: Dimensions) -> Option<ImageDimensionDelta> {
        self.rect = Some(rect);
        self.recompute()
    }

    /// A new image finished loading with the given natural size.
    pub fn notify_source(&mut self, natural: Dimensions) -> Option<ImageDimensionDelta> {
        self.natural = Some(natural);
        self.recompute()
    }

    /// The image was removed; nothing can be panned until a new source loads.
    pub fn clear_source(&mut self) {
        self.natural = None;
        self.delta = None;
    }

    /// Latest delta, or `None` until both a loaded source and a rendered box
    /// have been reported.
    pub fn delta(&self) -> Option<ImageDimensionDelta> {
        self.delta
    }

    pub fn natural(&self) -> Option<Dimensions> {
        self.natural
    }

    pub fn rect(&self) -> Option<Dimensions> {
        self.rect
    }

    pub fn cursor_hint(&self) -> CursorHint {
        self.delta
            .map(|d| d.cursor_hint())
            .unwrap_or(CursorHint::Crosshair)
    }

    fn recompute(&mut self) -> Option<ImageDimensionDelta> {
        self.delta = match (self.natural, self.rect) {
            (Some(natural), Some(rect)) if natural.is_positive() => {
                let delta = compute_dimension_delta_with_threshold(natural, rect, self.threshold_px);
                log::trace!(
                    "dimension delta for {}x{} in {}x{}: {:?}",
                    natural.width,
                    natural.height,
                    rect.width,
                    rect.height,
                    delta.changed_dimension
                );
                Some(delta)
            }
            (Some(natural), Some(_)) => {
                log::debug!(
                    "skipping dimension delta, natural size {}x{} not loaded",
                    natural.width,
                    natural.height
                );
                None
            }
            _ => None,
        };
        self.delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ChangedDimension;

    #[test]
    fn test_no_delta_until_both_inputs_known() {
        let mut tracker = DeltaTracker::default();
        assert!(tracker.delta().is_none());

        assert!(tracker.notify_resize(Dimensions::new(400.0, 400.0)).is_none());
        let delta = tracker.notify_source(Dimensions::new(800.0, 600.0));
        assert_eq!(delta.and_then(|d| d.changed_dimension), Some(ChangedDimension::Width));
    }

    #[test]
    fn test_resize_recomputes() {
        let mut tracker = DeltaTracker::default();
        tracker.notify_source(Dimensions::new(800.0, 600.0));
        tracker.notify_resize(Dimensions::new(400.0, 400.0));
        assert_eq!(tracker.cursor_hint(), CursorHint::ColResize);

        // A tall narrow box now crops the other way around
        tracker.notify_resize(Dimensions::new(800.0, 300.0));
        assert_eq!(tracker.cursor_hint(), CursorHint::RowResize);

        // Matching ratio: nothing to pan
        tracker.notify_resize(Dimensions::new(400.0, 300.0));
        assert_eq!(tracker.cursor_hint(), CursorHint::Crosshair);
    }

    #[test]
    fn test_unloaded_source_yields_no_delta() {
        let mut tracker = DeltaTracker::default();
        tracker.notify_resize(Dimensions::new(400.0, 400.0));
        assert!(tracker.notify_source(Dimensions::new(0.0, 0.0)).is_none());
        assert_eq!(tracker.cursor_hint(), CursorHint::Crosshair);
    }

    #[test]
    fn test_clear_source() {
        let mut tracker = DeltaTracker::default();
        tracker.notify_source(Dimensions::new(800.0, 600.0));
        tracker.notify_resize(Dimensions::new(400.0, 400.0));
        assert!(tracker.delta().is_some());

        tracker.clear_source();
        assert!(tracker.delta().is_none());
        assert!(tracker.natural().is_none());
        assert_eq!(tracker.rect(), Some(Dimensions::new(400.0, 400.0)));
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut tracker = DeltaTracker::default();
        tracker.notify_source(Dimensions::new(800.0, 600.0));
        let first = tracker.notify_resize(Dimensions::new(400.0, 400.0));
        let second = tracker.notify_resize(Dimensions::new(400.0, 400.0));
        assert_eq!(first, second);
    }
}
