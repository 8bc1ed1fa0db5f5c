//! Glue between host events and the geometry engine.
//!
//! The host forwards resize observations, image loads and pointer events;
//! the controller keeps the delta tracker and the drag state machine in sync
//! and hands back object-position strings to render.

use crate::config::EditorConfig;
use crate::drag::DragMapper;
use crate::geometry::{CursorHint, DeltaTracker, ImageDimensionDelta};
use crate::{Coordinates, Dimensions};

/// Object-position editor state for one image.
#[derive(Debug, Clone, Default)]
pub struct FocalPointController {
    tracker: DeltaTracker,
    drag: DragMapper,
}

impl FocalPointController {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            tracker: DeltaTracker::new(config.delta_threshold_px),
            drag: DragMapper::new(),
        }
    }

    /// The rendered box changed size. A running drag picks up the new delta.
    pub fn on_resize(&mut self, rect: Dimensions) -> CursorHint {
        let delta = self.tracker.notify_resize(rect);
        self.drag.update_dimension_delta(delta);
        self.tracker.cursor_hint()
    }

    /// A new image loaded with the given natural size.
    pub fn on_source(&mut self, natural: Dimensions) -> CursorHint {
        let delta = self.tracker.notify_source(natural);
        self.drag.update_dimension_delta(delta);
        self.tracker.cursor_hint()
    }

    /// The image was removed. Any drag in progress becomes inert.
    pub fn clear_source(&mut self) {
        self.tracker.clear_source();
        self.drag.update_dimension_delta(None);
    }

    pub fn delta(&self) -> Option<ImageDimensionDelta> {
        self.tracker.delta()
    }

    pub fn cursor_hint(&self) -> CursorHint {
        self.tracker.cursor_hint()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Start a drag from `current_position`.
    ///
    /// Returns true if the image can be panned, so the host knows whether
    /// capturing the pointer is worthwhile.
    pub fn pointer_down(
        &mut self,
        pointer_id: Option<i32>,
        pointer: Coordinates,
        current_position: &str,
    ) -> bool {
        let delta = self.tracker.delta();
        self.drag
            .pointer_down(current_position, pointer, delta, pointer_id);
        delta.map(|d| d.is_pannable()).unwrap_or(false)
    }

    /// Object-position to render for a pointer move, if any.
    pub fn pointer_move(&self, pointer_id: Option<i32>, pointer: Coordinates) -> Option<String> {
        self.drag.pointer_move(pointer, pointer_id)
    }

    pub fn pointer_up(&mut self, pointer_id: Option<i32>) -> bool {
        self.drag.pointer_up(pointer_id)
    }

    pub fn pointer_cancel(&mut self, pointer_id: Option<i32>) -> bool {
        self.drag.pointer_cancel(pointer_id)
    }
}
