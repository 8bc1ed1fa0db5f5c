//! Drag-to-position mapper.
//!
//! Turns a pointer-drag gesture into a new object-position. Panning is only
//! possible along the axis cover-fit crops; the other axis already shows the
//! image edge to edge, so pointer movement along it is discarded.
//!
//! # State Machine
//!
//! ```text
//! Idle --pointer_down--> Dragging --pointer_up / pointer_cancel--> Idle
//! ```
//!
//! Moves received while idle, or while the cropped axis is unknown, emit
//! nothing.
//!
//! # Direction
//!
//! Dragging right or down decreases the percentage on that axis: the pointer
//! moves the image, not the viewport.

use crate::geometry::{ChangedDimension, ImageDimensionDelta};
use crate::percent::{clamp, to_percentage};
use crate::position::{parse_object_position_string, to_object_position_string};
use crate::Coordinates;

/// Largest position swing a single gesture can apply, in percent.
const MAX_POSITION_DELTA: f64 = 100.0;

/// Compute the object-position for a pointer at `pointer_current` during a
/// drag that started at `pointer_start` with the image at `start_position`.
///
/// Returns `None` when `delta` has no cropped axis.
///
/// # Example
///
/// ```
/// use focalpoint_core::{map_drag_to_position, AxisDelta, ChangedDimension, Coordinates, ImageDimensionDelta};
///
/// let delta = ImageDimensionDelta {
///     width: AxisDelta { px: 100.0, percent: 25.0 },
///     height: AxisDelta::default(),
///     changed_dimension: Some(ChangedDimension::Width),
/// };
/// let next = map_drag_to_position("50% 50%", Coordinates::new(0.0, 0.0), Coordinates::new(25.0, 0.0), &delta);
/// assert_eq!(next.as_deref(), Some("25% 50%"));
/// ```
pub fn map_drag_to_position(
    start_position: &str,
    pointer_start: Coordinates,
    pointer_current: Coordinates,
    delta: &ImageDimensionDelta,
) -> Option<String> {
    let changed = delta.changed_dimension?;
    let pointer_delta = pointer_current.delta_from(pointer_start);
    let mut position = parse_object_position_string(start_position);

    match changed {
        ChangedDimension::Width => {
            position.x -= position_delta(pointer_delta.x, delta.width.px);
        }
        ChangedDimension::Height => {
            position.y -= position_delta(pointer_delta.y, delta.height.px);
        }
    }

    Some(to_object_position_string(position))
}

/// Pointer pixels as a percentage of the pan range, limited to one full swing.
fn position_delta(pointer_px: f64, range_px: f64) -> f64 {
    clamp(
        to_percentage(pointer_px, range_px),
        -MAX_POSITION_DELTA,
        MAX_POSITION_DELTA,
    )
}

/// Ephemeral state for one drag gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    /// Object-position when the pointer went down.
    pub object_position_start: String,
    /// Pointer location in viewport pixels when the pointer went down.
    pub pointer_start: Coordinates,
    /// Crop measurement used to map this gesture.
    pub dimension_delta: Option<ImageDimensionDelta>,
    /// Pointer that owns the gesture, if the host tracks pointer ids.
    pub pointer_id: Option<i32>,
}

impl DragSession {
    /// Object-position for the pointer at `pointer`, or `None` if inert.
    pub fn position_at(&self, pointer: Coordinates) -> Option<String> {
        let delta = self.dimension_delta.as_ref()?;
        map_drag_to_position(
            &self.object_position_start,
            self.pointer_start,
            pointer,
            delta,
        )
    }

    fn accepts(&self, pointer_id: Option<i32>) -> bool {
        match (self.pointer_id, pointer_id) {
            (Some(owner), Some(id)) => owner == id,
            _ => true,
        }
    }
}

/// Drag gesture state machine.
#[derive(Debug, Clone, Default)]
pub struct DragMapper {
    session: Option<DragSession>,
}

impl DragMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Idle -> Dragging. A pointer-down during a drag restarts the session.
    pub fn pointer_down(
        &mut self,
        object_position: &str,
        pointer: Coordinates,
        dimension_delta: Option<ImageDimensionDelta>,
        pointer_id: Option<i32>,
    ) {
        log::debug!(
            "drag start at ({}, {}) from {:?}",
            pointer.x,
            pointer.y,
            object_position
        );
        self.session = Some(DragSession {
            object_position_start: object_position.to_string(),
            pointer_start: pointer,
            dimension_delta,
            pointer_id,
        });
    }

    /// New object-position for a move, or `None` when idle, when the move
    /// belongs to another pointer, or when no axis is cropped.
    pub fn pointer_move(&self, pointer: Coordinates, pointer_id: Option<i32>) -> Option<String> {
        let session = self.session.as_ref()?;
        if !session.accepts(pointer_id) {
            return None;
        }
        let position = session.position_at(pointer);
        if position.is_none() {
            log::trace!("drag move ignored, no cropped axis");
        }
        position
    }

    /// Replace the delta of the running session after a resize.
    pub fn update_dimension_delta(&mut self, dimension_delta: Option<ImageDimensionDelta>) {
        if let Some(session) = self.session.as_mut() {
            session.dimension_delta = dimension_delta;
        }
    }

    /// Dragging -> Idle. Returns true if a session was ended.
    pub fn pointer_up(&mut self, pointer_id: Option<i32>) -> bool {
        self.end(pointer_id, "up")
    }

    /// Same transition as [`pointer_up`](Self::pointer_up); emits nothing.
    pub fn pointer_cancel(&mut self, pointer_id: Option<i32>) -> bool {
        self.end(pointer_id, "cancel")
    }

    fn end(&mut self, pointer_id: Option<i32>, reason: &str) -> bool {
        match &self.session {
            Some(session) if session.accepts(pointer_id) => {
                log::debug!("drag end ({})", reason);
                self.session = None;
                true
            }
            _ => false,
        }
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
