//! Interaction state machine - one enum for every gesture the canvas knows.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Drawing     (pointer down on empty canvas)
//! Idle -> Dragging    (pointer down on a shape body)
//!
//! Any  -> Idle        (pointer up - commits or discards the gesture)
//! ```
//!
//! A press starts exactly one gesture, so drawing and dragging can never be
//! active together.

use crate::geometry::{Point, Rect};
use crate::types::ShapeId;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    /// No gesture in progress
    #[default]
    Idle,

    /// Drawing a new shape
    Drawing {
        /// Press position, one corner of the box
        start: Point,
        /// Latest pointer position, the opposite corner
        current: Point,
    },

    /// Moving an existing shape
    Dragging {
        /// Shape under the press
        target: ShapeId,
        /// Press position relative to the shape's top-left corner
        offset: Point,
    },
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Get the shape being dragged, if any
    pub fn dragged_shape(&self) -> Option<ShapeId> {
        match self {
            Self::Dragging { target, .. } => Some(*target),
            _ => None,
        }
    }

    /// Get drag offset
    pub fn drag_offset(&self) -> Option<Point> {
        match self {
            Self::Dragging { offset, .. } => Some(*offset),
            _ => None,
        }
    }

    pub fn start_drawing(&mut self, at: Point) {
        *self = Self::Drawing {
            start: at,
            current: at,
        };
    }

    pub fn start_dragging(&mut self, target: ShapeId, offset: Point) {
        *self = Self::Dragging { target, offset };
    }

    /// Update the drawing corner; ignored outside `Drawing`.
    pub fn set_drawing_current(&mut self, at: Point) {
        if let Self::Drawing { current, .. } = self {
            *current = at;
        }
    }

    /// Box spanning the drawing gesture so far.
    pub fn preview(&self) -> Option<Rect> {
        match self {
            Self::Drawing { start, current } => Some(Rect::spanning(*start, *current)),
            _ => None,
        }
    }

    /// Leave the current state, returning what it was.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}
