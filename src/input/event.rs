//! Pointer events fed into the canvas.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerKind {
    Down,
    Move,
    Up,
}

/// Where the event was delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventScope {
    /// By the canvas widget itself
    #[default]
    Canvas,
    /// By a window-wide listener, possibly outside the canvas
    Window,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub position: Point,
    pub scope: EventScope,
}

impl PointerEvent {
    pub fn down(x: f32, y: f32) -> Self {
        Self::canvas(PointerKind::Down, x, y)
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::canvas(PointerKind::Move, x, y)
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::canvas(PointerKind::Up, x, y)
    }

    fn canvas(kind: PointerKind, x: f32, y: f32) -> Self {
        Self {
            kind,
            position: Point::new(x, y),
            scope: EventScope::Canvas,
        }
    }

    /// Same event, delivered by the window listener.
    pub fn from_window(mut self) -> Self {
        self.scope = EventScope::Window;
        self
    }
}
