//! Pointer capture held for the lifetime of a gesture.
//!
//! While a draw or drag is in progress the canvas accepts move/up events
//! delivered from outside its bounds (window scope). The capture is taken
//! when the gesture starts and dropped when it resolves, so an idle canvas
//! only reacts to its own events.

use super::event::{EventScope, PointerEvent, PointerKind};

/// Which gesture owns the capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    Draw,
    Drag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerCapture {
    pub gesture: GestureKind,
}

impl PointerCapture {
    pub fn new(gesture: GestureKind) -> Self {
        Self { gesture }
    }
}

/// Whether an event should reach the handlers given the current capture.
///
/// Presses only start on the canvas itself. Window-scope moves and releases
/// only count while captured.
pub fn accepts(capture: Option<&PointerCapture>, event: &PointerEvent) -> bool {
    match (event.kind, event.scope) {
        (_, EventScope::Canvas) => true,
        (PointerKind::Down, EventScope::Window) => false,
        (PointerKind::Move | PointerKind::Up, EventScope::Window) => capture.is_some(),
    }
}
