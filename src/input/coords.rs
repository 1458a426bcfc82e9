//! Coordinate conversion between screen and canvas space.
//!
//! The canvas works in its own local coordinates; a host that only has
//! screen positions translates them through the canvas origin.

use crate::geometry::Point;

/// Screen position of the canvas's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CanvasOrigin {
    pub left: f32,
    pub top: f32,
}

impl CanvasOrigin {
    #[inline]
    pub fn new(left: f32, top: f32) -> Self {
        Self { left, top }
    }

    #[inline]
    pub fn screen_to_canvas(&self, screen: Point) -> Point {
        Point::new(screen.x - self.left, screen.y - self.top)
    }
}
