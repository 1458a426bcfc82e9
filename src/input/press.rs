//! Press memory and tap classification.

use crate::geometry::Point;
use crate::types::ShapeId;

/// What the last pointer-down looked like. Overwritten on every press.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PressMemory {
    pub position: Point,
    pub at_ms: u64,
    /// Shape whose body was under the press
    pub hit: Option<ShapeId>,
}

/// Both bounds are exclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapThresholds {
    pub max_distance: f32,
    pub max_duration_ms: u64,
}

impl PressMemory {
    pub fn new(position: Point, at_ms: u64, hit: Option<ShapeId>) -> Self {
        Self {
            position,
            at_ms,
            hit,
        }
    }

    /// Whether releasing at `position` at `now_ms` completes a tap.
    pub fn is_tap(&self, position: Point, now_ms: u64, thresholds: TapThresholds) -> bool {
        let distance = self.position.distance_to(position);
        let elapsed = now_ms.saturating_sub(self.at_ms);
        distance < thresholds.max_distance && elapsed < thresholds.max_duration_ms
    }
}
