//! Pointer up - commit the gesture, then split if the release was a tap.
//!
//! The tap check is independent of the gesture: a tiny draw, a tiny drag and
//! a bare click all split whatever the crosshair crosses at the release
//! point. The crossed set is taken before a draw commits, so a shape drawn by
//! this same release is never its own split target.

use super::InteractionState;
use crate::canvas::PillCanvas;
use crate::geometry::{Point, Rect};
use crate::profile_scope;
use crate::types::Shape;
use tracing::debug;

impl PillCanvas {
    pub fn handle_pointer_up(&mut self, p: Point) {
        profile_scope!("handle_pointer_up");

        let now = self.clock.now_ms();
        let is_tap = self.press.is_tap(p, now, self.tap_thresholds());
        let crossed = if is_tap {
            self.hit_tester().crossed(p)
        } else {
            Default::default()
        };

        match self.input_state.take() {
            InteractionState::Drawing { start, .. } => self.finish_drawing(start, p),
            InteractionState::Dragging { target, .. } => {
                debug!(%target, "Drag finished");
            }
            InteractionState::Idle => {}
        }
        self.release_capture();

        if is_tap {
            debug!(x = p.x, y = p.y, crossed = crossed.len(), "Tap");
            self.split_at(p, &crossed);
        }
    }

    /// Add the drawn box as a shape if it is large enough.
    fn finish_drawing(&mut self, start: Point, end: Point) {
        let rect = Rect::spanning(start, end);
        let min = self.settings.min_size_to_draw;

        if rect.w >= min && rect.h >= min {
            let shape = Shape::new(self.ids.next_id(), rect, self.colors.pick());
            debug!(id = %shape.id, w = rect.w, h = rect.h, color = %shape.color, "Shape drawn");
            self.store.add(shape);
        } else {
            debug!(w = rect.w, h = rect.h, min, "Drawn box too small, discarded");
        }
    }
}
