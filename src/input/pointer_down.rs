//! Pointer down - pick up a shape or start drawing one.
//!
//! Hit testing goes through the R-tree, so a press stays cheap however many
//! pills the canvas holds.

use super::capture::GestureKind;
use super::press::PressMemory;
use crate::canvas::PillCanvas;
use crate::geometry::Point;
use crate::profile_scope;
use tracing::debug;

impl PillCanvas {
    pub fn handle_pointer_down(&mut self, p: Point) {
        profile_scope!("handle_pointer_down");

        let hit = self.hit_tester().topmost_body_hit(p);
        self.press = PressMemory::new(p, self.clock.now_ms(), hit);

        let picked = hit.and_then(|id| self.store.get(id).map(|shape| (id, shape.position())));
        match picked {
            Some((id, top_left)) => {
                self.store.move_to_top(id);
                let offset = p.offset_from(top_left);
                self.input_state.start_dragging(id, offset);
                self.acquire_capture(GestureKind::Drag);
                debug!(%id, offset_x = offset.x, offset_y = offset.y, "Drag started");
            }
            None => {
                self.input_state.start_drawing(p);
                self.acquire_capture(GestureKind::Draw);
                debug!(x = p.x, y = p.y, "Draw started");
            }
        }
    }
}
