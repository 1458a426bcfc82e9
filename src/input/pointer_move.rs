//! Pointer move - track the crosshair and advance the active gesture.
//!
//! Called for every motion sample, so it does the minimum: one state update
//! and at most one store write.

use super::InteractionState;
use crate::canvas::PillCanvas;
use crate::geometry::Point;
use crate::profile_scope;
use tracing::trace;

impl PillCanvas {
    pub fn handle_pointer_move(&mut self, p: Point) {
        profile_scope!("handle_pointer_move");

        self.cursor = p;

        match self.input_state {
            InteractionState::Drawing { .. } => {
                self.input_state.set_drawing_current(p);
            }
            InteractionState::Dragging { target, offset } => {
                let (x, y) = (p.x - offset.x, p.y - offset.y);
                self.store.set_position(target, x, y);
                trace!(%target, x, y, "Dragged shape");
            }
            InteractionState::Idle => {}
        }
    }
}
