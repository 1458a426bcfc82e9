//! Pointer input handling for the canvas.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`InteractionState`) to
//! track the current gesture, plus the memory of the last press used to tell
//! taps from drags.
//!
//! ## Modules
//!
//! - `event` - Pointer events and where they were delivered
//! - `state` - Interaction state machine enum and helper methods
//! - `press` - Press memory and tap classification
//! - `capture` - Pointer capture held while a gesture is active
//! - `coords` - Screen to canvas coordinate conversion
//! - `pointer_down` - Pick up a shape or start drawing
//! - `pointer_move` - Crosshair tracking, drag and draw updates
//! - `pointer_up` - Commit gestures and split on tap

pub mod capture;
pub mod coords;
mod event;
pub mod press;
mod state;
mod pointer_down;
mod pointer_move;
mod pointer_up;

pub use event::{EventScope, PointerEvent, PointerKind};
pub use state::InteractionState;
