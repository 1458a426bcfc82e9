//! Pill canvas core.
//!
//! Users draw rectangular pills by dragging on empty canvas, move them by
//! dragging their body, and split them by tapping: every pill crossed by the
//! crosshair at the tap point is cut into up to four pieces, or shifted clear
//! of the crosshair when it is too small to cut.
//!
//! Rendering is left to the host. It feeds [`PointerEvent`]s into a
//! [`PillCanvas`] and paints the [`Frame`] it returns.

pub mod canvas;
pub mod clock;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod hit_testing;
pub mod ids;
pub mod input;
pub mod palette;
pub mod perf;
pub mod settings;
pub mod spatial_index;
pub mod split;
pub mod store;
pub mod types;

pub use canvas::{Frame, PillCanvas, PillCanvasBuilder};
pub use error::{SettingsError, SettingsResult};
pub use geometry::{Point, Rect};
pub use input::{EventScope, InteractionState, PointerEvent, PointerKind};
pub use settings::CanvasSettings;
pub use types::{Shape, ShapeId};
