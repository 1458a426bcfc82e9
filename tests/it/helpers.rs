//! Test helpers for driving a canvas through pointer gestures.
//!
//! This module provides:
//! - `TestCanvas` - a canvas with default ids, a manual clock and a
//!   single-colour palette, plus gesture shortcuts
//! - `pill()` for building shapes with known ids
//! - `describe()` for compact, order-preserving store assertions

use pillsplit::clock::ManualClock;
use pillsplit::{CanvasSettings, PillCanvas, PointerEvent, Rect, Shape, ShapeId};

pub const TEST_COLOR: &str = "#93c5fd";

/// Settings from the worked examples: draw >= 20, split >= 30, gap 2.
pub fn test_settings() -> CanvasSettings {
    CanvasSettings {
        palette: vec![TEST_COLOR.to_string()],
        ..CanvasSettings::default()
    }
}

pub fn pill(id: u64, x: f32, y: f32, w: f32, h: f32) -> Shape {
    Shape::new(ShapeId(id), Rect::new(x, y, w, h), TEST_COLOR)
}

/// `"#id x,y wxh"` per shape, bottom to top.
pub fn describe(shapes: &[Shape]) -> Vec<String> {
    shapes
        .iter()
        .map(|s| format!("{} {},{} {}x{}", s.id, s.x, s.y, s.w, s.h))
        .collect()
}

pub struct TestCanvas {
    pub canvas: PillCanvas,
    pub clock: ManualClock,
}

impl TestCanvas {
    pub fn new() -> Self {
        Self::with(test_settings(), Vec::new())
    }

    pub fn with_shapes(shapes: Vec<Shape>) -> Self {
        Self::with(test_settings(), shapes)
    }

    pub fn with(settings: CanvasSettings, shapes: Vec<Shape>) -> Self {
        let clock = ManualClock::new();
        clock.set(1_000);
        let canvas = PillCanvas::builder(settings)
            .with_clock(clock.clone())
            .with_shapes(shapes)
            .build()
            .expect("test settings are valid");
        Self { canvas, clock }
    }

    pub fn press(&mut self, x: f32, y: f32) -> &mut Self {
        self.canvas.handle_event(PointerEvent::down(x, y));
        self
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.canvas.handle_event(PointerEvent::moved(x, y));
        self
    }

    pub fn release(&mut self, x: f32, y: f32) -> &mut Self {
        self.canvas.handle_event(PointerEvent::up(x, y));
        self
    }

    pub fn wait(&mut self, ms: u64) -> &mut Self {
        self.clock.advance(ms);
        self
    }

    /// Quick press and release at the same point.
    pub fn tap(&mut self, x: f32, y: f32) -> &mut Self {
        self.press(x, y).wait(50).release(x, y)
    }

    /// Press, move and release, slow enough never to be a tap.
    pub fn gesture(&mut self, from: (f32, f32), to: (f32, f32)) -> &mut Self {
        self.press(from.0, from.1)
            .wait(100)
            .move_to(to.0, to.1)
            .wait(400)
            .release(to.0, to.1)
    }

    pub fn shapes(&self) -> &[Shape] {
        self.canvas.shapes()
    }

    pub fn describe(&self) -> Vec<String> {
        describe(self.canvas.shapes())
    }
}
