//! Tap-to-split workflow tests

use crate::helpers::{TestCanvas, pill, test_settings};
use pillsplit::{CanvasSettings, ShapeId};
use std::collections::HashSet;

#[test]
fn test_draw_then_tap_quarters() {
    let mut t = TestCanvas::new();
    t.gesture((10.0, 10.0), (110.0, 110.0));
    t.tap(60.0, 60.0);

    assert_eq!(
        t.describe(),
        vec!["#2 10,10 50x50", "#3 60,10 50x50", "#4 10,60 50x50", "#5 60,60 50x50"]
    );
    assert!(t.canvas.input_state().is_idle());
}

#[test]
fn test_tap_on_short_shape_halves_and_clears_line() {
    let mut t = TestCanvas::with_shapes(vec![pill(100, 10.0, 10.0, 100.0, 20.0)]);
    t.tap(60.0, 15.0);

    // Too short to cut at y = 15, so the halves drop below the line
    assert_eq!(t.describe(), vec!["#101 10,17 50x20", "#102 60,17 50x20"]);
}

#[test]
fn test_tap_on_tiny_shape_shifts_it() {
    let mut t = TestCanvas::with_shapes(vec![pill(100, 10.0, 10.0, 10.0, 10.0)]);
    t.tap(15.0, 15.0);

    assert_eq!(t.describe(), vec!["#100 17,17 10x10"]);
    for s in t.shapes() {
        assert!(!s.rect().straddles_x(15.0));
        assert!(!s.rect().straddles_y(15.0));
    }
}

#[test]
fn test_tap_on_empty_canvas_is_noop() {
    let before = vec![pill(1, 0.0, 0.0, 50.0, 50.0), pill(2, 60.0, 0.0, 50.0, 50.0)];
    let mut t = TestCanvas::with_shapes(before.clone());
    t.tap(300.0, 300.0);

    assert_eq!(t.shapes(), before.as_slice());
    assert!(t.canvas.input_state().is_idle());
}

#[test]
fn test_tap_splits_every_crossed_shape() {
    let mut t = TestCanvas::with_shapes(vec![
        pill(100, 0.0, 0.0, 100.0, 100.0),
        pill(200, 200.0, 0.0, 100.0, 100.0),
        pill(300, 200.0, 300.0, 40.0, 40.0),
    ]);
    t.tap(50.0, 50.0);

    // The press raised #100 to the top before the split; #300 is not crossed
    assert_eq!(
        t.describe(),
        vec![
            "#301 200,0 100x50",
            "#302 200,50 100x50",
            "#300 200,300 40x40",
            "#303 0,0 50x50",
            "#304 50,0 50x50",
            "#305 0,50 50x50",
            "#306 50,50 50x50",
        ]
    );
}

#[test]
fn test_tiny_drag_still_splits_at_release() {
    let mut t = TestCanvas::with_shapes(vec![pill(100, 0.0, 0.0, 100.0, 100.0)]);
    t.press(50.0, 50.0).wait(20).move_to(52.0, 50.0).wait(20).release(52.0, 50.0);

    assert_eq!(
        t.describe(),
        vec!["#101 2,0 50x50", "#102 52,0 50x50", "#103 2,50 50x50", "#104 52,50 50x50"]
    );
}

#[test]
fn test_release_without_press_on_canvas_can_split() {
    let mut t = TestCanvas::with_shapes(vec![pill(100, -50.0, -50.0, 100.0, 100.0)]);
    // The press memory starts at the origin at t = 0
    t.clock.set(100);
    t.release(1.0, 1.0);

    assert_eq!(
        t.describe(),
        vec!["#101 -50,-50 51x51", "#102 1,-50 49x51", "#103 -50,1 51x49", "#104 1,1 49x49"]
    );
}

#[test]
fn test_tap_that_also_draws_splits_existing_shape() {
    let settings = CanvasSettings {
        min_size_to_draw: 2.0,
        ..test_settings()
    };
    let mut t = TestCanvas::with(settings, vec![pill(100, 0.0, 0.0, 400.0, 20.0)]);
    t.press(200.0, 50.0).wait(50).release(202.0, 53.0);

    assert_eq!(
        t.describe(),
        vec!["#102 0,0 202x20", "#103 202,0 198x20", "#101 200,50 2x3"]
    );
}

#[test]
fn test_ids_stay_unique_across_sessions() {
    let mut t = TestCanvas::new();
    t.gesture((0.0, 0.0), (200.0, 200.0));
    t.gesture((300.0, 0.0), (400.0, 150.0));
    t.tap(100.0, 100.0);
    t.wait(1000).tap(50.0, 50.0);
    t.wait(1000).tap(350.0, 60.0);
    t.gesture((0.0, 300.0), (80.0, 380.0));
    t.wait(1000).tap(40.0, 340.0);

    let ids: HashSet<ShapeId> = t.shapes().iter().map(|s| s.id).collect();
    assert_eq!(ids.len(), t.shapes().len());
    assert!(t.shapes().iter().all(|s| s.w > 0.0 && s.h > 0.0));
}

#[test]
fn test_quarters_preserve_area() {
    let mut t = TestCanvas::with_shapes(vec![pill(100, 0.0, 0.0, 97.0, 61.0)]);
    t.tap(40.0, 31.0);

    assert_eq!(t.shapes().len(), 4);
    let total: f32 = t.shapes().iter().map(|s| s.w * s.h).sum();
    assert_eq!(total, 97.0 * 61.0);
}
