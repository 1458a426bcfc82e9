//! Canvases built with initial shapes

use crate::helpers::{TestCanvas, pill, test_settings};
use pillsplit::ids::SequentialIds;
use pillsplit::{PillCanvas, PointerEvent, SettingsError, ShapeId};
use std::collections::HashSet;

#[test]
fn test_new_shapes_continue_after_seeded_ids() {
    let original = pill(1, 0.0, 0.0, 50.0, 50.0);
    let mut t = TestCanvas::with_shapes(vec![original.clone()]);
    t.gesture((100.0, 100.0), (160.0, 160.0));

    let ids: Vec<ShapeId> = t.shapes().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![ShapeId(1), ShapeId(2)]);

    // The seeded shape is still reachable by a press
    t.press(25.0, 25.0);
    assert_eq!(t.canvas.input_state().dragged_shape(), Some(ShapeId(1)));
    assert_eq!(t.canvas.store().get(ShapeId(1)), Some(&original));
}

#[test]
fn test_split_ids_stay_unique_with_seeds() {
    let mut t = TestCanvas::with_shapes(vec![
        pill(3, 0.0, 0.0, 100.0, 100.0),
        pill(1, 200.0, 200.0, 40.0, 40.0),
    ]);
    t.tap(50.0, 50.0);

    let ids: HashSet<ShapeId> = t.shapes().iter().map(|s| s.id).collect();
    assert_eq!(ids.len(), t.shapes().len());
    assert_eq!(
        t.describe(),
        vec![
            "#1 200,200 40x40",
            "#4 0,0 50x50",
            "#5 50,0 50x50",
            "#6 0,50 50x50",
            "#7 50,50 50x50",
        ]
    );
}

#[test]
fn test_duplicate_seed_ids_rejected() {
    let result = PillCanvas::builder(test_settings())
        .with_shapes(vec![
            pill(1, 0.0, 0.0, 50.0, 50.0),
            pill(2, 60.0, 0.0, 50.0, 50.0),
            pill(1, 120.0, 0.0, 50.0, 50.0),
        ])
        .build();

    match result {
        Err(err @ SettingsError::DuplicateShapeId(ShapeId(1))) => {
            assert_eq!(err.to_string(), "Shape #1 appears more than once in the initial shapes");
        }
        other => panic!("expected a duplicate id error, got {other:?}"),
    }
}

#[test]
fn test_injected_id_source_is_used_as_given() {
    let mut canvas = PillCanvas::builder(test_settings())
        .with_ids(SequentialIds::starting_at(500))
        .with_shapes(vec![pill(1, 0.0, 0.0, 50.0, 50.0)])
        .build()
        .unwrap();
    canvas.handle_event(PointerEvent::down(100.0, 100.0));
    canvas.handle_event(PointerEvent::up(150.0, 150.0));

    let ids: Vec<u64> = canvas.shapes().iter().map(|s| s.id.0).collect();
    assert_eq!(ids, vec![1, 500]);
}
