//! Unit tests for the shape store and hit tester.

use crate::helpers::{describe, pill};
use pillsplit::hit_testing::HitTester;
use pillsplit::store::ShapeStore;
use pillsplit::{Point, ShapeId};
use std::collections::HashSet;

#[test]
fn test_move_to_top_only_reorders() {
    let mut store = ShapeStore::from_shapes(vec![
        pill(1, 0.0, 0.0, 10.0, 10.0),
        pill(2, 20.0, 0.0, 10.0, 10.0),
        pill(3, 40.0, 0.0, 10.0, 10.0),
    ]);
    store.move_to_top(ShapeId(2));

    assert_eq!(describe(store.shapes()), vec!["#1 0,0 10x10", "#3 40,0 10x10", "#2 20,0 10x10"]);
}

#[test]
fn test_hit_follows_moves() {
    let mut store = ShapeStore::from_shapes(vec![pill(1, 0.0, 0.0, 10.0, 10.0)]);
    store.set_position(ShapeId(1), 50.0, 50.0);

    let tester = HitTester::new(&store);
    assert_eq!(tester.topmost_body_hit(Point::new(5.0, 5.0)), None);
    assert_eq!(tester.topmost_body_hit(Point::new(55.0, 55.0)), Some(ShapeId(1)));
}

#[test]
fn test_hit_follows_z_order() {
    let mut store = ShapeStore::from_shapes(vec![
        pill(1, 0.0, 0.0, 100.0, 100.0),
        pill(2, 0.0, 0.0, 100.0, 100.0),
    ]);
    assert_eq!(HitTester::new(&store).topmost_body_hit(Point::new(50.0, 50.0)), Some(ShapeId(2)));

    store.move_to_top(ShapeId(1));
    assert_eq!(HitTester::new(&store).topmost_body_hit(Point::new(50.0, 50.0)), Some(ShapeId(1)));
}

#[test]
fn test_crossed_after_replace() {
    let mut store = ShapeStore::from_shapes(vec![pill(1, 0.0, 0.0, 100.0, 100.0)]);
    store.replace(&HashSet::from([ShapeId(1)]), |parent| {
        vec![parent.moved_to(300.0, 300.0)]
    });

    let tester = HitTester::new(&store);
    assert!(tester.crossed(Point::new(50.0, 50.0)).is_empty());
    assert_eq!(tester.crossed(Point::new(350.0, 0.0)), HashSet::from([ShapeId(1)]));
}
