//! Hit testing against the shape store.
//!
//! Candidates come from the spatial index; the final answer is decided with
//! exact predicates and, for body hits, store order (topmost first).

use crate::geometry::Point;
use crate::store::ShapeStore;
use crate::types::{Shape, ShapeId};
use std::collections::HashSet;

/// Whether a crosshair at `p` crosses the shape on at least one axis.
#[inline]
pub fn is_crossed(shape: &Shape, p: Point) -> bool {
    shape.rect().crossed_by(p)
}

pub struct HitTester<'a> {
    store: &'a ShapeStore,
}

impl<'a> HitTester<'a> {
    pub fn new(store: &'a ShapeStore) -> Self {
        Self { store }
    }

    /// The topmost shape whose closed body contains `p`.
    pub fn topmost_body_hit(&self, p: Point) -> Option<ShapeId> {
        let candidates: HashSet<ShapeId> = self.store.index().query_point(p).into_iter().collect();
        if candidates.is_empty() {
            return None;
        }

        // Check candidates in reverse z-order (front to back)
        self.store
            .shapes()
            .iter()
            .rev()
            .filter(|shape| candidates.contains(&shape.id))
            .find(|shape| shape.rect().contains(p))
            .map(|shape| shape.id)
    }

    /// Every shape crossed by a crosshair at `p`.
    pub fn crossed(&self, p: Point) -> HashSet<ShapeId> {
        self.store
            .index()
            .query_crosshair(p)
            .into_iter()
            .filter(|id| self.store.get(*id).is_some_and(|shape| is_crossed(shape, p)))
            .collect()
    }
}
