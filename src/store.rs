//! Ordered shape storage.
//!
//! Sequence order is z-order: the last shape renders on top and wins hit
//! tests. Every mutation keeps the spatial index in step with the list.

use crate::geometry::Rect;
use crate::spatial_index::SpatialIndex;
use crate::types::{Shape, ShapeId};
use std::collections::HashSet;
use tracing::{debug, warn};

#[derive(Debug, Default)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
    index: SpatialIndex,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from shapes given bottom to top.
    pub fn from_shapes(shapes: Vec<Shape>) -> Self {
        let index = SpatialIndex::from_rects(shapes.iter().map(|s| (s.id, s.rect())));
        Self { shapes, index }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    pub(crate) fn index(&self) -> &SpatialIndex {
        &self.index
    }

    /// Appends on top. The caller guarantees `w, h > 0` and a fresh id.
    pub fn add(&mut self, shape: Shape) {
        debug_assert!(shape.w > 0.0 && shape.h > 0.0, "degenerate shape {shape:?}");
        self.index.insert(shape.id, shape.rect());
        self.shapes.push(shape);
    }

    /// Re-appends the shape at the end, keeping the others in order.
    pub fn move_to_top(&mut self, id: ShapeId) {
        let Some(pos) = self.shapes.iter().position(|s| s.id == id) else {
            warn!(%id, "move_to_top: no such shape");
            return;
        };
        let shape = self.shapes.remove(pos);
        self.shapes.push(shape);
    }

    /// Moves a shape without touching its size, colour or z-order.
    pub fn set_position(&mut self, id: ShapeId, x: f32, y: f32) {
        let Some(shape) = self.shapes.iter_mut().find(|s| s.id == id) else {
            warn!(%id, "set_position: no such shape");
            return;
        };
        shape.x = x;
        shape.y = y;
        self.index.insert(id, Rect::new(x, y, shape.w, shape.h));
    }

    /// Replaces every targeted shape in place with `replacement(shape)`.
    ///
    /// Untargeted shapes keep their relative order; each target's
    /// replacements are contiguous and sit where the target was.
    pub fn replace<F>(&mut self, targets: &HashSet<ShapeId>, mut replacement: F)
    where
        F: FnMut(&Shape) -> Vec<Shape>,
    {
        if targets.is_empty() {
            return;
        }

        let mut updated = Vec::with_capacity(self.shapes.len() + targets.len() * 3);
        let mut replaced = 0usize;
        for shape in self.shapes.drain(..) {
            if !targets.contains(&shape.id) {
                updated.push(shape);
                continue;
            }
            replaced += 1;
            self.index.remove(shape.id);
            for child in replacement(&shape) {
                self.index.insert(child.id, child.rect());
                updated.push(child);
            }
        }
        self.shapes = updated;

        if replaced < targets.len() {
            warn!(
                requested = targets.len(),
                replaced, "replace: some target ids were not in the store"
            );
        }
        debug!(replaced, total = self.shapes.len(), "Replaced shapes");
    }

    pub fn ids(&self) -> impl Iterator<Item = ShapeId> + '_ {
        self.shapes.iter().map(|s| s.id)
    }
}
