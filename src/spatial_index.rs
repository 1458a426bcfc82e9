//! Spatial Index Module
//!
//! R-tree over shape bounding boxes. Point queries back the body hit test and
//! line queries back the crosshair test, so neither scans the whole store.
//! The index knows nothing about z-order; callers order the candidates.

use crate::geometry::{Point, Rect};
use crate::types::ShapeId;
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// A shape's bounding box as stored in the tree.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub shape_id: ShapeId,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl SpatialEntry {
    pub fn new(shape_id: ShapeId, rect: Rect) -> Self {
        Self {
            shape_id,
            min_x: rect.x,
            min_y: rect.y,
            max_x: rect.right(),
            max_y: rect.bottom(),
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.shape_id == other.shape_id
    }
}

/// Spatial index for shapes using an R-tree.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<ShapeId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Build an index from `(id, rect)` pairs.
    pub fn from_rects<I>(rects: I) -> Self
    where
        I: Iterator<Item = (ShapeId, Rect)>,
    {
        let mut index = Self::new();
        index.rebuild(rects);
        index
    }

    /// Insert or move the entry for `shape_id`.
    pub fn insert(&mut self, shape_id: ShapeId, rect: Rect) {
        if let Some(old_entry) = self.entries.remove(&shape_id) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::new(shape_id, rect);
        self.tree.insert(entry);
        self.entries.insert(shape_id, entry);
    }

    pub fn remove(&mut self, shape_id: ShapeId) -> bool {
        if let Some(entry) = self.entries.remove(&shape_id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// All shapes whose closed box contains the point. Unordered.
    pub fn query_point(&self, p: Point) -> Vec<ShapeId> {
        let point_envelope = AABB::from_point([p.x, p.y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(p.x, p.y))
            .map(|entry| entry.shape_id)
            .collect()
    }

    /// All shapes whose box intersects the region. Unordered.
    pub fn query_rect(&self, min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Vec<ShapeId> {
        let envelope = AABB::from_corners([min_x, min_y], [max_x, max_y]);

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.shape_id)
            .collect()
    }

    /// Shapes touched by the vertical or horizontal line through `p`.
    ///
    /// Boxes that merely touch a line are included; the open-interval test
    /// is left to the caller.
    pub fn query_crosshair(&self, p: Point) -> Vec<ShapeId> {
        let mut ids = self.query_rect(p.x, f32::MIN, p.x, f32::MAX);
        for id in self.query_rect(f32::MIN, p.y, f32::MAX, p.y) {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        ids
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rebuild<I>(&mut self, rects: I)
    where
        I: Iterator<Item = (ShapeId, Rect)>,
    {
        let entries: Vec<SpatialEntry> = rects
            .map(|(id, rect)| SpatialEntry::new(id, rect))
            .collect();

        self.entries = entries.iter().map(|e| (e.shape_id, *e)).collect();
        self.tree = RTree::bulk_load(entries);
    }
}

impl std::fmt::Debug for SpatialIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpatialIndex")
            .field("len", &self.entries.len())
            .finish()
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
