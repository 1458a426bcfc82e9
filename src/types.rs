//! Core types for the pill canvas.
//!
//! A [`Shape`] is a coloured axis-aligned rectangle. Its size and colour are
//! fixed at creation; only its position changes afterwards.

use crate::geometry::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a shape, unique within a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeId(pub u64);

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A rectangular pill on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub id: ShapeId,
    pub x: f32,
    pub y: f32,
    /// Always > 0
    pub w: f32,
    /// Always > 0
    pub h: f32,
    /// Fill colour drawn from the palette
    pub color: String,
}

impl Shape {
    pub fn new(id: ShapeId, rect: Rect, color: impl Into<String>) -> Self {
        Self {
            id,
            x: rect.x,
            y: rect.y,
            w: rect.w,
            h: rect.h,
            color: color.into(),
        }
    }

    /// A new shape with the same colour occupying `rect`.
    pub fn child(&self, id: ShapeId, rect: Rect) -> Self {
        Self::new(id, rect, self.color.clone())
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }

    #[inline]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns a copy moved to `(x, y)`, id and size unchanged.
    pub fn moved_to(&self, x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            ..self.clone()
        }
    }
}
