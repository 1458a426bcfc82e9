//! Geometry primitives for the canvas.
//!
//! All coordinates are canvas-local, with `y` growing downwards. Rectangles are
//! stored as top-left corner plus size.

use serde::{Deserialize, Serialize};

/// A position in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance_to(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Component-wise difference `self - other`.
    #[inline]
    pub fn offset_from(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// The box spanning two corners given in any order.
    pub fn spanning(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            w: (b.x - a.x).abs(),
            h: (b.y - a.y).abs(),
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Closed containment, edges included.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        in_closed_range(p.x, self.x, self.right()) && in_closed_range(p.y, self.y, self.bottom())
    }

    /// The vertical line `x = cx` passes through the interior of the horizontal span.
    #[inline]
    pub fn straddles_x(&self, cx: f32) -> bool {
        in_open_range(cx, self.x, self.right())
    }

    /// The horizontal line `y = cy` passes through the interior of the vertical span.
    #[inline]
    pub fn straddles_y(&self, cy: f32) -> bool {
        in_open_range(cy, self.y, self.bottom())
    }

    /// A crosshair at `p` crosses this rectangle on at least one axis.
    #[inline]
    pub fn crossed_by(&self, p: Point) -> bool {
        self.straddles_x(p.x) || self.straddles_y(p.y)
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.w * self.h
    }
}

/// `lo < v < hi`
#[inline]
pub fn in_open_range(v: f32, lo: f32, hi: f32) -> bool {
    lo < v && v < hi
}

/// `lo <= v <= hi`
#[inline]
pub fn in_closed_range(v: f32, lo: f32, hi: f32) -> bool {
    lo <= v && v <= hi
}
