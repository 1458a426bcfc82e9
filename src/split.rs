//! Crosshair subdivision of shapes.
//!
//! A targeted shape is cut along each axis the crosshair straddles, provided
//! both pieces on that axis are at least `min_size_to_split`. An axis that is
//! straddled but too tight to cut is cleared instead: the pieces are shifted
//! whole to the side their centre lies on, `adjust_gap` away from the line.
//!
//! ```text
//!   both axes cut        only y cut          neither cut
//!   +----+-----+         +----------+              |
//!   | TL |  TR |         |   top    |        +--+  |
//!  -+----+-----+-   ->  -+----------+-       |  |  |  (shifted)
//!   | BL |  BR |         |  bottom  |        +--+  |
//!   +----+-----+         +----------+              |
//! ```

use crate::geometry::{Point, Rect};
use crate::ids::IdSource;
use crate::profile_scope;
use crate::store::ShapeStore;
use crate::types::{Shape, ShapeId};
use std::collections::HashSet;
use tracing::debug;

/// What happened to one targeted shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitOutcome {
    /// Cut on both axes into four
    Quartered,
    /// Cut by the horizontal line into top and bottom
    HalvedHorizontally,
    /// Cut by the vertical line into left and right
    HalvedVertically,
    /// Too small to cut on any straddled axis; moved clear
    Shifted,
    /// Not straddled on either axis
    Untouched,
}

/// Cut measurements of a shape against a crosshair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitPlan {
    pub left_w: f32,
    pub right_w: f32,
    pub top_h: f32,
    pub bottom_h: f32,
    /// The vertical line `x = cx` straddles the shape
    pub v_hit: bool,
    /// The horizontal line `y = cy` straddles the shape
    pub h_hit: bool,
    pub can_split_v: bool,
    pub can_split_h: bool,
}

impl SplitPlan {
    pub fn new(rect: Rect, c: Point, min_size: f32) -> Self {
        let left_w = c.x - rect.x;
        let right_w = rect.right() - c.x;
        let top_h = c.y - rect.y;
        let bottom_h = rect.bottom() - c.y;
        let v_hit = rect.straddles_x(c.x);
        let h_hit = rect.straddles_y(c.y);

        Self {
            left_w,
            right_w,
            top_h,
            bottom_h,
            v_hit,
            h_hit,
            can_split_v: v_hit && left_w >= min_size && right_w >= min_size,
            can_split_h: h_hit && top_h >= min_size && bottom_h >= min_size,
        }
    }

    /// Straddled horizontally but too narrow to cut.
    #[inline]
    pub fn adjust_x(&self) -> bool {
        self.v_hit && !self.can_split_v
    }

    /// Straddled vertically but too short to cut.
    #[inline]
    pub fn adjust_y(&self) -> bool {
        self.h_hit && !self.can_split_h
    }

    pub fn outcome(&self) -> SplitOutcome {
        match (self.can_split_v, self.can_split_h) {
            (true, true) => SplitOutcome::Quartered,
            (false, true) => SplitOutcome::HalvedHorizontally,
            (true, false) => SplitOutcome::HalvedVertically,
            (false, false) if self.v_hit || self.h_hit => SplitOutcome::Shifted,
            (false, false) => SplitOutcome::Untouched,
        }
    }

    /// Piece rectangles before any shift, in emission order.
    fn pieces(&self, rect: Rect, c: Point) -> Vec<Rect> {
        match self.outcome() {
            SplitOutcome::Quartered => vec![
                Rect::new(rect.x, rect.y, self.left_w, self.top_h),
                Rect::new(c.x, rect.y, self.right_w, self.top_h),
                Rect::new(rect.x, c.y, self.left_w, self.bottom_h),
                Rect::new(c.x, c.y, self.right_w, self.bottom_h),
            ],
            SplitOutcome::HalvedHorizontally => vec![
                Rect::new(rect.x, rect.y, rect.w, self.top_h),
                Rect::new(rect.x, c.y, rect.w, self.bottom_h),
            ],
            SplitOutcome::HalvedVertically => vec![
                Rect::new(rect.x, rect.y, self.left_w, rect.h),
                Rect::new(c.x, rect.y, self.right_w, rect.h),
            ],
            SplitOutcome::Shifted | SplitOutcome::Untouched => vec![rect],
        }
    }
}

/// Shift `r` off the crosshair on the flagged axes, keeping its size.
pub fn adjust(r: Rect, c: Point, gap: f32, on_x: bool, on_y: bool) -> Rect {
    let centre = r.center();
    let mut out = r;
    if on_x {
        out.x = if centre.x < c.x { c.x - r.w - gap } else { c.x + gap };
    }
    if on_y {
        out.y = if centre.y < c.y { c.y - r.h - gap } else { c.y + gap };
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitEngine {
    pub min_size_to_split: f32,
    pub adjust_gap: f32,
}

impl SplitEngine {
    pub fn new(min_size_to_split: f32, adjust_gap: f32) -> Self {
        Self {
            min_size_to_split,
            adjust_gap,
        }
    }

    pub fn plan(&self, shape: &Shape, c: Point) -> SplitPlan {
        SplitPlan::new(shape.rect(), c, self.min_size_to_split)
    }

    /// Replacement shapes for one targeted shape.
    ///
    /// Cut pieces get fresh ids and the parent's colour. A shape that is only
    /// shifted keeps its id; an untouched one is returned verbatim.
    pub fn split_shape(&self, shape: &Shape, c: Point, ids: &mut dyn IdSource) -> Vec<Shape> {
        let plan = self.plan(shape, c);
        let (on_x, on_y) = (plan.adjust_x(), plan.adjust_y());

        match plan.outcome() {
            SplitOutcome::Untouched => vec![shape.clone()],
            SplitOutcome::Shifted => {
                let r = adjust(shape.rect(), c, self.adjust_gap, on_x, on_y);
                vec![shape.moved_to(r.x, r.y)]
            }
            _ => plan
                .pieces(shape.rect(), c)
                .into_iter()
                .map(|r| shape.child(ids.next_id(), adjust(r, c, self.adjust_gap, on_x, on_y)))
                .collect(),
        }
    }

    /// Split every targeted shape in `store` around `c`.
    pub fn apply(
        &self,
        store: &mut ShapeStore,
        c: Point,
        targets: &HashSet<ShapeId>,
        ids: &mut dyn IdSource,
    ) {
        profile_scope!("split_shapes");

        store.replace(targets, |shape| {
            let children = self.split_shape(shape, c, &mut *ids);
            debug!(
                parent = %shape.id,
                outcome = ?self.plan(shape, c).outcome(),
                children = children.len(),
                "Split shape"
            );
            children
        });
    }
}
