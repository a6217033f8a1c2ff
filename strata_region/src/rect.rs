// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types: integer points and half-open rectangles.

/// A point on the integer pixel grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// Create a point from its coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle covering the half-open area `[x0, x1) × [y0, y1)`.
///
/// Coordinates are integers. A rectangle is empty when either axis has no
/// extent; inverted rectangles behave as empty. The half-open convention
/// makes adjacency exact: `[a, b)` and `[b, c)` tile with no overlap and no
/// gap, which is what keeps region arithmetic free of off-by-one seams.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x0: i32,
    /// Top edge (inclusive).
    pub y0: i32,
    /// Right edge (exclusive).
    pub x1: i32,
    /// Bottom edge (exclusive).
    pub y1: i32,
}

impl Rect {
    /// The empty rectangle at the origin.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// The rectangle spanning the whole representable coordinate range.
    ///
    /// Backs [`Region::unbounded`](crate::Region::unbounded).
    pub const UNBOUNDED: Self = Self::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX);

    /// Create a rectangle from left/top/right/bottom edges.
    ///
    /// Edges are stored as given; nothing is normalized.
    #[inline]
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Create a rectangle from its origin and size.
    #[inline]
    pub const fn from_xywh(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self::new(x, y, x.saturating_add(w), y.saturating_add(h))
    }

    /// Create a rectangle from two corner points, normalizing their order.
    #[inline]
    pub fn from_points(a: Point, b: Point) -> Self {
        Self::new(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
    }

    /// Whether the rectangle covers no area.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.x1 <= self.x0 || self.y1 <= self.y0
    }

    /// Width, saturating at the representable edge.
    #[inline]
    pub const fn width(self) -> i32 {
        self.x1.saturating_sub(self.x0)
    }

    /// Height, saturating at the representable edge.
    #[inline]
    pub const fn height(self) -> i32 {
        self.y1.saturating_sub(self.y0)
    }

    /// Whether the point lies inside the rectangle.
    ///
    /// Points on the right or bottom edge are outside (half-open).
    #[inline]
    pub const fn contains(self, p: Point) -> bool {
        self.x0 <= p.x && p.x < self.x1 && self.y0 <= p.y && p.y < self.y1
    }

    /// Whether `other` lies entirely inside this rectangle.
    ///
    /// False when either rectangle is empty.
    #[inline]
    pub const fn contains_rect(self, other: Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x0 <= other.x0
            && other.x1 <= self.x1
            && self.y0 <= other.y0
            && other.y1 <= self.y1
    }

    /// Whether the two rectangles share any area.
    ///
    /// Touching edges do not count.
    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x0 < other.x1
            && other.x0 < self.x1
            && self.y0 < other.y1
            && other.y0 < self.y1
    }

    /// The smallest rectangle containing both operands.
    ///
    /// Empty operands contribute nothing.
    #[inline]
    pub fn united(self, other: Self) -> Self {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }
        Self::new(
            self.x0.min(other.x0),
            self.y0.min(other.y0),
            self.x1.max(other.x1),
            self.y1.max(other.y1),
        )
    }

    /// The overlap of the two rectangles, or [`Rect::ZERO`] if they do not
    /// intersect.
    #[inline]
    pub fn intersected(self, other: Self) -> Self {
        let r = Self::new(
            self.x0.max(other.x0),
            self.y0.max(other.y0),
            self.x1.min(other.x1),
            self.y1.min(other.y1),
        );
        if r.is_empty() { Self::ZERO } else { r }
    }

    /// The rectangle shifted by `(dx, dy)`, saturating at the representable
    /// edge.
    #[inline]
    pub const fn translated(self, dx: i32, dy: i32) -> Self {
        Self::new(
            self.x0.saturating_add(dx),
            self.y0.saturating_add(dy),
            self.x1.saturating_add(dx),
            self.y1.saturating_add(dy),
        )
    }

    /// Scale every edge by the per-axis factors, yielding the real-valued
    /// rectangle.
    ///
    /// Callers needing integer output round outward:
    /// `r.scaled(sx, sy).abs().expand()` is the smallest integer superset.
    #[inline]
    pub fn scaled(self, sx: f64, sy: f64) -> kurbo::Rect {
        kurbo::Rect::new(
            f64::from(self.x0) * sx,
            f64::from(self.y0) * sy,
            f64::from(self.x1) * sx,
            f64::from(self.y1) * sy,
        )
    }
}
