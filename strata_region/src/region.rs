// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Region`] value type: construction, canonical maintenance, and
//! geometric transforms.

use alloc::vec::Vec;
use core::fmt;
use core::slice;

use crate::rect::Rect;
use crate::sweep;

/// An area of the integer plane, stored as a minimal set of non-overlapping
/// rectangles in canonical banded order.
///
/// The common cases allocate nothing: the empty region and single-rectangle
/// regions are represented by their bounds alone, with no entry list.
/// Multi-rectangle regions keep their rectangles sorted by top edge then
/// left edge, grouped into bands of equal vertical extent, with entries in a
/// band never touching and vertically mergeable bands always merged.
/// Canonical form is unique, so derived equality compares coverage.
///
/// Every operation is total; see the crate docs for the coordinate and
/// degenerate-input rules.
#[derive(Clone, PartialEq, Eq)]
pub struct Region {
    /// Envelope of the region. For regions with no entries this is the
    /// region itself.
    pub(crate) bounds: Rect,
    /// Canonical rectangle list; empty for the empty region and for
    /// single-rectangle regions, otherwise at least two entries.
    pub(crate) entries: Vec<Rect>,
}

impl Region {
    /// Create an empty region.
    pub const fn new() -> Self {
        Self {
            bounds: Rect::ZERO,
            entries: Vec::new(),
        }
    }

    /// The region covering the entire representable coordinate range.
    ///
    /// Used as a "no clipping" sentinel. [`translated`](Self::translated)
    /// and [`scaled_rounded_out`](Self::scaled_rounded_out) return it
    /// unchanged instead of overflowing; every other operation treats it as
    /// ordinary data.
    pub const fn unbounded() -> Self {
        Self {
            bounds: Rect::UNBOUNDED,
            entries: Vec::new(),
        }
    }

    /// Create a region covering a single rectangle.
    ///
    /// An empty rectangle yields the empty region.
    pub const fn from_rect(rect: Rect) -> Self {
        if rect.is_empty() {
            Self::new()
        } else {
            Self {
                bounds: rect,
                entries: Vec::new(),
            }
        }
    }

    /// Build a region from rectangles in arbitrary order.
    ///
    /// Rectangles may overlap freely; empty rectangles are ignored.
    ///
    /// ```
    /// use strata_region::{Rect, Region};
    ///
    /// let r = Region::from_rects(&[Rect::new(0, 0, 10, 10), Rect::new(5, 5, 15, 15)]);
    /// assert_eq!(r.rect_count(), 3);
    /// assert_eq!(r.bounds(), Rect::new(0, 0, 15, 15));
    /// ```
    pub fn from_rects(rects: &[Rect]) -> Self {
        let mut list: Vec<Rect> = rects.iter().copied().filter(|r| !r.is_empty()).collect();
        list.sort_unstable_by_key(|r| (r.y0, r.x0));
        Self::from_band_list(sweep::build_sorted(&list))
    }

    /// Build a region from rectangles already sorted by top edge.
    ///
    /// Rectangles may still overlap within and across rows; empty
    /// rectangles are ignored. Violating the sort order yields an
    /// unspecified (but safe) region.
    pub fn from_sorted_rects(rects: &[Rect]) -> Self {
        let list: Vec<Rect> = rects.iter().copied().filter(|r| !r.is_empty()).collect();
        Self::from_band_list(sweep::build_sorted(&list))
    }

    /// Wrap rectangles that are already in canonical banded order.
    ///
    /// This is the fast import path for previously exported entry lists
    /// (see [`Region::rects`]); the input is not validated. Non-canonical
    /// input yields an unspecified (but safe) region.
    pub fn from_canonical_rects(rects: Vec<Rect>) -> Self {
        Self::from_band_list(rects)
    }

    /// Finish a canonical band list: collapse short lists to the bounds-only
    /// form and recompute the envelope.
    pub(crate) fn from_band_list(entries: Vec<Rect>) -> Self {
        match entries.len() {
            0 => Self::new(),
            1 => Self::from_rect(entries[0]),
            _ => {
                let mut bounds = entries[0];
                for r in &entries[1..] {
                    bounds = bounds.united(*r);
                }
                Self { bounds, entries }
            }
        }
    }

    /// Whether the region covers no area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.bounds.is_empty()
    }

    /// Whether this is the unbounded sentinel.
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.entries.is_empty() && self.bounds == Rect::UNBOUNDED
    }

    /// The tight envelope of the region.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The number of rectangles the region decomposes into.
    #[inline]
    pub fn rect_count(&self) -> usize {
        if self.entries.is_empty() {
            usize::from(!self.bounds.is_empty())
        } else {
            self.entries.len()
        }
    }

    /// The canonical rectangle decomposition, in banded y-x order.
    ///
    /// Single-rectangle regions yield a one-element view of the bounds and
    /// the empty region an empty slice, so no allocation happens. The view
    /// round-trips exactly through [`Region::from_canonical_rects`].
    #[inline]
    pub fn rects(&self) -> &[Rect] {
        if self.entries.is_empty() {
            if self.bounds.is_empty() {
                &[]
            } else {
                slice::from_ref(&self.bounds)
            }
        } else {
            &self.entries
        }
    }

    /// The region shifted by `(dx, dy)`.
    ///
    /// Translation preserves canonical form, so nothing is rebuilt. The
    /// unbounded sentinel is returned unchanged; all other coordinates
    /// saturate at the representable edge.
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        if self.is_empty() || self.is_unbounded() || (dx == 0 && dy == 0) {
            return self.clone();
        }
        Self {
            bounds: self.bounds.translated(dx, dy),
            entries: self
                .entries
                .iter()
                .map(|r| r.translated(dx, dy))
                .collect(),
        }
    }

    /// The region scaled by per-axis factors, every rectangle rounded
    /// outward to integer coordinates.
    ///
    /// The result covers at least the scaled area. Independent outward
    /// rounding can make neighbors touch or overlap, so multi-rectangle
    /// regions are rebuilt through the sweep. The unbounded sentinel and
    /// scaling by exactly one return the region unchanged.
    pub fn scaled_rounded_out(&self, sx: f64, sy: f64) -> Self {
        if self.is_empty() || self.is_unbounded() || (sx == 1.0 && sy == 1.0) {
            return self.clone();
        }
        if self.entries.is_empty() {
            return Self::from_rect(scale_rect_out(self.bounds, sx, sy));
        }
        let mut scaled: Vec<Rect> = self
            .entries
            .iter()
            .map(|r| scale_rect_out(*r, sx, sy))
            .filter(|r| !r.is_empty())
            .collect();
        scaled.sort_unstable_by_key(|r| (r.y0, r.x0));
        Self::from_band_list(sweep::build_sorted(&scaled))
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Rect> for Region {
    fn from(rect: Rect) -> Self {
        Self::from_rect(rect)
    }
}

impl fmt::Debug for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Region")
            .field("bounds", &self.bounds)
            .field("rects", &self.rects())
            .finish_non_exhaustive()
    }
}

/// Length of the maximal run of entries sharing `rects[start]`'s top edge.
///
/// In canonical order a shared top edge implies one band.
pub(crate) fn band_len(rects: &[Rect], start: usize) -> usize {
    let top = rects[start].y0;
    rects[start..].iter().take_while(|r| r.y0 == top).count()
}

/// Scale a rectangle and round it outward to the smallest integer superset.
#[allow(
    clippy::cast_possible_truncation,
    reason = "expand() yields integral values and float-to-int casts saturate at the i32 range"
)]
fn scale_rect_out(r: Rect, sx: f64, sy: f64) -> Rect {
    let s = r.scaled(sx, sy).abs().expand();
    Rect::new(s.x0 as i32, s.y0 as i32, s.x1 as i32, s.y1 as i32)
}
