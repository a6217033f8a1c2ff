// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boolean set operations over canonical regions.
//!
//! All four operators run the same band sweep: walk both operands' bands
//! top to bottom, cutting output at every top or bottom edge, and combine
//! the horizontal spans of vertically overlapping bands with an
//! operator-specific merge. Each emitted band gets one chance to fuse with
//! the band above it, which keeps the output canonical without a rebuild
//! pass.

use alloc::vec::Vec;

use crate::rect::Rect;
use crate::region::{Region, band_len};

/// Per-operator behavior under the shared band sweep.
trait BandRule {
    /// Emit intervals where only the left operand has a band.
    const EMIT_LEFT: bool;
    /// Emit intervals where only the right operand has a band.
    const EMIT_RIGHT: bool;

    /// Combine one band from each operand over the vertical interval
    /// `[y0, y1)`. Both slices are non-empty and sorted left to right.
    fn merge_bands(out: &mut Vec<Rect>, y0: i32, y1: i32, left: &[Rect], right: &[Rect]);
}

/// Area covered by either operand.
struct UnionRule;

/// Area of the left operand not covered by the right.
struct SubtractRule;

/// Area covered by exactly one operand.
struct XorRule;

/// Area covered by both operands.
struct IntersectRule;

impl BandRule for UnionRule {
    const EMIT_LEFT: bool = true;
    const EMIT_RIGHT: bool = true;

    fn merge_bands(out: &mut Vec<Rect>, y0: i32, y1: i32, left: &[Rect], right: &[Rect]) {
        let (mut i, mut j) = (0, 0);
        let Some((mut x0, mut x1)) = next_span(left, &mut i, right, &mut j) else {
            return;
        };
        while let Some((nx0, nx1)) = next_span(left, &mut i, right, &mut j) {
            if nx0 <= x1 {
                // Touching or overlapping spans fuse.
                x1 = x1.max(nx1);
            } else {
                out.push(Rect::new(x0, y0, x1, y1));
                (x0, x1) = (nx0, nx1);
            }
        }
        out.push(Rect::new(x0, y0, x1, y1));
    }
}

impl BandRule for SubtractRule {
    const EMIT_LEFT: bool = true;
    const EMIT_RIGHT: bool = false;

    fn merge_bands(out: &mut Vec<Rect>, y0: i32, y1: i32, left: &[Rect], right: &[Rect]) {
        let mut j = 0;
        for s in left {
            let mut x = s.x0;
            while x < s.x1 {
                while j < right.len() && right[j].x1 <= x {
                    j += 1;
                }
                match right.get(j) {
                    // No hole reaches into the rest of this span.
                    None => {
                        out.push(Rect::new(x, y0, s.x1, y1));
                        x = s.x1;
                    }
                    Some(hole) if hole.x0 >= s.x1 => {
                        out.push(Rect::new(x, y0, s.x1, y1));
                        x = s.x1;
                    }
                    // The gap before the hole survives; skip the hole.
                    Some(hole) if hole.x0 > x => {
                        out.push(Rect::new(x, y0, hole.x0, y1));
                        x = hole.x1;
                    }
                    // Covered from x onward.
                    Some(hole) => x = hole.x1,
                }
            }
        }
    }
}

impl BandRule for XorRule {
    const EMIT_LEFT: bool = true;
    const EMIT_RIGHT: bool = true;

    fn merge_bands(out: &mut Vec<Rect>, y0: i32, y1: i32, left: &[Rect], right: &[Rect]) {
        let (mut i, mut j) = (0, 0);
        let (mut in_l, mut in_r) = (false, false);
        let mut open = 0;
        // Walk span edges in order, tracking coverage parity. A span is
        // open exactly while one operand covers; simultaneous edges keep
        // parity and so fuse touching output.
        loop {
            let lx = if in_l {
                Some(left[i].x1)
            } else {
                left.get(i).map(|r| r.x0)
            };
            let rx = if in_r {
                Some(right[j].x1)
            } else {
                right.get(j).map(|r| r.x0)
            };
            let x = match (lx, rx) {
                (Some(a), Some(b)) => a.min(b),
                (Some(a), None) => a,
                (None, Some(b)) => b,
                (None, None) => break,
            };
            let before = in_l != in_r;
            if lx == Some(x) {
                if in_l {
                    in_l = false;
                    i += 1;
                } else {
                    in_l = true;
                }
            }
            if rx == Some(x) {
                if in_r {
                    in_r = false;
                    j += 1;
                } else {
                    in_r = true;
                }
            }
            let after = in_l != in_r;
            if !before && after {
                open = x;
            } else if before && !after {
                out.push(Rect::new(open, y0, x, y1));
            }
        }
    }
}

impl BandRule for IntersectRule {
    const EMIT_LEFT: bool = false;
    const EMIT_RIGHT: bool = false;

    fn merge_bands(out: &mut Vec<Rect>, y0: i32, y1: i32, left: &[Rect], right: &[Rect]) {
        let (mut i, mut j) = (0, 0);
        while i < left.len() && j < right.len() {
            let x0 = left[i].x0.max(right[j].x0);
            let x1 = left[i].x1.min(right[j].x1);
            if x0 < x1 {
                out.push(Rect::new(x0, y0, x1, y1));
            }
            // Advance the span that ends first.
            if left[i].x1 <= right[j].x1 {
                i += 1;
            } else {
                j += 1;
            }
        }
    }
}

/// Take the span with the smaller left edge from the head of either slice.
fn next_span(a: &[Rect], i: &mut usize, b: &[Rect], j: &mut usize) -> Option<(i32, i32)> {
    match (a.get(*i), b.get(*j)) {
        (Some(ra), Some(rb)) => {
            if ra.x0 <= rb.x0 {
                *i += 1;
                Some((ra.x0, ra.x1))
            } else {
                *j += 1;
                Some((rb.x0, rb.x1))
            }
        }
        (Some(ra), None) => {
            *i += 1;
            Some((ra.x0, ra.x1))
        }
        (None, Some(rb)) => {
            *j += 1;
            Some((rb.x0, rb.x1))
        }
        (None, None) => None,
    }
}

/// Copy one band's spans with a new vertical extent.
fn emit_slice(out: &mut Vec<Rect>, y0: i32, y1: i32, band: &[Rect]) {
    for r in band {
        out.push(Rect::new(r.x0, y0, r.x1, y1));
    }
}

/// Try to fuse the newest band `[cur..]` into the one before it,
/// `[prev..cur)`: same span count, identical spans, shared horizontal
/// boundary. Returns the start of the surviving newest band.
pub(crate) fn coalesce_bands(out: &mut Vec<Rect>, prev: usize, cur: usize) -> usize {
    if cur == out.len() {
        // Nothing was emitted; the old band stays newest.
        return prev;
    }
    if prev == cur {
        return cur;
    }
    let len = out.len() - cur;
    if len != cur - prev || out[prev].y1 != out[cur].y0 {
        return cur;
    }
    for k in 0..len {
        if out[prev + k].x0 != out[cur + k].x0 || out[prev + k].x1 != out[cur + k].x1 {
            return cur;
        }
    }
    let bottom = out[cur].y1;
    out.truncate(cur);
    for r in &mut out[prev..] {
        r.y1 = bottom;
    }
    prev
}

/// Append an operand's unconsumed bands. The first band may be partially
/// consumed already, so it is clipped to start no higher than `scanline`
/// and given one coalesce attempt; later bands transfer verbatim.
fn append_tail(out: &mut Vec<Rect>, prev: &mut usize, rest: &[Rect], scanline: i32) {
    let n = band_len(rest, 0);
    let cur = out.len();
    emit_slice(out, rest[0].y0.max(scanline), rest[0].y1, &rest[..n]);
    *prev = coalesce_bands(out, *prev, cur);
    out.extend_from_slice(&rest[n..]);
}

/// Run the band sweep over two canonical entry sequences.
fn combine<R: BandRule>(a: &[Rect], b: &[Rect]) -> Vec<Rect> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let mut scanline = match (a.first(), b.first()) {
        (Some(ra), Some(rb)) => ra.y0.min(rb.y0),
        (Some(ra), None) => ra.y0,
        (None, Some(rb)) => rb.y0,
        (None, None) => return out,
    };
    let (mut ia, mut ib) = (0, 0);
    // Start index of the last completed output band.
    let mut prev = 0;
    while ia < a.len() && ib < b.len() {
        let (top_a, bot_a) = (a[ia].y0, a[ia].y1);
        let (top_b, bot_b) = (b[ib].y0, b[ib].y1);
        // Jump vertical gaps where neither operand has a band.
        if scanline < top_a && scanline < top_b {
            scanline = top_a.min(top_b);
        }
        let a_active = top_a <= scanline;
        let b_active = top_b <= scanline;
        let cur = out.len();
        let event = if a_active && b_active {
            let event = bot_a.min(bot_b);
            R::merge_bands(
                &mut out,
                scanline,
                event,
                &a[ia..ia + band_len(a, ia)],
                &b[ib..ib + band_len(b, ib)],
            );
            event
        } else if a_active {
            let event = bot_a.min(top_b);
            if R::EMIT_LEFT {
                emit_slice(&mut out, scanline, event, &a[ia..ia + band_len(a, ia)]);
            }
            event
        } else {
            let event = bot_b.min(top_a);
            if R::EMIT_RIGHT {
                emit_slice(&mut out, scanline, event, &b[ib..ib + band_len(b, ib)]);
            }
            event
        };
        prev = coalesce_bands(&mut out, prev, cur);
        scanline = event;
        if a_active && bot_a == scanline {
            ia += band_len(a, ia);
        }
        if b_active && bot_b == scanline {
            ib += band_len(b, ib);
        }
    }
    if R::EMIT_LEFT && ia < a.len() {
        append_tail(&mut out, &mut prev, &a[ia..], scanline);
    }
    if R::EMIT_RIGHT && ib < b.len() {
        append_tail(&mut out, &mut prev, &b[ib..], scanline);
    }
    out
}

impl Region {
    /// The union of the two regions.
    ///
    /// ```
    /// use strata_region::{Rect, Region};
    ///
    /// let a = Region::from_rect(Rect::new(0, 0, 10, 10));
    /// let b = Region::from_rect(Rect::new(0, 10, 10, 20));
    /// assert_eq!(a.united(&b), Region::from_rect(Rect::new(0, 0, 10, 20)));
    /// ```
    pub fn united(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() || self == other {
            return self.clone();
        }
        if self.entries.is_empty() && self.bounds.contains_rect(other.bounds) {
            return self.clone();
        }
        if other.entries.is_empty() && other.bounds.contains_rect(self.bounds) {
            return other.clone();
        }
        Self::from_band_list(combine::<UnionRule>(self.rects(), other.rects()))
    }

    /// The region minus `other`.
    pub fn subtracted(&self, other: &Self) -> Self {
        if self.is_empty() || self == other {
            return Self::new();
        }
        if other.is_empty() || !self.bounds.intersects(other.bounds) {
            return self.clone();
        }
        if other.entries.is_empty() && other.bounds.contains_rect(self.bounds) {
            return Self::new();
        }
        Self::from_band_list(combine::<SubtractRule>(self.rects(), other.rects()))
    }

    /// The symmetric difference: area covered by exactly one operand.
    pub fn xored(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }
        if self == other {
            return Self::new();
        }
        Self::from_band_list(combine::<XorRule>(self.rects(), other.rects()))
    }

    /// The overlap of the two regions.
    pub fn intersected(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() || !self.bounds.intersects(other.bounds) {
            return Self::new();
        }
        if self == other {
            return self.clone();
        }
        if self.entries.is_empty() && other.entries.is_empty() {
            return Self::from_rect(self.bounds.intersected(other.bounds));
        }
        if self.entries.is_empty() && self.bounds.contains_rect(other.bounds) {
            return other.clone();
        }
        if other.entries.is_empty() && other.bounds.contains_rect(self.bounds) {
            return self.clone();
        }
        Self::from_band_list(combine::<IntersectRule>(self.rects(), other.rects()))
    }
}
