// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canonicalizing sweep over loose rectangle soup.
//!
//! [`build_sorted`] turns rectangles sorted by top edge, which may still
//! overlap or touch arbitrarily, into a canonical band list. A buffer of
//! active rectangles is kept sorted by left edge; output bands are cut at
//! every top or bottom edge, with touching and overlapping spans fused and
//! compatible adjacent bands coalesced as they are emitted.

use alloc::vec::Vec;

use crate::ops::coalesce_bands;
use crate::rect::Rect;

/// Build a canonical band list from non-empty rects sorted by `y0`.
///
/// Input rects may overlap, touch, or duplicate each other; empties must
/// already be filtered out. Unsorted input degrades to an unspecified but
/// memory-safe result.
pub(crate) fn build_sorted(rects: &[Rect]) -> Vec<Rect> {
    let mut out = Vec::with_capacity(rects.len());
    if rects.is_empty() {
        return out;
    }
    let mut active: Vec<Rect> = Vec::new();
    let mut i = 0;
    let mut prev = 0;
    let mut scanline = rects[0].y0;
    loop {
        let next_top = rects.get(i).map(|r| r.y0);
        let min_bottom = active.iter().map(|r| r.y1).min();
        let event = match (next_top, min_bottom) {
            (Some(t), Some(b)) => t.min(b),
            (Some(t), None) => t,
            (None, Some(b)) => b,
            (None, None) => break,
        };
        if event > scanline && !active.is_empty() {
            let cur = out.len();
            emit_merged(&mut out, scanline, event, &active);
            prev = coalesce_bands(&mut out, prev, cur);
        }
        scanline = event;
        active.retain(|r| r.y1 != event);
        while i < rects.len() && rects[i].y0 == event {
            let r = rects[i];
            let at = active.partition_point(|p| p.x0 <= r.x0);
            active.insert(at, r);
            i += 1;
        }
    }
    out
}

/// Emit the active buffer as one band, fusing touching and overlapping
/// spans. The buffer is sorted by left edge and non-empty.
fn emit_merged(out: &mut Vec<Rect>, y0: i32, y1: i32, active: &[Rect]) {
    let (mut x0, mut x1) = (active[0].x0, active[0].x1);
    for r in &active[1..] {
        if r.x0 <= x1 {
            x1 = x1.max(r.x1);
        } else {
            out.push(Rect::new(x0, y0, x1, y1));
            (x0, x1) = (r.x0, r.x1);
        }
    }
    out.push(Rect::new(x0, y0, x1, y1));
}

#[cfg(test)]
mod tests {
    use crate::{Rect, Region};

    #[test]
    fn overlapping_soup_canonicalizes() {
        let r = Region::from_rects(&[
            Rect::new(0, 0, 10, 10),
            Rect::new(5, 5, 15, 15),
            Rect::new(5, 5, 15, 15),
        ]);
        assert_eq!(
            r.rects(),
            &[
                Rect::new(0, 0, 10, 5),
                Rect::new(0, 5, 15, 10),
                Rect::new(5, 10, 15, 15),
            ]
        );
    }

    #[test]
    fn contained_rects_disappear() {
        let r = Region::from_rects(&[
            Rect::new(0, 0, 30, 30),
            Rect::new(5, 5, 10, 10),
            Rect::new(12, 3, 20, 25),
        ]);
        assert_eq!(r, Region::from_rect(Rect::new(0, 0, 30, 30)));
    }

    #[test]
    fn same_row_touching_rects_fuse() {
        let r = Region::from_rects(&[
            Rect::new(0, 0, 10, 10),
            Rect::new(10, 0, 20, 10),
            Rect::new(25, 0, 30, 10),
        ]);
        assert_eq!(
            r.rects(),
            &[Rect::new(0, 0, 20, 10), Rect::new(25, 0, 30, 10)]
        );
    }

    #[test]
    fn input_order_is_irrelevant() {
        let rects = [
            Rect::new(40, 60, 140, 90),
            Rect::new(0, 0, 100, 30),
            Rect::new(0, 30, 140, 60),
        ];
        let mut reversed = rects;
        reversed.reverse();
        assert_eq!(Region::from_rects(&rects), Region::from_rects(&reversed));
    }

    #[test]
    fn empty_rects_are_ignored() {
        let r = Region::from_rects(&[
            Rect::new(0, 0, 0, 10),
            Rect::new(3, 3, 9, 9),
            Rect::new(5, 5, 5, 5),
        ]);
        assert_eq!(r, Region::from_rect(Rect::new(3, 3, 9, 9)));
        assert!(Region::from_rects(&[]).is_empty());
    }

    #[test]
    fn sorted_path_matches_unsorted() {
        // Already sorted by top, but overlapping within and across rows.
        let rects = [
            Rect::new(0, 0, 12, 8),
            Rect::new(8, 0, 20, 8),
            Rect::new(4, 4, 16, 12),
        ];
        assert_eq!(
            Region::from_sorted_rects(&rects),
            Region::from_rects(&rects)
        );
    }
}
