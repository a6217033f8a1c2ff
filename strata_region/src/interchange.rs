// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interchange with region representations used by other systems.
//!
//! Two formats are supported:
//!
//! - [`BandedRegion`], the flat extents-plus-boxes layout used by X11-style
//!   region libraries. Conversion preserves structure in both directions,
//!   so a round trip reproduces the region exactly.
//! - A count-prefixed `i32` word stream for wire transfer, one word per
//!   rectangle corner. Decoding feeds the canonical constructor and never
//!   reads past the given slice, so truncated input degrades to a shorter
//!   region rather than an error.

use alloc::vec::Vec;

use crate::rect::Rect;
use crate::region::Region;

/// An X11-style region: precomputed extents plus a flat, banded box list.
///
/// `rects` holds every rectangle explicitly, including the single-rect
/// case, and `extents` is their envelope.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BandedRegion {
    /// Envelope of `rects`.
    pub extents: Rect,
    /// Banded rectangles, sorted by top then left.
    pub rects: Vec<Rect>,
}

impl Region {
    /// Copy the region out as an X11-style extents-plus-boxes list.
    pub fn to_banded(&self) -> BandedRegion {
        BandedRegion {
            extents: self.bounds(),
            rects: self.rects().to_vec(),
        }
    }

    /// Adopt an X11-style box list produced by [`Self::to_banded`] or a
    /// compatible region library. The list must already be canonical.
    pub fn from_banded(banded: BandedRegion) -> Self {
        Self::from_canonical_rects(banded.rects)
    }

    /// Serialize as a count-prefixed flat word stream: the rectangle
    /// count, then `x0 y0 x1 y1` per rectangle.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "rect counts stay far below i32::MAX"
    )]
    pub fn to_words(&self) -> Vec<i32> {
        let rects = self.rects();
        let mut words = Vec::with_capacity(1 + rects.len() * 4);
        words.push(rects.len() as i32);
        for r in rects {
            words.extend_from_slice(&[r.x0, r.y0, r.x1, r.y1]);
        }
        words
    }

    /// Rebuild a region from [`Self::to_words`] output. The count is
    /// clamped to the rectangles actually present, so truncated or
    /// malformed streams yield a shorter region instead of a panic.
    pub fn from_words(words: &[i32]) -> Self {
        let Some((&count, body)) = words.split_first() else {
            return Self::new();
        };
        let avail = body.len() / 4;
        let take = usize::try_from(count).map_or(0, |n| n.min(avail));
        let rects = body
            .chunks_exact(4)
            .take(take)
            .map(|c| Rect::new(c[0], c[1], c[2], c[3]))
            .collect();
        Self::from_canonical_rects(rects)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use crate::{Rect, Region};

    #[test]
    fn banded_roundtrip_preserves_structure() {
        let multi = Region::from_rects(&[Rect::new(0, 0, 10, 6), Rect::new(20, 0, 30, 6)]);
        let banded = multi.to_banded();
        assert_eq!(banded.extents, Rect::new(0, 0, 30, 6));
        assert_eq!(banded.rects.len(), 2);
        assert_eq!(Region::from_banded(banded), multi);

        let single = Region::from_rect(Rect::new(3, 4, 5, 6));
        let banded = single.to_banded();
        assert_eq!(banded.rects, vec![Rect::new(3, 4, 5, 6)]);
        assert_eq!(Region::from_banded(banded), single);

        let banded = Region::new().to_banded();
        assert!(banded.rects.is_empty());
        assert_eq!(Region::from_banded(banded), Region::new());
    }

    #[test]
    fn word_roundtrip() {
        let r = Region::from_rects(&[Rect::new(0, 0, 10, 6), Rect::new(20, 0, 30, 6)]);
        let words = r.to_words();
        assert_eq!(words, vec![2, 0, 0, 10, 6, 20, 0, 30, 6]);
        assert_eq!(Region::from_words(&words), r);

        assert_eq!(Region::new().to_words(), vec![0]);
        assert_eq!(Region::from_words(&[0]), Region::new());
        assert_eq!(Region::from_words(&[]), Region::new());
    }

    #[test]
    fn truncated_words_stay_safe() {
        let r = Region::from_rects(&[Rect::new(0, 0, 10, 6), Rect::new(20, 0, 30, 6)]);
        let mut words = r.to_words();
        words.truncate(6);
        // Only the first rect still has all four corners.
        assert_eq!(
            Region::from_words(&words),
            Region::from_rect(Rect::new(0, 0, 10, 6))
        );
        // An overlong count is clamped to the payload.
        assert_eq!(
            Region::from_words(&[9, 0, 0, 10, 6]),
            Region::from_rect(Rect::new(0, 0, 10, 6))
        );
        // A negative count reads nothing.
        assert_eq!(Region::from_words(&[-3, 0, 0, 10, 6]), Region::new());
    }
}
