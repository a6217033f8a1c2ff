// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Containment and intersection queries over canonical regions.

use crate::rect::{Point, Rect};
use crate::region::{Region, band_len};

impl Region {
    /// Index of the first entry whose band extends below `y`.
    ///
    /// Entry bottoms are non-decreasing in canonical order, which makes the
    /// band boundary a partition point. Returns the entry count when every
    /// band ends at or above `y`.
    pub(crate) fn band_by_y(&self, y: i32) -> usize {
        self.entries.partition_point(|r| r.y1 <= y)
    }

    /// Whether the point lies inside the region.
    pub fn contains_point(&self, p: Point) -> bool {
        if self.entries.is_empty() {
            return self.bounds.contains(p);
        }
        if !self.bounds.contains(p) {
            return false;
        }
        let i = self.band_by_y(p.y);
        // The found band may still start below the point.
        if i == self.entries.len() || self.entries[i].y0 > p.y {
            return false;
        }
        for r in &self.entries[i..i + band_len(&self.entries, i)] {
            if r.x1 > p.x {
                return r.x0 <= p.x;
            }
        }
        false
    }

    /// Whether the rectangle lies entirely inside the region.
    ///
    /// False when either operand is empty. The sweep walks bands downward
    /// from `q.y0`; every row of `q` must be covered, and because entries
    /// in a band never touch, a single entry must span `q`'s full
    /// horizontal extent in each band. Any vertical gap or partial
    /// horizontal cover fails.
    pub fn contains_rect(&self, q: Rect) -> bool {
        if q.is_empty() || self.is_empty() {
            return false;
        }
        if self.entries.is_empty() {
            return self.bounds.contains_rect(q);
        }
        if !self.bounds.contains_rect(q) {
            return false;
        }
        let mut i = self.band_by_y(q.y0);
        let mut scan = q.y0;
        while scan < q.y1 {
            if i == self.entries.len() || self.entries[i].y0 > scan {
                return false;
            }
            let band = &self.entries[i..i + band_len(&self.entries, i)];
            let Some(cover) = band.iter().find(|r| r.x1 > q.x0) else {
                return false;
            };
            if cover.x0 > q.x0 || cover.x1 < q.x1 {
                return false;
            }
            scan = cover.y1;
            i += band.len();
        }
        true
    }

    /// Whether the rectangle overlaps the region anywhere.
    ///
    /// Succeeds on the first overlapping entry.
    pub fn intersects_rect(&self, q: Rect) -> bool {
        if q.is_empty() || self.is_empty() {
            return false;
        }
        if self.entries.is_empty() {
            return self.bounds.intersects(q);
        }
        if !self.bounds.intersects(q) {
            return false;
        }
        // Every entry from the lookup point onward extends below q.y0.
        for r in &self.entries[self.band_by_y(q.y0)..] {
            if r.y0 >= q.y1 {
                return false;
            }
            if r.x1 > q.x0 && r.x0 < q.x1 {
                return true;
            }
        }
        false
    }

    /// Whether the two regions overlap anywhere.
    pub fn intersects(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() || !self.bounds.intersects(other.bounds) {
            return false;
        }
        if self.entries.is_empty() && other.entries.is_empty() {
            return true;
        }
        // Drive the probe from the simpler operand.
        let (probe, target) = if self.rect_count() <= other.rect_count() {
            (self, other)
        } else {
            (other, self)
        };
        probe.rects().iter().any(|r| target.intersects_rect(*r))
    }
}
