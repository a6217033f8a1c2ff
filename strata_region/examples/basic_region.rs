// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Strata Region: build, combine, and query.

use strata_region::{Point, Rect, Region};

fn main() {
    let a = Region::from_rect(Rect::new(0, 0, 10, 10));
    let b = Region::from_rect(Rect::new(5, 5, 15, 15));

    // Combine and inspect the canonical decomposition.
    let union = a.united(&b);
    println!("union bounds: {:?}", union.bounds());
    for r in union.rects() {
        println!("  {:?}", r);
    }

    // Query a point and a rect.
    println!("contains (12, 12): {}", union.contains_point(Point::new(12, 12)));
    println!(
        "intersects (9, 9, 11, 11): {}",
        union.intersects_rect(Rect::new(9, 9, 11, 11))
    );
}
