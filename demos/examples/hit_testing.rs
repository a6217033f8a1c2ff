// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input-shape hit testing.
//!
//! Builds the input region of a window with a client-side shadow margin
//! and a circular-ish cutout, then resolves pointer positions against it.
//!
//! Run:
//! - `cargo run -p strata_examples --example hit_testing`

use strata_region::{Point, Rect, Region};

fn main() {
    // The window geometry is larger than what accepts input: an 8 px
    // shadow margin all around is click-through.
    let geometry = Region::from_rect(Rect::new(0, 0, 320, 240));
    let shadow_margin = geometry.subtracted(&Region::from_rect(Rect::new(8, 8, 312, 232)));
    let mut input = geometry.subtracted(&shadow_margin);

    // A plugin knocked a hole into the input shape.
    input = input.subtracted(&Region::from_rect(Rect::new(120, 80, 200, 160)));

    println!("input shape, {} rects:", input.rect_count());
    for r in input.rects() {
        println!("  {:?}", r);
    }

    let probes = [
        Point::new(4, 4),     // shadow, click-through
        Point::new(16, 16),   // content
        Point::new(150, 100), // inside the hole
        Point::new(300, 200), // content near the far corner
    ];
    println!("== Pointer resolution ==");
    for p in probes {
        let verdict = if input.contains_point(p) {
            "hit"
        } else {
            "pass-through"
        };
        println!("  {:?}: {}", p, verdict);
    }

    assert!(!input.contains_point(Point::new(4, 4)));
    assert!(input.contains_point(Point::new(16, 16)));
    assert!(!input.contains_point(Point::new(150, 100)));
    assert!(input.contains_point(Point::new(300, 200)));
}
