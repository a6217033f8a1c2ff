// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Damage tracking with regions.
//!
//! Accumulates per-frame damage from several surface updates, clips it to
//! the output, and removes the part hidden behind an opaque surface. The
//! remaining rectangles are what a compositor would actually repaint.
//!
//! Run:
//! - `cargo run -p strata_examples --example damage_tracking`

use strata_region::{Rect, Region};

fn main() {
    // Three surfaces reported damage this frame.
    let updates = [
        Rect::new(0, 0, 256, 144),
        Rect::new(200, 100, 456, 244),
        Rect::new(0, 144, 256, 288),
    ];
    let mut damage = Region::new();
    for &r in &updates {
        damage = damage.united(&Region::from_rect(r));
    }
    println!("== Accumulated damage ==");
    println!("  bounds: {:?}", damage.bounds());
    for r in damage.rects() {
        println!("  {:?}", r);
    }

    // Clip to the output and drop what the opaque window hides.
    let output = Region::from_rect(Rect::new(0, 0, 400, 300));
    let opaque = Region::from_rect(Rect::new(50, 50, 200, 200));
    let repaint = damage.intersected(&output).subtracted(&opaque);
    println!("== Repaint after clipping and occlusion ==");
    for r in repaint.rects() {
        println!("  {:?}", r);
    }
    assert!(!repaint.contains_rect(Rect::new(60, 60, 190, 190)));

    // A fullscreen pass resets the accumulator to a single rect.
    let fullscreen = repaint.united(&output);
    assert_eq!(fullscreen, output);
    println!("fullscreen damage collapses to {:?}", fullscreen.bounds());
}
