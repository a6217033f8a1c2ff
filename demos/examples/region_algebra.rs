// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The four set operators on a pair of overlapping rectangles.
//!
//! Prints each result's canonical decomposition to show how regions band
//! their rectangles and fuse what touches.
//!
//! Run:
//! - `cargo run -p strata_examples --example region_algebra`

use strata_region::{Rect, Region};

fn dump(label: &str, r: &Region) {
    println!("== {} ==", label);
    if r.is_empty() {
        println!("  (empty)");
        return;
    }
    for rect in r.rects() {
        println!("  {:?}", rect);
    }
}

fn main() {
    let a = Region::from_rect(Rect::new(0, 0, 10, 10));
    let b = Region::from_rect(Rect::new(5, 5, 15, 15));

    let union = a.united(&b);
    let difference = a.subtracted(&b);
    let symmetric = a.xored(&b);
    let overlap = a.intersected(&b);

    dump("a | b", &union);
    dump("a - b", &difference);
    dump("a ^ b", &symmetric);
    dump("a & b", &overlap);

    // The operators agree with each other.
    assert_eq!(symmetric, union.subtracted(&overlap));
    assert_eq!(difference.united(&overlap), a);
    assert_eq!(a.subtracted(&a), Region::new());

    // Equality is coverage equality: assembly order never matters.
    let pieces = Region::from_rects(&[
        Rect::new(5, 5, 15, 10),
        Rect::new(5, 10, 15, 15),
    ]);
    assert_eq!(pieces, b);
    println!("coverage equality holds for {:?}", b.bounds());
}
