// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=strata_region --heading-base-level=0

//! Strata Region: minimal rectangle sets with boolean set algebra.
//!
//! Strata Region models areas of the integer plane as sets of axis-aligned
//! rectangles, the way compositors track damage, opaque areas, and input
//! shapes.
//!
//! - Build a [`Region`] from loose, possibly overlapping rectangles; it is
//!   stored in a unique minimal form, so `==` compares coverage.
//! - Combine regions with [`united`](Region::united),
//!   [`subtracted`](Region::subtracted), [`xored`](Region::xored), and
//!   [`intersected`](Region::intersected).
//! - Query point and rectangle containment or overlap without allocating.
//! - Translate, scale with outward rounding, and exchange regions with
//!   X11-style region libraries via [`interchange`].
//!
//! The empty region and single-rectangle regions are represented by their
//! bounds alone and allocate nothing, which keeps the common cases cheap.
//!
//! # Example
//!
//! ```rust
//! use strata_region::{Point, Rect, Region};
//!
//! // Accumulate damage from two overlapping updates.
//! let a = Region::from_rect(Rect::new(0, 0, 100, 60));
//! let b = Region::from_rect(Rect::new(40, 30, 140, 90));
//! let damage = a.united(&b);
//! assert_eq!(damage.rect_count(), 3);
//! assert_eq!(damage.bounds(), Rect::new(0, 0, 140, 90));
//! assert!(damage.contains_point(Point::new(120, 70)));
//!
//! // Clip to the output and drop what an opaque surface hides.
//! let output = Region::from_rect(Rect::new(0, 0, 128, 128));
//! let opaque = Region::from_rect(Rect::new(10, 10, 50, 50));
//! let visible = damage.intersected(&output).subtracted(&opaque);
//! assert!(!visible.contains_point(Point::new(20, 20)));
//! assert!(visible.contains_point(Point::new(60, 40)));
//! ```
//!
//! ## Canonical form
//!
//! A region is kept as bands of rectangles sharing a vertical extent,
//! sorted top to bottom and left to right, with touching spans fused and
//! vertically compatible bands merged. The decomposition is unique for a
//! given coverage, so two regions are equal exactly when they cover the
//! same points, no matter how they were assembled:
//!
//! ```rust
//! use strata_region::{Rect, Region};
//!
//! let whole = Region::from_rect(Rect::new(0, 0, 100, 100));
//! let halves =
//!     Region::from_rects(&[Rect::new(0, 0, 50, 100), Rect::new(50, 0, 100, 100)]);
//! assert_eq!(whole, halves);
//! ```
//!
//! ## Coordinates
//!
//! Rectangles are half-open `i32` intervals: `[x0, x1) × [y0, y1)`, empty
//! whenever either interval is. Every operation is total. Construction
//! from width and height saturates at the representable edge, and
//! [`Region::unbounded`] serves as a "no clipping" sentinel that the
//! transforms pass through unchanged.

#![no_std]

extern crate alloc;

pub mod interchange;
mod ops;
mod query;
pub mod rect;
pub mod region;
mod sweep;

pub use interchange::BandedRegion;
pub use rect::{Point, Rect};
pub use region::Region;
