// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use strata_region::{Point, Rect, Region};

/// Every other cell of an `n x n` grid, the worst case for banding: no two
/// rects fuse.
fn gen_checkerboard(n: i32, cell: i32) -> Vec<Rect> {
    let mut out = Vec::new();
    for y in 0..n {
        for x in 0..n {
            if (x + y) % 2 == 0 {
                out.push(Rect::new(
                    x * cell,
                    y * cell,
                    (x + 1) * cell,
                    (y + 1) * cell,
                ));
            }
        }
    }
    out
}

/// Horizontal strips with a gap between rows, a friendly banded layout.
fn gen_rows(n_rows: i32, width: i32, height: i32) -> Vec<Rect> {
    let mut out = Vec::with_capacity(n_rows as usize);
    for row in 0..n_rows {
        let y0 = row * height * 2;
        out.push(Rect::new(0, y0, width, y0 + height));
    }
    out
}

fn bench_set_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_ops");
    for &n in &[8i32, 16, 32] {
        let a = Region::from_rects(&gen_checkerboard(n, 10));
        let b = a.translated(10, 0);
        group.throughput(Throughput::Elements(
            (a.rect_count() + b.rect_count()) as u64,
        ));
        group.bench_function(format!("united_checker_n{}", n), |bench| {
            bench.iter(|| black_box(a.united(&b)))
        });
        group.bench_function(format!("subtracted_checker_n{}", n), |bench| {
            bench.iter(|| black_box(a.subtracted(&b)))
        });
        group.bench_function(format!("xored_checker_n{}", n), |bench| {
            bench.iter(|| black_box(a.xored(&b)))
        });
        group.bench_function(format!("intersected_checker_n{}", n), |bench| {
            bench.iter(|| black_box(a.intersected(&b)))
        });
    }
    // Overlapping rows exercise the two-sided merge rather than the
    // one-sided fast slices.
    let rows = Region::from_rects(&gen_rows(64, 2000, 8));
    let shifted = rows.translated(100, 8);
    group.throughput(Throughput::Elements(
        (rows.rect_count() + shifted.rect_count()) as u64,
    ));
    group.bench_function("united_rows_offset", |bench| {
        bench.iter(|| black_box(rows.united(&shifted)))
    });
    group.bench_function("subtracted_rows_offset", |bench| {
        bench.iter(|| black_box(rows.subtracted(&shifted)))
    });
    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");
    let region = Region::from_rects(&gen_checkerboard(32, 10));
    let extent = 32 * 10;
    group.throughput(Throughput::Elements(1024));
    group.bench_function("contains_point_checker_n32", |bench| {
        bench.iter(|| {
            let mut hits = 0usize;
            for i in 0..1024i32 {
                let p = Point::new((i * 7) % extent, (i * 13) % extent);
                hits += usize::from(region.contains_point(p));
            }
            black_box(hits)
        })
    });
    group.bench_function("intersects_rect_checker_n32", |bench| {
        bench.iter(|| {
            let mut hits = 0usize;
            for i in 0..1024i32 {
                let x = (i * 7) % extent;
                let y = (i * 13) % extent;
                let q = Rect::new(x, y, x + 25, y + 25);
                hits += usize::from(region.intersects_rect(q));
            }
            black_box(hits)
        })
    });
    group.bench_function("contains_rect_checker_n32", |bench| {
        bench.iter(|| {
            let mut hits = 0usize;
            for i in 0..1024i32 {
                let x = (i * 7) % extent;
                let y = (i * 13) % extent;
                let q = Rect::new(x, y, x + 10, y + 10);
                hits += usize::from(region.contains_rect(q));
            }
            black_box(hits)
        })
    });
    group.finish();
}

fn bench_scale(c: &mut Criterion) {
    let mut group = c.benchmark_group("scale");
    for &n in &[8i32, 32] {
        let region = Region::from_rects(&gen_checkerboard(n, 10));
        group.throughput(Throughput::Elements(region.rect_count() as u64));
        group.bench_function(format!("scaled_rounded_out_checker_n{}", n), |bench| {
            bench.iter(|| black_box(region.scaled_rounded_out(1.5, 1.5)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_set_ops, bench_queries, bench_scale);
criterion_main!(benches);
