// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compares building a region from a full rect list against folding rects
//! in one `united` at a time, the way naive damage accumulation does it.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use strata_region::{Rect, Region};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_i32(&mut self, bound: i32) -> i32 {
        (self.next_u64() % bound as u64) as i32
    }
}

fn gen_random_rects(count: usize, extent: i32, max_side: i32) -> Vec<Rect> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let x0 = rng.next_i32(extent);
        let y0 = rng.next_i32(extent);
        let w = 1 + rng.next_i32(max_side);
        let h = 1 + rng.next_i32(max_side);
        out.push(Rect::from_xywh(x0, y0, w, h));
    }
    out
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &count in &[64usize, 256, 1024] {
        let rects = gen_random_rects(count, 2000, 64);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("from_rects_random_{}", count), |bench| {
            bench.iter(|| black_box(Region::from_rects(&rects)))
        });
        group.bench_function(format!("fold_united_random_{}", count), |bench| {
            bench.iter(|| {
                let mut acc = Region::new();
                for &r in &rects {
                    acc = acc.united(&Region::from_rect(r));
                }
                black_box(acc)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
