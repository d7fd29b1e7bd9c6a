// Copyright 2026 the Merrygo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use merrygo_strip::{PageFlags, PageStrip, StripConfig};

fn make_strip(count: usize) -> PageStrip {
    PageStrip::new(StripConfig {
        item_count: count,
        page_height: 200.0,
        page_width: Some(150.0),
        viewport_width: 150.0,
    })
}

fn bench_pages(c: &mut Criterion) {
    let mut group = c.benchmark_group("pages");
    for &n in &[100_usize, 1000, 10_000] {
        let strip = make_strip(n);
        let viewport = Rect::new(0.0, 0.0, 150.0 * 4.0, 200.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("walk_flags_n{}", n), |b| {
            b.iter(|| {
                let visible = strip
                    .pages(viewport, n / 2)
                    .filter(|p| p.flags.contains(PageFlags::VISIBLE))
                    .count();
                black_box(visible);
            })
        });
    }
    group.finish();
}

fn bench_settle_math(c: &mut Criterion) {
    let mut group = c.benchmark_group("settle");
    let strip = make_strip(10_000);
    group.throughput(Throughput::Elements(1024));
    group.bench_function("index_at_offset_sweep", |b| {
        b.iter(|| {
            let mut acc = 0_usize;
            for q in 0..1024 {
                let offset = q as f64 * 37.5 - 300.0;
                acc += strip.index_at_offset(offset);
            }
            black_box(acc);
        })
    });
    group.bench_function("visible_range_sweep", |b| {
        b.iter(|| {
            let mut acc = 0_usize;
            for q in 0..1024 {
                let x0 = q as f64 * 150.0;
                acc += strip.visible_range(x0, x0 + 600.0).len();
            }
            black_box(acc);
        })
    });
    group.finish();
}

criterion_group!(benches, bench_pages, bench_settle_math);
criterion_main!(benches);
