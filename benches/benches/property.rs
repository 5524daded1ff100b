// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `skin_property` value parsing.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use skin_property::{AbsoluteFontSize, RelativeColor, RelativeFontSize, Rgb, url_value};

fn bench_values(c: &mut Criterion) {
    let mut group = c.benchmark_group("property/parse");

    group.bench_function("rgb/hex", |b| {
        b.iter(|| black_box(Rgb::parse(black_box("#a0b0c0"))));
    });
    group.bench_function("rgb/named", |b| {
        b.iter(|| black_box(Rgb::parse(black_box("cornflowerblue"))));
    });
    group.bench_function("relative_color", |b| {
        b.iter(|| black_box(RelativeColor::parse(black_box("+#101010"))));
    });
    group.bench_function("relative_font_size", |b| {
        b.iter(|| black_box(RelativeFontSize::parse(black_box("-2pt"))));
    });
    group.bench_function("absolute_font_size", |b| {
        b.iter(|| black_box(AbsoluteFontSize::parse(black_box("12px"))));
    });
    group.bench_function("url_value", |b| {
        b.iter(|| black_box(url_value(black_box("url(/images/icon.png)"))));
    });

    group.finish();
}

criterion_group!(benches, bench_values);
criterion_main!(benches);
