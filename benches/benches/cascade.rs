// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `skin_cascade` document resolution.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use skin_cascade::{
    Direction, EmbeddedInclude, IconUnit, IncludeProperty, SheetFragment, SheetVariants,
    StyleContext, StyleKey, StyleSheetDocument, StyleUnitBuilder,
};

/// A skin with `n` component selectors, each pulling in a shared font and color
/// alias, plus an RTL overlay fragment and one icon per component.
fn skin(n: usize) -> StyleSheetDocument {
    let mut base = SheetFragment::builder()
        .style(
            StyleUnitBuilder::named("DefaultFont")
                .property("font-family", "Tahoma, Verdana, sans-serif")
                .property("font-size", "10pt")
                .build(),
        )
        .style(
            StyleUnitBuilder::selector(".AFDarkColor:alias")
                .property("color", "#333333")
                .build(),
        );
    let mut rtl = SheetFragment::builder().variants(SheetVariants::new().direction(Direction::Rtl));

    for i in 0..n {
        let selector = format!(".Component{i}");
        base = base
            .style(
                StyleUnitBuilder::selector(selector.as_str())
                    .include_style(StyleKey::name("DefaultFont"))
                    .include_property(IncludeProperty::renamed(
                        StyleKey::selector(".AFDarkColor:alias"),
                        "color",
                        "background-color",
                    ))
                    .embedded(
                        EmbeddedInclude::new("border")
                            .literal("1px solid")
                            .include(IncludeProperty::new(
                                StyleKey::selector(".AFDarkColor:alias"),
                                "color",
                            )),
                    )
                    .property("font-size", "+1pt")
                    .property("color", "#f0f0f0")
                    .property("color", "-#101010")
                    .build(),
            )
            .icon(IconUnit::new(
                format!("af|component{i}::icon"),
                StyleUnitBuilder::selector(format!("af|component{i}::icon"))
                    .property("content", "url(/images/icon.png)")
                    .property("width", "16px")
                    .property("height", "16px")
                    .build(),
            ));
        rtl = rtl.style(
            StyleUnitBuilder::selector(selector.as_str())
                .inhibit("padding-left")
                .property("padding-right", "4px")
                .build(),
        );
    }

    StyleSheetDocument::builder()
        .sheet(base.build())
        .sheet(rtl.build())
        .build()
}

fn bench_resolve(c: &mut Criterion) {
    let ltr = StyleContext::new();
    let rtl = StyleContext::new().with_direction(Direction::Rtl);

    let mut group = c.benchmark_group("cascade/resolve");
    for &n in &[16_usize, 256] {
        let doc = skin(n);
        let last = format!(".Component{}", n - 1);

        group.bench_function(BenchmarkId::new("by_selector/ltr", n), |b| {
            b.iter(|| black_box(doc.resolve_by_selector(&ltr, &last)));
        });
        group.bench_function(BenchmarkId::new("by_selector/rtl", n), |b| {
            b.iter(|| black_box(doc.resolve_by_selector(&rtl, &last)));
        });
        group.bench_function(BenchmarkId::new("styles", n), |b| {
            b.iter(|| black_box(doc.resolve_styles(&rtl)));
        });
        group.bench_function(BenchmarkId::new("icons", n), |b| {
            b.iter(|| black_box(doc.resolve_icons(&ltr)));
        });
        group.bench_function(BenchmarkId::new("document_id", n), |b| {
            b.iter(|| black_box(doc.document_id(&rtl)));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("cascade/session");
    let doc = skin(256);
    group.bench_function("cached_lookup", |b| {
        let mut session = doc.session(&ltr);
        let _ = session.style_by_selector(".Component0");
        b.iter(|| black_box(session.style_by_selector(".Component0")));
    });
    group.finish();
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
