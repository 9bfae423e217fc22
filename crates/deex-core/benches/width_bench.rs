// ─────────────────────────────────────────────────────────────────────
// SCPN De-excitation — Channel Width Benchmark
// © 1998–2026 Miroslav Šotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

use criterion::{criterion_group, criterion_main, Criterion};
use deex_core::engine::DeexcitationEngine;
use deex_types::config::{ChannelSet, DeexcitationConfig};
use std::hint::black_box;

fn bench_single_width(c: &mut Criterion) {
    let engine = DeexcitationEngine::new(DeexcitationConfig::default()).expect("default config");
    let fragment = engine.fragment(120, 50, 60.0).expect("Sn-120");
    let mut group = c.benchmark_group("channel_width");
    for name in ["n", "p", "alpha", "C12"] {
        let id = engine.channel_id(name).expect("registered channel");
        group.bench_function(name, |b| {
            b.iter(|| black_box(engine.channel_width(id, black_box(&fragment)).expect("width")))
        });
    }
    group.finish();
}

fn bench_width_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("width_table");

    let gem = DeexcitationEngine::new(DeexcitationConfig::default()).expect("default config");
    let fragment = gem.fragment(197, 79, 150.0).expect("Au-197");
    group.bench_function("gem_67_channels", |b| {
        b.iter(|| black_box(gem.widths(black_box(&fragment)).expect("widths").total()))
    });

    let mut cfg = DeexcitationConfig::default();
    cfg.channel_set = ChannelSet::Evaporation;
    let evap = DeexcitationEngine::new(cfg).expect("evaporation config");
    group.bench_function("evaporation_7_channels", |b| {
        b.iter(|| black_box(evap.widths(black_box(&fragment)).expect("widths").total()))
    });

    group.finish();
}

criterion_group!(benches, bench_single_width, bench_width_table);
criterion_main!(benches);
