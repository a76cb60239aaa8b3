//! Benchmarks for layermix blend modes.
//!
//! Run with: `cargo bench`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

use layermix_core::Rgba;
use layermix_ops::{blend_with_config, BlendConfig, BlendGroup, BlendMode};

const PAIRS: usize = 4096;

/// Seeded color pairs with alpha strictly inside (0, 1) so no fast path fires.
fn color_pairs() -> Vec<(Rgba, Rgba)> {
    let mut rng = StdRng::seed_from_u64(0xb1e0d);
    let color = |rng: &mut StdRng| {
        Rgba::new(rng.r#gen(), rng.r#gen(), rng.r#gen(), rng.gen_range(0.05..0.95))
    };
    (0..PAIRS).map(|_| (color(&mut rng), color(&mut rng))).collect()
}

/// Raw formulas, one benchmark per mode, grouped like the layer panel.
fn bench_formulas(c: &mut Criterion) {
    let pairs = color_pairs();

    for group_kind in BlendGroup::ALL {
        let mut group = c.benchmark_group(format!("formula/{}", group_kind));
        group.throughput(Throughput::Elements(PAIRS as u64));

        for mode in group_kind.modes() {
            let Some(f) = mode.function() else { continue };
            group.bench_with_input(BenchmarkId::from_parameter(mode.name()), &pairs, |b, p| {
                b.iter(|| {
                    p.iter()
                        .map(|&(base, top)| f(black_box(base), black_box(top)))
                        .collect::<Vec<_>>()
                })
            });
        }

        group.finish();
    }
}

/// Full dispatch, including fast path checks and the dissolve draw.
fn bench_dispatch(c: &mut Criterion) {
    let pairs = color_pairs();
    let config = BlendConfig::default();
    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(PAIRS as u64));

    for mode in [
        BlendMode::Normal,
        BlendMode::Dissolve,
        BlendMode::Multiply,
        BlendMode::SoftLight,
        BlendMode::Divide,
        BlendMode::Luminosity,
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(mode.name()), &pairs, |b, p| {
            let mut rng = StdRng::seed_from_u64(1);
            b.iter(|| {
                p.iter()
                    .map(|&(base, top)| {
                        blend_with_config(black_box(base), black_box(top), mode, None, &config, &mut rng)
                    })
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_formulas, bench_dispatch);
criterion_main!(benches);
