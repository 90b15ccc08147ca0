use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use common::Field;
use segmentation::{
    detect_edges, label_regions, link_edges, reconcile, segment_regions, suppress, CannyConfig,
    NeighborMode, RegionConfig, ScanBias, Thresholds,
};

const SIZES: [usize; 2] = [256, 1024];

/// Smooth blobs plus noise, so suppression and linking see real ridges.
fn gradient(size: usize, seed: u64) -> (Field<f32>, Field<f32>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let magnitude = Field::from_fn(size, size, |row, col| {
        let wave = ((row as f32 * 0.05).sin() * (col as f32 * 0.07).cos()).abs() * 50.0;
        wave + rng.random_range(0.0..5.0)
    });
    let direction = Field::from_fn(size, size, |row, col| {
        (row as f32 * 0.05).atan2(col as f32 * 0.07 + 1.0).to_degrees() + 180.0
    });
    (magnitude, direction)
}

fn categories(size: usize, seed: u64) -> Field<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    Field::from_fn(size, size, |row, col| {
        let base = ((row / 16 + col / 16) % 4) as u8;
        if rng.random_range(0..20) == 0 {
            base + 1
        } else {
            base
        }
    })
}

fn bench_suppress(c: &mut Criterion) {
    let mut group = c.benchmark_group("suppress");
    for size in SIZES {
        let (magnitude, direction) = gradient(size, 1);
        for mode in [NeighborMode::Four, NeighborMode::Eight] {
            group.bench_with_input(
                BenchmarkId::new(format!("{mode:?}"), size),
                &size,
                |b, _| {
                    b.iter(|| {
                        black_box(
                            suppress(&magnitude, &direction, Thresholds::new(10.0, 30.0), mode)
                                .unwrap(),
                        )
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_link(c: &mut Criterion) {
    let mut group = c.benchmark_group("link_edges");
    for size in SIZES {
        let (magnitude, direction) = gradient(size, 2);
        let suppression = suppress(
            &magnitude,
            &direction,
            Thresholds::new(10.0, 30.0),
            NeighborMode::Eight,
        )
        .unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let mut field = suppression.classification.clone();
                let stats =
                    link_edges(&mut field, suppression.strong.clone(), &suppression.weak).unwrap();
                black_box((field, stats))
            })
        });
    }
    group.finish();
}

fn bench_detect_edges(c: &mut Criterion) {
    let (magnitude, direction) = gradient(1024, 3);
    let config = CannyConfig::default();
    c.bench_function("detect_edges_1024", |b| {
        b.iter(|| black_box(detect_edges(&magnitude, &direction, &config).unwrap()))
    });
}

fn bench_labeling(c: &mut Criterion) {
    let mut group = c.benchmark_group("labeling");
    for size in SIZES {
        let field = categories(size, 4);
        group.bench_with_input(BenchmarkId::new("label_regions", size), &size, |b, _| {
            b.iter(|| black_box(label_regions(&field, ScanBias::North)))
        });

        let raster = label_regions(&field, ScanBias::North);
        group.bench_with_input(BenchmarkId::new("reconcile", size), &size, |b, _| {
            b.iter(|| black_box(reconcile(&raster.equivalences, raster.label_count).unwrap()))
        });

        let config = RegionConfig::default();
        group.bench_with_input(BenchmarkId::new("segment_regions", size), &size, |b, _| {
            b.iter(|| black_box(segment_regions(&field, &config).unwrap()))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_suppress,
    bench_link,
    bench_detect_edges,
    bench_labeling
);
criterion_main!(benches);
