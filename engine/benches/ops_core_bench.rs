// engine/benches/ops_core_bench.rs
#![deny(unsafe_code)]

/**
 * Operator micro-benchmarks.
 *
 * Focus:
 * - Region finding (`bounding_squares`) on multi-layer stacks
 * - Displacement and tiling, the per-cell heavy operators
 * - Upscaling with centroid recentring
 * - Hole filling (border flood)
 */
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use grid_dsl_engine::ops::{self, Grid, Selection};
use grid_dsl_engine::sampling::{BoardSpec, SelectionKind, random_grid, random_selection};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn build_case(seed: u64, kind: SelectionKind) -> (Grid, Selection) {
    let mut rng = StdRng::seed_from_u64(seed);
    let grid = random_grid(&mut rng, &BoardSpec::new(30, 30));
    let sel = random_selection(&mut rng, grid.view(), kind, 8);
    (grid, sel)
}

fn bench_regions(c: &mut Criterion) {
    c.bench_function("ops.bounding_squares.rect_x8", |b| {
        b.iter_batched(
            || build_case(20260301, SelectionKind::Rectangle),
            |(_, sel)| {
                black_box(ops::bounding_squares(sel.view()));
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_displacement(c: &mut Criterion) {
    c.bench_function("ops.cut_sum.scatter", |b| {
        b.iter_batched(
            || build_case(777, SelectionKind::Scatter),
            |(grid, sel)| {
                black_box(ops::cut_sum(grid.view(), sel.view(), 3, -2));
            },
            BatchSize::SmallInput,
        );
    });

    c.bench_function("ops.copy_paste_horizontally.rect_x8", |b| {
        b.iter_batched(
            || build_case(778, SelectionKind::Rectangle),
            |(grid, sel)| {
                black_box(ops::copy_paste_horizontally(grid.view(), sel.view()));
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_scale_and_fill(c: &mut Criterion) {
    c.bench_function("ops.vupscale.k3.shapes", |b| {
        b.iter_batched(
            || build_case(1234, SelectionKind::ColorShapes),
            |(grid, sel)| {
                black_box(ops::vupscale(grid.view(), sel.view(), 3));
            },
            BatchSize::SmallInput,
        );
    });

    c.bench_function("ops.fill_with_color.shapes", |b| {
        b.iter_batched(
            || build_case(5678, SelectionKind::ColorShapes),
            |(grid, sel)| {
                black_box(ops::fill_with_color(grid.view(), sel.view(), 4));
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    ops_core_benches,
    bench_regions,
    bench_displacement,
    bench_scale_and_fill
);
criterion_main!(ops_core_benches);
