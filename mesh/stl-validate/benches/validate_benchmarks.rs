//! Benchmarks for solid validation.
//!
//! Run with: cargo bench -p stl-validate
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p stl-validate -- --save-baseline main
//! 2. After changes: cargo bench -p stl-validate -- --baseline main

#![allow(missing_docs, clippy::cast_precision_loss)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use stl_types::{Point3, Triangle};
use stl_validate::{EdgeAdjacencyIndex, ValidationOptions, validate_triangles};

// =============================================================================
// Test Mesh Generation
// =============================================================================

/// Closed box made of an `n x n` quad grid on each of its six faces.
fn create_grid_box(n: usize) -> Vec<Triangle> {
    let step = 1.0 / n as f64;
    let mut triangles = Vec::with_capacity(n * n * 12);

    // (origin, u axis, v axis) per face, wound so normals point outward
    let faces: [([f64; 3], [f64; 3], [f64; 3]); 6] = [
        ([0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]),
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]),
        ([0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]),
    ];

    for (origin, u, v) in faces {
        let at = |i: usize, j: usize| {
            let (s, t) = (i as f64 * step, j as f64 * step);
            Point3::new(
                origin[0] + s * u[0] + t * v[0],
                origin[1] + s * u[1] + t * v[1],
                origin[2] + s * u[2] + t * v[2],
            )
        };
        for i in 0..n {
            for j in 0..n {
                let (a, b, c, d) = (at(i, j), at(i + 1, j), at(i + 1, j + 1), at(i, j + 1));
                triangles.push(Triangle::from_vertices(a, b, c));
                triangles.push(Triangle::from_vertices(a, c, d));
            }
        }
    }
    triangles
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_adjacency(c: &mut Criterion) {
    let mut group = c.benchmark_group("adjacency_build");
    for n in [8, 32, 64] {
        let triangles = create_grid_box(n);
        group.throughput(Throughput::Elements(triangles.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &triangles, |b, tris| {
            b.iter(|| EdgeAdjacencyIndex::build(black_box(tris)));
        });
    }
    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let options = ValidationOptions::default();
    let mut group = c.benchmark_group("validate_triangles");
    for n in [8, 32, 64] {
        let triangles = create_grid_box(n);
        group.throughput(Throughput::Elements(triangles.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &triangles, |b, tris| {
            b.iter(|| validate_triangles(black_box(tris), &options));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_adjacency, bench_validate);
criterion_main!(benches);
