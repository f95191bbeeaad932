//! Benchmarks for ASCII STL parsing.
//!
//! Run with: cargo bench -p stl-io

use std::fmt::Write as _;

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use stl_io::parse_ascii;
use stl_types::Solid;

/// Build a flat grid of `n * n * 2` triangles as ASCII STL.
fn grid_text(n: usize) -> String {
    let mut text = String::from("solid grid\n");
    for i in 0..n {
        for j in 0..n {
            #[allow(clippy::cast_precision_loss)]
            let (x, y) = (i as f64, j as f64);
            for tri in [
                [[x, y], [x + 1.0, y], [x + 1.0, y + 1.0]],
                [[x, y], [x + 1.0, y + 1.0], [x, y + 1.0]],
            ] {
                text.push_str("  facet normal 0 0 1\n    outer loop\n");
                for [vx, vy] in tri {
                    let _ = writeln!(text, "      vertex {vx:e} {vy:e} 0e0");
                }
                text.push_str("    endloop\n  endfacet\n");
            }
        }
    }
    text.push_str("endsolid grid\n");
    text
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_ascii");

    for n in [10, 50, 100] {
        let text = grid_text(n);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(format!("grid_{n}x{n}"), |b| {
            b.iter(|| {
                let mut solid = Solid::new();
                let report = parse_ascii(black_box(text.as_bytes()), &mut solid);
                black_box((solid, report))
            });
        });
    }

    group.finish();
}

fn bench_recovery(c: &mut Criterion) {
    // Every facet is broken, so the parser spends its time resynchronizing
    let text = grid_text(50).replace("outer loop", "outer");
    c.bench_function("parse_ascii_all_broken", |b| {
        b.iter(|| {
            let mut solid = Solid::new();
            black_box(parse_ascii(black_box(text.as_bytes()), &mut solid))
        });
    });
}

criterion_group!(benches, bench_parse, bench_recovery);
criterion_main!(benches);
