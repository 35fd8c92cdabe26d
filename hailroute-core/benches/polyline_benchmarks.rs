//! Criterion benchmarks for the polyline codec.
//!
//! Measures decode and encode throughput for routes of 100, 1 000 and
//! 10 000 coordinates.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package hailroute-core
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use geo::Coord;
use hailroute_core::{RouteGeometry, decode, encode};

/// Route lengths to benchmark.
const ROUTE_LENGTHS: &[usize] = &[100, 1_000, 10_000];

/// Build a deterministic zig-zag route heading north-east from Berlin.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "synthetic benchmark coordinates"
)]
fn build_route(length: usize) -> RouteGeometry {
    (0..length)
        .map(|step| {
            let offset = step as f64 * 1e-4;
            let wobble = if step.is_multiple_of(2) { 3e-5 } else { -3e-5 };
            Coord {
                x: 13.405 + offset + wobble,
                y: 52.52 + offset,
            }
        })
        .collect()
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for &length in ROUTE_LENGTHS {
        let encoded = build_route(length).encode().expect("benchmark route encodes");
        group.throughput(Throughput::Bytes(encoded.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(length), &encoded, |b, input| {
            b.iter(|| decode(input).expect("benchmark polyline decodes"));
        });
    }
    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    for &length in ROUTE_LENGTHS {
        let route = build_route(length);
        group.throughput(Throughput::Elements(length as u64));
        group.bench_with_input(BenchmarkId::from_parameter(length), &route, |b, input| {
            b.iter(|| encode(input.coords().iter().copied()).expect("benchmark route encodes"));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_decode, bench_encode);
criterion_main!(benches);
