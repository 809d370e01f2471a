// Copyright 2026 the Runtime Support Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use runtime_bigint::{assign_i64, from_i64, from_u64, to_u64};
use runtime_value::{ConBuilder, ConHeap, ConTag, ValueRef};

/// Entry point for runtime-core wind-tunnel benchmarks.
///
/// Scenarios cover the two hot paths generated code leans on: materializing
/// and extracting 64-bit literals through the bridge, and populating
/// constructor nodes of varying arity.
fn bench_core(c: &mut Criterion) {
    bench_bridge_roundtrip(c);
    bench_bridge_assign(c);
    bench_con_population(c);
}

fn bench_bridge_roundtrip(c: &mut Criterion) {
    let mut g = c.benchmark_group("bridge_roundtrip");
    for v in [1i64, -1, i64::MIN, 0x0123_4567_89AB_CDEF] {
        g.bench_with_input(BenchmarkId::new("i64", v), &v, |b, &v| {
            b.iter(|| to_u64(&from_i64(black_box(v))));
        });
    }
    g.bench_function("u64_max", |b| {
        b.iter(|| to_u64(&from_u64(black_box(u64::MAX))));
    });
    g.finish();
}

fn bench_bridge_assign(c: &mut Criterion) {
    c.bench_function("bridge_assign_in_place", |b| {
        let mut scratch = from_i64(0);
        let mut v = 0i64;
        b.iter(|| {
            v = v.wrapping_add(0x9E37_79B9_7F4A_7C15u64 as i64);
            assign_i64(&mut scratch, black_box(v));
        });
    });
}

fn bench_con_population(c: &mut Criterion) {
    let mut g = c.benchmark_group("con_population");
    for arity in [0usize, 1, 4, 16] {
        g.bench_with_input(BenchmarkId::from_parameter(arity), &arity, |b, &arity| {
            b.iter(|| {
                let mut heap = ConHeap::new();
                let mut builder = ConBuilder::new(ConTag::new(0), arity);
                for i in 0..arity {
                    builder.set_field(i, ValueRef::Word(i as u64)).unwrap();
                }
                black_box(heap.finish(builder).unwrap())
            });
        });
    }
    g.finish();
}

criterion_group!(benches, bench_core);
criterion_main!(benches);
