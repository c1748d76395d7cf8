// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use core::time::Duration;
use criterion::measurement::WallTime;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkGroup, Criterion};
use rand_pcg::Pcg32;
use rand_tiny::{Rng, RngCore, SeedableRng, XorShiftRng};

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = random_bytes, random_u32, random_u64, init_gen
);
criterion_main!(benches);

pub fn random_bytes(c: &mut Criterion) {
    let mut g = c.benchmark_group("random_bytes");
    g.warm_up_time(Duration::from_millis(500));
    g.measurement_time(Duration::from_millis(1000));
    g.throughput(criterion::Throughput::Bytes(1024));

    g.bench_function("xorshift_bulk", |b| {
        let mut rng = XorShiftRng::from_clock();
        let mut buf = [0u8; 1024];
        b.iter(|| {
            rng.fill_bytes(&mut buf);
            black_box(buf);
        });
    });

    g.bench_function("xorshift_per_word", |b| {
        let mut rng = XorShiftRng::from_clock();
        let mut buf = [0u8; 1024];
        b.iter(|| {
            rng.fill_bytes_per_word(&mut buf);
            black_box(buf);
        });
    });

    g.bench_function("pcg32", |b| {
        let mut rng = Pcg32::seed_from_u64(0);
        let mut buf = [0u8; 1024];
        b.iter(|| {
            rng.fill_bytes(&mut buf);
            black_box(buf);
        });
    });

    g.finish()
}

pub fn random_u32(c: &mut Criterion) {
    let mut g = c.benchmark_group("random_u32");
    g.sample_size(1000);
    g.warm_up_time(Duration::from_millis(500));
    g.measurement_time(Duration::from_millis(1000));
    g.throughput(criterion::Throughput::Bytes(4));

    fn bench(g: &mut BenchmarkGroup<WallTime>, name: &str, mut rng: impl RngCore) {
        g.bench_function(name, |b| {
            b.iter(|| rng.next_u32());
        });
    }

    bench(&mut g, "xorshift", XorShiftRng::from_clock());
    bench(&mut g, "pcg32", Pcg32::seed_from_u64(0));

    g.finish()
}

pub fn random_u64(c: &mut Criterion) {
    let mut g = c.benchmark_group("random_u64");
    g.sample_size(1000);
    g.warm_up_time(Duration::from_millis(500));
    g.measurement_time(Duration::from_millis(1000));
    g.throughput(criterion::Throughput::Bytes(8));

    fn bench(g: &mut BenchmarkGroup<WallTime>, name: &str, mut rng: impl RngCore) {
        g.bench_function(name, |b| {
            b.iter(|| rng.next_long());
        });
    }

    bench(&mut g, "xorshift", XorShiftRng::from_clock());
    bench(&mut g, "pcg32", Pcg32::seed_from_u64(0));

    g.finish()
}

pub fn init_gen(c: &mut Criterion) {
    let mut g = c.benchmark_group("init_gen");
    g.warm_up_time(Duration::from_millis(500));
    g.measurement_time(Duration::from_millis(1000));

    g.bench_function("new", |b| {
        let mut seed = 0u32;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            XorShiftRng::new(black_box(seed))
        });
    });
    g.bench_function("from_clock", |b| b.iter(XorShiftRng::from_clock));

    g.finish()
}
