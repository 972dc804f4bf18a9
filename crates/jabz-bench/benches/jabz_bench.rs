//! Benchmarks for jabz conversions.
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use jabz_color::prelude::*;
use jabz_color::repair::to_srgb_approx;
use jabz_io::{Header, map_stream, write_pixels};
use jabz_transfer::{pq, srgb};

fn srgb_samples(n: usize) -> Vec<Srgb> {
    (0..n)
        .map(|i| {
            let t = i as f64 / n as f64;
            Srgb::new(t, (t * 7.0).fract(), (t * 13.0).fract())
        })
        .collect()
}

/// Benchmark transfer curves.
fn bench_transfer(c: &mut Criterion) {
    let mut group = c.benchmark_group("transfer");

    for size in [1000, 10000, 100000].iter() {
        let values: Vec<f64> = (0..*size).map(|i| i as f64 / *size as f64).collect();

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("srgb_eotf", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| srgb::eotf(black_box(x))).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("pq_oetf", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| pq::oetf(black_box(x * pq::L_MAX))).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("pq_eotf", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| pq::eotf(black_box(x))).collect::<Vec<_>>())
        });
    }

    group.finish();
}

/// Benchmark typed conversions from sRGB.
fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    let colors = srgb_samples(10000);
    group.throughput(Throughput::Elements(colors.len() as u64));

    group.bench_function("srgb_to_jzazbz", |b| {
        b.iter(|| colors.iter().map(|&c| black_box(c).convert::<JzAzBz>()).collect::<Vec<_>>())
    });

    group.bench_function("srgb_to_jchz", |b| {
        b.iter(|| colors.iter().map(|&c| black_box(c).convert::<Jchz>()).collect::<Vec<_>>())
    });

    let jch: Vec<Jchz> = colors.iter().map(|c| c.convert()).collect();
    group.bench_function("jchz_to_srgb", |b| {
        b.iter(|| jch.iter().map(|&c| black_box(c).convert::<Srgb>()).collect::<Vec<_>>())
    });

    group.finish();
}

/// Benchmark runtime dispatch between every pair of spaces.
fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");

    let px = Rgba::new(0.3, 0.6, 0.9, 1.0);
    for to in ColorSpace::ALL {
        group.bench_with_input(BenchmarkId::new("from_srgb", to), &to, |b, &to| {
            b.iter(|| convert_pixel(ColorSpace::Srgb, to, black_box(px)))
        });
    }

    group.finish();
}

/// Benchmark chroma repair of undisplayable colors.
fn bench_repair(c: &mut Criterion) {
    let mut group = c.benchmark_group("repair");

    let in_gamut: Jchz = Srgb::new(0.9, 0.5, 0.1).convert();
    let saturated = Jchz::new(0.5, 0.9, 0.6);

    group.bench_function("in_gamut", |b| b.iter(|| to_srgb_approx(black_box(in_gamut))));
    group.bench_function("saturated", |b| b.iter(|| to_srgb_approx(black_box(saturated))));

    group.finish();
}

/// Benchmark farbfeld stream mapping in memory.
fn bench_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream");

    for size in [64u32, 256].iter() {
        let header = Header::new(*size, *size);
        let pixels: Vec<Rgba> = srgb_samples((size * size) as usize)
            .into_iter()
            .map(|c| Rgba::from_rgb(c.to_array(), 1.0))
            .collect();
        let mut input = Vec::new();
        write_pixels(&mut input, header, &pixels, GamutPolicy::Clip).unwrap();

        group.throughput(Throughput::Elements(header.pixel_count()));

        group.bench_with_input(BenchmarkId::new("srgb_to_jabz", size), &input, |b, data| {
            b.iter(|| {
                let mut out = Vec::with_capacity(data.len());
                map_stream(data.as_slice(), &mut out, GamutPolicy::Mask, |px| {
                    convert_pixel(ColorSpace::Srgb, ColorSpace::Jabz, px)
                })
                .unwrap();
                out
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_transfer,
    bench_convert,
    bench_dispatch,
    bench_repair,
    bench_stream,
);

criterion_main!(benches);
