//! Criterion micro-benchmarks for field allocation, dispatch, and chunked export.

use std::path::Path;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fuka_bench::{cube_coords, SyntheticExporter};
use fuka_core::{
    interpolate, interpolate_chunked, BinaryType, ChunkConfig, Fields, InterpolateRequest,
    InterpolationParams,
};

const SIDES: [usize; 3] = [8, 16, 32];

fn bench_allocate(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocate");
    for side in SIDES {
        let n = side * side * side;
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(Fields::allocate(black_box(n)).unwrap()));
        });
    }
    group.finish();
}

fn bench_interpolate(c: &mut Criterion) {
    let mut group = c.benchmark_group("interpolate");
    for side in SIDES {
        let coords = cube_coords(side, 30.0);
        let n = coords.x.len();
        group.throughput(Throughput::Elements(n as u64));
        for binary_type in [BinaryType::Bbh, BinaryType::Bhns] {
            let request = InterpolateRequest {
                binary_type,
                info_filename: Path::new("bench.info"),
                grid: coords.grid(),
                params: InterpolationParams::default(),
            };
            group.bench_with_input(
                BenchmarkId::new(binary_type.to_string(), n),
                &request,
                |b, request| b.iter(|| black_box(interpolate(&SyntheticExporter, request).unwrap())),
            );
        }
    }
    group.finish();
}

fn bench_chunked(c: &mut Criterion) {
    let coords = cube_coords(32, 30.0);
    let request = InterpolateRequest {
        binary_type: BinaryType::Bns,
        info_filename: Path::new("bench.info"),
        grid: coords.grid(),
        params: InterpolationParams::default(),
    };
    let mut group = c.benchmark_group("interpolate_chunked");
    group.throughput(Throughput::Elements(coords.x.len() as u64));
    for n_chunks in [1, 4, 16] {
        let chunking = ChunkConfig { n_chunks };
        group.bench_with_input(BenchmarkId::from_parameter(n_chunks), &chunking, |b, chunking| {
            b.iter(|| black_box(interpolate_chunked(&SyntheticExporter, &request, chunking).unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_allocate, bench_interpolate, bench_chunked);
criterion_main!(benches);
