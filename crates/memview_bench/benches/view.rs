//! Segment view benchmarks.

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use memview_bench::utils::{build_view, flatten, generate_segments};
use memview_core::SegmentView;

/// Benchmark reads that span several segment boundaries.
fn bench_read_across_segments(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_across_segments");

    for segment_size in [16, 256, 4096].iter() {
        let view = build_view(64, *segment_size);
        let len = segment_size * 4;
        // Start mid-segment so every read crosses boundaries.
        let offset = segment_size / 2;

        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(segment_size),
            segment_size,
            |b, _| {
                let mut buf = vec![0u8; len];
                b.iter(|| {
                    view.read(black_box(offset), black_box(buf.as_mut_slice())).unwrap();
                });
            },
        );
    }

    group.finish();
}

/// Benchmark locating an offset deep in the segment table.
fn bench_locate(c: &mut Criterion) {
    let mut group = c.benchmark_group("locate");

    for count in [16, 256, 4096].iter() {
        let view = build_view(*count, 64);
        let offset = view.len() - 1;

        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, _| {
            b.iter(|| black_box(view.locate(black_box(offset))));
        });
    }

    group.finish();
}

/// Benchmark front discards against copying the retained bytes forward.
fn bench_discard_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("discard_front");

    for count in [16, 256, 4096].iter() {
        let segments = generate_segments(*count, 256);
        let discard = (count / 2) * 256 + 100;

        group.bench_with_input(BenchmarkId::new("view", count), count, |b, _| {
            b.iter_batched(
                || SegmentView::new(segments.clone()).unwrap(),
                |mut view| {
                    black_box(view.discard_front(black_box(discard)));
                    view
                },
                BatchSize::SmallInput,
            );
        });

        let flat = flatten(&segments);
        group.bench_with_input(BenchmarkId::new("copy_forward", count), count, |b, _| {
            b.iter_batched(
                || flat.to_vec(),
                |mut data| {
                    data.drain(..black_box(discard));
                    data
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_read_across_segments,
    bench_locate,
    bench_discard_front
);
criterion_main!(benches);
