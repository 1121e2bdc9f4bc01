use criterion::{criterion_group, criterion_main, Criterion};
use imlog_image::{validate, ImageKind, Severity};
use imlog_tensor::{DType, DynTensor};
use std::hint::black_box;

fn sample_tensor(dtype: DType) -> DynTensor {
    DynTensor::zeros([1080, 1920, 1], dtype).unwrap()
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("Classify");

    group.bench_function("image_u8", |b| {
        b.iter_batched(
            || sample_tensor(DType::U8),
            |tensor| validate(ImageKind::Image, black_box(tensor), None, Severity::Soft),
            criterion::BatchSize::LargeInput,
        )
    });

    group.bench_function("depth_f64_downcast", |b| {
        b.iter_batched(
            || sample_tensor(DType::F64),
            |tensor| {
                validate(
                    ImageKind::Depth,
                    black_box(tensor),
                    Some(1000.0),
                    Severity::Soft,
                )
            },
            criterion::BatchSize::LargeInput,
        )
    });

    group.bench_function("segmentation_u16", |b| {
        b.iter_batched(
            || sample_tensor(DType::U16),
            |tensor| {
                validate(
                    ImageKind::Segmentation,
                    black_box(tensor),
                    None,
                    Severity::Soft,
                )
            },
            criterion::BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
