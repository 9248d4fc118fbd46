use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use hap_codec_core::{
    dxt_bytes_for_dimensions, pixel_format_for_texture_format, texture_format_for_pixel_format,
    CodecVariant, PixelFormatId, TextureFormat,
};
use std::hint::black_box;

// Common frame sizes, including ones that are not multiples of the block size.
const DIMENSIONS: [(u32, u32); 4] = [(1280, 720), (1920, 1080), (1918, 1078), (4096, 2160)];

fn bench_buffer_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("HAP Buffer Size");

    for (width, height) in DIMENSIONS {
        let id = format!("{width}x{height}");

        group.bench_with_input(BenchmarkId::new("typed", &id), &(width, height), |b, &(w, h)| {
            b.iter(|| {
                for &variant in CodecVariant::all_values() {
                    black_box(black_box(variant).compressed_len(black_box(w), black_box(h)));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("fourcc", &id), &(width, height), |b, &(w, h)| {
            b.iter(|| {
                for &variant in CodecVariant::all_values() {
                    black_box(dxt_bytes_for_dimensions(
                        black_box(w),
                        black_box(h),
                        black_box(variant.sub_type()),
                    ));
                }
            })
        });
    }

    group.finish();
}

fn bench_format_mapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("HAP Format Mapping");

    group.bench_function("pixel format -> texture format", |b| {
        b.iter(|| {
            for id in PixelFormatId::KNOWN {
                black_box(texture_format_for_pixel_format(black_box(id)));
            }
        })
    });

    group.bench_function("texture format -> pixel format", |b| {
        b.iter(|| {
            for &format in TextureFormat::all_values() {
                black_box(pixel_format_for_texture_format(black_box(format)));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_buffer_size, bench_format_mapping);
criterion_main!(benches);
