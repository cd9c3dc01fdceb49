//! Benchmarks for zup-rs builders.
//!
//! Run with: `cargo bench`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use zup_math::{
    look_at, look_to, orthographic, orthographic_off_center, perspective, perspective_fov,
    perspective_off_center, quat_rotation_roll_pitch_yaw_from_vector,
    rotation_roll_pitch_yaw_from_vector, Mat4, Vec3, Vec4,
};

/// Benchmark view matrix construction.
fn bench_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("view");

    let eye = Vec3::new(-10.0, 3.0, 2.0);
    let focus = Vec3::new(1.0, -2.0, 0.5);

    group.bench_function("look_at", |b| {
        b.iter(|| look_at(black_box(eye), black_box(focus), black_box(Vec3::UP)))
    });

    group.bench_function("look_to", |b| {
        b.iter(|| look_to(black_box(eye), black_box(focus - eye), black_box(Vec3::UP)))
    });

    // Same transform through glam, for scale
    group.bench_function("glam_look_to_lh", |b| {
        let (e, d) = (eye.to_glam(), (focus - eye).normalize().to_glam());
        b.iter(|| glam::Mat4::look_to_lh(black_box(e), black_box(d), black_box(glam::Vec3::Z)))
    });

    group.finish();
}

/// Benchmark projection matrix construction.
fn bench_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection");

    group.bench_function("perspective", |b| {
        b.iter(|| perspective(black_box(1.6), black_box(0.9), black_box(0.1), black_box(1000.0)))
    });

    group.bench_function("perspective_fov", |b| {
        b.iter(|| {
            perspective_fov(black_box(1.0), black_box(16.0 / 9.0), black_box(0.1), black_box(1000.0))
        })
    });

    group.bench_function("perspective_off_center", |b| {
        b.iter(|| {
            perspective_off_center(
                black_box(-0.5),
                black_box(1.1),
                black_box(-0.4),
                black_box(0.5),
                black_box(0.1),
                black_box(1000.0),
            )
        })
    });

    group.bench_function("orthographic", |b| {
        b.iter(|| orthographic(black_box(20.0), black_box(10.0), black_box(0.0), black_box(100.0)))
    });

    group.bench_function("orthographic_off_center", |b| {
        b.iter(|| {
            orthographic_off_center(
                black_box(-8.0),
                black_box(12.0),
                black_box(-5.0),
                black_box(5.0),
                black_box(0.0),
                black_box(100.0),
            )
        })
    });

    group.finish();
}

/// Benchmark Euler rotations over batches of angles.
fn bench_rotation(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotation");

    for size in [100, 10000].iter() {
        let angles: Vec<Vec4> = (0..*size)
            .map(|i| {
                let t = i as f32 / *size as f32;
                Vec4::new(t * 6.0 - 3.0, t * 3.0 - 1.5, t * 12.0 - 6.0, 0.0)
            })
            .collect();

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("quaternion", size), &angles, |b, a| {
            b.iter(|| {
                a.iter()
                    .map(|&v| quat_rotation_roll_pitch_yaw_from_vector(black_box(v)))
                    .collect::<Vec<_>>()
            })
        });

        group.bench_with_input(BenchmarkId::new("matrix", size), &angles, |b, a| {
            b.iter(|| {
                a.iter()
                    .map(|&v| rotation_roll_pitch_yaw_from_vector(black_box(v)))
                    .collect::<Vec<_>>()
            })
        });

        // Composing single-axis matrices, the slow way
        group.bench_with_input(BenchmarkId::new("axis_product", size), &angles, |b, a| {
            b.iter(|| {
                a.iter()
                    .map(|&v| {
                        let v = black_box(v);
                        Mat4::rotation_x(v.x()) * Mat4::rotation_y(v.y()) * Mat4::rotation_z(v.z())
                    })
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_view, bench_projection, bench_rotation);
criterion_main!(benches);
