//! Benchmarks for slicing, column integration and regular-grid resampling.
//!
//! Run with: cargo bench --package edmap-grid --bench resample_benchmarks

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use edmap_common::{DensityVolume, Field2D, Sounding};
use edmap_grid::{
    altitude_slice, column_content, resample_to_regular, ColumnContentOptions, InterpolationMethod,
};
use test_utils::{chapman_volume, linear_axis};

/// Sounding on a 1 degree grid covering `n_lon` x `n_lat` cells.
fn build_sounding(n_alt: usize, n_lat: usize, n_lon: usize) -> Sounding {
    let altitude = linear_axis(100.0, 20.0, n_alt);
    let latitude = linear_axis(-60.0, 1.0, n_lat);
    let longitude = linear_axis(-180.0, 1.0, n_lon);
    let density = chapman_volume(&altitude, &latitude, &longitude);
    let time = NaiveDate::from_ymd_opt(2021, 3, 4)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("valid time");
    let volume = DensityVolume::new(density, n_alt, n_lat, n_lon).expect("volume shape");
    Sounding::new(time, altitude, longitude, latitude, volume).expect("sounding shape")
}

// =============================================================================
// RESAMPLE BENCHMARKS
// =============================================================================

fn bench_resample_to_regular(c: &mut Criterion) {
    let mut group = c.benchmark_group("resample_to_regular");

    // (n_lat, n_lon, name)
    let scenarios = [(21, 31, "regional"), (121, 361, "global")];

    for (n_lat, n_lon, name) in scenarios {
        let sounding = build_sounding(4, n_lat, n_lon);
        let field = altitude_slice(&sounding, 300.0).expect("slice").field;
        // 0.5 degree output doubles each axis
        group.throughput(Throughput::Elements((4 * n_lat * n_lon) as u64));

        for method in [
            InterpolationMethod::Nearest,
            InterpolationMethod::Bilinear,
            InterpolationMethod::Cubic,
        ] {
            group.bench_with_input(
                BenchmarkId::new(name, format!("{:?}", method).to_lowercase()),
                &field,
                |b, field: &Field2D| {
                    b.iter(|| resample_to_regular(black_box(field), 0.5, method));
                },
            );
        }
    }

    group.finish();
}

// =============================================================================
// COLUMN CONTENT BENCHMARKS
// =============================================================================

fn bench_column_content(c: &mut Criterion) {
    let mut group = c.benchmark_group("column_content");
    let options = ColumnContentOptions::default();

    for n_alt in [10, 40] {
        let sounding = build_sounding(n_alt, 121, 361);
        group.throughput(Throughput::Elements(sounding.density.as_slice().len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n_alt), &sounding, |b, s| {
            b.iter(|| column_content(black_box(s), &options));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_resample_to_regular, bench_column_content);
criterion_main!(benches);
