//! Tests for column-content integration.

mod common;

use edmap_grid::{column_content, ColumnContentOptions};
use test_utils::{assert_approx_eq, index_volume, linear_axis, uniform_volume};

#[test]
fn test_uniform_density_column_content() {
    let n_alt = 7;
    let d = 4.0e5_f32;
    let sounding = common::sounding(
        linear_axis(100.0, 50.0, n_alt),
        linear_axis(0.0, 1.0, 4),
        linear_axis(0.0, 1.0, 3),
        uniform_volume(n_alt, 3, 4, d),
    );

    let tec = column_content(&sounding, &ColumnContentOptions::default()).unwrap();

    let expected = d as f64 * 1e6 * 50e3 * n_alt as f64 / 1e16;
    assert_eq!(tec.width, 4);
    assert_eq!(tec.height, 3);
    for &v in &tec.data {
        assert_approx_eq!(v, expected, expected * 1e-6);
    }
}

#[test]
fn test_column_content_sums_each_cell_independently() {
    let sounding = common::sounding(
        vec![100.0, 200.0],
        vec![0.0, 1.0],
        vec![0.0],
        index_volume(2, 1, 2),
    );

    let tec = column_content(&sounding, &ColumnContentOptions::default()).unwrap();

    // cell j: (0 + j) + (10000 + j)
    let factor = ColumnContentOptions::default().layer_factor();
    assert_approx_eq!(tec.data[0], 10000.0 * factor, 1e-9);
    assert_approx_eq!(tec.data[1], 10002.0 * factor, 1e-9);
}

#[test]
fn test_layer_thickness_scales_linearly() {
    let sounding = common::sounding(vec![100.0], vec![0.0], vec![0.0], vec![1.0e6]);
    let thin = column_content(&sounding, &ColumnContentOptions { layer_thickness_km: 10.0 }).unwrap();
    let thick = column_content(&sounding, &ColumnContentOptions { layer_thickness_km: 50.0 }).unwrap();
    assert_approx_eq!(thin.data[0], 1.0, 1e-6);
    assert_approx_eq!(thick.data[0], 5.0, 1e-6);
}

#[test]
fn test_nan_column_stays_nan() {
    let sounding = common::sounding(
        vec![100.0, 200.0],
        vec![0.0, 1.0],
        vec![0.0],
        vec![1.0, f32::NAN, 1.0, 1.0],
    );
    let tec = column_content(&sounding, &ColumnContentOptions::default()).unwrap();
    assert!(tec.data[0].is_finite());
    assert!(tec.data[1].is_nan());
}
