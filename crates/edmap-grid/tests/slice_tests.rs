//! Tests for horizontal slices and vertical cross-sections.

mod common;

use edmap_grid::{altitude_slice, cross_section, SectionAxis};
use test_utils::{index_volume, linear_axis};

/// 4 altitudes (100, 150, 200, 300), 3 latitudes, 5 longitudes, values
/// encoding their own (k, i, j) position.
fn indexed() -> edmap_common::Sounding {
    common::sounding(
        vec![100.0, 150.0, 200.0, 300.0],
        linear_axis(120.0, 1.0, 5),
        linear_axis(30.0, 2.0, 3),
        index_volume(4, 3, 5),
    )
}

#[test]
fn test_altitude_slice_picks_first_on_tie() {
    let slice = altitude_slice(&indexed(), 250.0).unwrap();
    assert_eq!(slice.index, 2);
    assert_eq!(slice.altitude, 200.0);
    assert_eq!(slice.field.width, 5);
    assert_eq!(slice.field.height, 3);
    // row = latitude index, col = longitude index
    assert_eq!(slice.field.get(1, 4), Some(20104.0));
}

#[test]
fn test_fixed_longitude_section_is_scaled() {
    let section = cross_section(&indexed(), SectionAxis::Longitude, 122.2).unwrap();
    assert_eq!(section.index, 2);
    assert_eq!(section.coordinate, 122.0);
    // columns follow latitude, rows follow altitude
    assert_eq!(section.field.width, 3);
    assert_eq!(section.field.height, 4);
    assert_eq!(section.field.x, vec![30.0, 32.0, 34.0]);
    let expected = 30102.0_f32 * 1.0e-6;
    let got = section.field.get(3, 1).unwrap();
    assert!((got - expected).abs() < 1e-9, "got {got}, expected {expected}");
}

#[test]
fn test_fixed_latitude_section_keeps_raw_values() {
    let section = cross_section(&indexed(), SectionAxis::Latitude, 33.5).unwrap();
    assert_eq!(section.index, 2);
    assert_eq!(section.field.width, 5);
    assert_eq!(section.field.height, 4);
    assert_eq!(section.field.x, linear_axis(120.0, 1.0, 5));
    assert_eq!(section.field.y, vec![100.0, 150.0, 200.0, 300.0]);
    assert_eq!(section.field.get(3, 1), Some(30201.0));
    assert_eq!(section.field.get(0, 0), Some(200.0));
}

#[test]
fn test_section_flags() {
    assert_eq!(SectionAxis::from_flag(0), Some(SectionAxis::Longitude));
    assert_eq!(SectionAxis::from_flag(1), Some(SectionAxis::Latitude));
    assert_eq!(SectionAxis::from_flag(2), None);
    assert_eq!(SectionAxis::Latitude.flag(), 1);
}
