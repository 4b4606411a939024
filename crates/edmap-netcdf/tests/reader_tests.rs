//! Tests for loading sounding files written by the NetCDF fixture.

use edmap_netcdf::{open_sounding, NetCdfError};
use test_utils::{
    fixtures, index_volume, linear_axis, require_test_file, temp_test_dir, Packing, SoundingFixture,
};

#[test]
fn test_open_small_fixture() {
    let dir = temp_test_dir();
    let fixture = SoundingFixture::small();
    let path = fixture.write_netcdf(dir.path(), "small.nc").unwrap();

    let sounding = open_sounding(&path).unwrap();

    assert_eq!(sounding.density.shape(), (9, 11, 13));
    assert_eq!(sounding.altitude, fixture.altitude);
    assert_eq!(sounding.longitude, fixture.longitude);
    assert_eq!(sounding.latitude, fixture.latitude);
    assert_eq!(sounding.density.as_slice(), fixture.density.as_slice());
    assert_eq!(sounding.time_label(), fixtures::time::LABEL);
}

#[test]
fn test_density_layout_is_alt_lat_lon() {
    let dir = temp_test_dir();
    let fixture = SoundingFixture::new(
        linear_axis(100.0, 100.0, 2),
        linear_axis(0.0, 1.0, 4),
        linear_axis(10.0, 1.0, 3),
        index_volume(2, 3, 4),
    );
    let path = fixture.write_netcdf(dir.path(), "index.nc").unwrap();

    let sounding = open_sounding(&path).unwrap();
    assert_eq!(sounding.density.get(1, 2, 3), 10203.0);
    assert_eq!(sounding.density.get(0, 1, 0), 100.0);
}

#[test]
fn test_fill_values_become_nan() {
    let dir = temp_test_dir();
    let mut fixture = SoundingFixture::new(
        vec![100.0],
        vec![0.0, 1.0],
        vec![0.0, 1.0],
        vec![1.0, -9999.0, 3.0, 4.0],
    );
    fixture.fill_value = Some(-9999.0);
    let path = fixture.write_netcdf(dir.path(), "fill.nc").unwrap();

    let sounding = open_sounding(&path).unwrap();
    assert!(sounding.density.get(0, 0, 1).is_nan());
    assert_eq!(sounding.density.get(0, 1, 1), 4.0);
}

#[test]
fn test_missing_values_become_nan() {
    let dir = temp_test_dir();
    let mut fixture = SoundingFixture::new(
        vec![100.0],
        vec![0.0, 1.0],
        vec![0.0, 1.0],
        vec![1.0, -1.0e30, 3.0, -9999.0],
    );
    fixture.fill_value = Some(-9999.0);
    fixture.missing_value = Some(-1.0e30);
    let path = fixture.write_netcdf(dir.path(), "missing.nc").unwrap();

    let sounding = open_sounding(&path).unwrap();
    assert_eq!(sounding.density.get(0, 0, 0), 1.0);
    assert!(sounding.density.get(0, 0, 1).is_nan());
    assert_eq!(sounding.density.get(0, 1, 0), 3.0);
    assert!(sounding.density.get(0, 1, 1).is_nan());
}

#[test]
fn test_packed_density_is_unpacked() {
    let dir = temp_test_dir();
    // stored as i16: 0, 15000, fill, 30000, missing, 20000
    let mut fixture = SoundingFixture::new(
        vec![300.0],
        vec![100.0, 101.0, 102.0],
        vec![20.0, 21.0],
        vec![1.0e5, 2.5e5, -32767.0, 4.0e5, -1.0, 3.0e5],
    );
    fixture.fill_value = Some(-32767.0);
    fixture.missing_value = Some(-1.0);
    fixture.packing = Some(Packing {
        scale_factor: 10.0,
        add_offset: 1.0e5,
    });
    let path = fixture.write_netcdf(dir.path(), "packed.nc").unwrap();

    let sounding = open_sounding(&path).unwrap();
    let density = &sounding.density;
    assert_eq!(density.get(0, 0, 0), 1.0e5);
    assert_eq!(density.get(0, 0, 1), 2.5e5);
    assert!(density.get(0, 0, 2).is_nan());
    assert_eq!(density.get(0, 1, 0), 4.0e5);
    assert!(density.get(0, 1, 1).is_nan());
    assert_eq!(density.get(0, 1, 2), 3.0e5);
}

#[test]
fn test_missing_file_reports_open_failure() {
    let dir = temp_test_dir();
    let err = open_sounding(dir.path().join("absent.nc")).unwrap_err();
    assert!(matches!(err, NetCdfError::OpenFailed { .. }));
}

#[test]
fn test_non_netcdf_file_reports_open_failure() {
    let dir = temp_test_dir();
    let path = dir.path().join("garbage.nc");
    std::fs::write(&path, b"this is not a netcdf file").unwrap();

    let err = open_sounding(&path).unwrap_err();
    assert!(err.is_open_failure(), "unexpected error: {err}");
}

#[test]
fn test_missing_density_variable() {
    let dir = temp_test_dir();
    let path = SoundingFixture::small()
        .without("ELEC_dens")
        .write_netcdf(dir.path(), "nodens.nc")
        .unwrap();

    let err = open_sounding(&path).unwrap_err();
    assert!(matches!(err, NetCdfError::MissingData(ref m) if m.contains("ELEC_dens")));
}

#[test]
fn test_missing_time_attribute() {
    let dir = temp_test_dir();
    let path = SoundingFixture::small()
        .without("hour")
        .write_netcdf(dir.path(), "nohour.nc")
        .unwrap();

    let err = open_sounding(&path).unwrap_err();
    assert!(matches!(err, NetCdfError::MissingData(ref m) if m.contains("hour")));
}

#[test]
fn test_real_sounding_file() {
    let path = require_test_file!("edmap_sample.nc");
    let sounding = open_sounding(&path).unwrap();
    let (n_alt, n_lat, n_lon) = sounding.density.shape();
    assert_eq!(sounding.altitude.len(), n_alt);
    assert_eq!(sounding.latitude.len(), n_lat);
    assert_eq!(sounding.longitude.len(), n_lon);
}
