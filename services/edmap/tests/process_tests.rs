//! End-to-end runs of `process` against NetCDF fixtures.

use std::path::Path;

use clap::Parser;
use edmap::{process, Args};
use test_utils::{temp_test_dir, SoundingFixture};

fn args(input: &Path, output: &Path, extra: &[&str]) -> Args {
    let mut argv = vec![
        "edmap".to_string(),
        "-i".to_string(),
        input.display().to_string(),
        "-o".to_string(),
        output.display().to_string(),
        "--width".to_string(),
        "480".to_string(),
        "--height".to_string(),
        "360".to_string(),
    ];
    argv.extend(extra.iter().map(|s| s.to_string()));
    Args::try_parse_from(argv).unwrap()
}

fn assert_png(path: &Path, width: u32, height: u32) {
    let img = image::open(path).unwrap();
    assert_eq!((img.width(), img.height()), (width, height));
}

// ============================================================================
// Missing input
// ============================================================================

#[test]
fn test_missing_input_writes_nothing() {
    let dir = temp_test_dir();
    let out = dir.path().join("out");
    let result = process(&args(&dir.path().join("absent.nc"), &out, &[])).unwrap();

    assert!(result.is_none());
    assert!(!out.exists());
}

#[test]
fn test_missing_input_is_an_error_when_strict() {
    let dir = temp_test_dir();
    let out = dir.path().join("out");
    let result = process(&args(&dir.path().join("absent.nc"), &out, &["--strict"]));

    assert!(result.is_err());
    assert!(!out.exists());
}

#[test]
fn test_missing_variable_is_an_error() {
    let dir = temp_test_dir();
    let input = SoundingFixture::small()
        .without("GEO_lat")
        .write_netcdf(dir.path(), "partial.nc")
        .unwrap();
    let out = dir.path().join("out");

    assert!(process(&args(&input, &out, &[])).is_err());
}

// ============================================================================
// Plot types
// ============================================================================

#[test]
fn test_ied_plot() {
    let dir = temp_test_dir();
    let input = SoundingFixture::small().write_netcdf(dir.path(), "ne.nc").unwrap();
    let out = dir.path().join("out");

    let path = process(&args(&input, &out, &["-t", "ied", "-p", "300"])).unwrap().unwrap();

    assert_eq!(path, out.join("ne_ied_300.png"));
    assert_png(&path, 480, 360);
}

#[test]
fn test_lon_and_lat_sections() {
    let dir = temp_test_dir();
    let input = SoundingFixture::small().write_netcdf(dir.path(), "ne.nc").unwrap();
    let out = dir.path().join("out");

    let lon = process(&args(&input, &out, &["-t", "lon", "-p", "110"])).unwrap().unwrap();
    let lat = process(&args(&input, &out, &["-t", "lat", "-p", "30"])).unwrap().unwrap();

    assert_eq!(lon.file_name().unwrap(), "ne_lon_110.png");
    assert_eq!(lat.file_name().unwrap(), "ne_lat_30.png");
    assert_png(&lon, 480, 360);
    assert_png(&lat, 480, 360);
}

#[test]
fn test_tec_plot_with_coastlines_and_style() {
    let dir = temp_test_dir();
    let input = SoundingFixture::small().write_netcdf(dir.path(), "ne.nc").unwrap();
    let coast = dir.path().join("coast.geojson");
    std::fs::write(
        &coast,
        r#"{ "type": "LineString", "coordinates": [[101, 21], [110, 30], [123, 39]] }"#,
    )
    .unwrap();
    let style = dir.path().join("styles.json");
    std::fs::write(
        &style,
        r##"{ "version": "1.0", "styles": { "tec": { "name": "TEC", "units": "TECU",
            "stops": [ { "value": 0.0, "color": "#000080" }, { "value": 1.0, "color": "#FF0000" } ] } } }"##,
    )
    .unwrap();
    let out = dir.path().join("out");

    let path = process(&args(
        &input,
        &out,
        &[
            "-t",
            "tec",
            "--coastlines",
            coast.to_str().unwrap(),
            "--style",
            style.to_str().unwrap(),
        ],
    ))
    .unwrap()
    .unwrap();

    assert_eq!(path, out.join("ne_tec.png"));
    assert_png(&path, 480, 360);
}

#[test]
fn test_bad_style_file_is_an_error() {
    let dir = temp_test_dir();
    let input = SoundingFixture::small().write_netcdf(dir.path(), "ne.nc").unwrap();
    let style = dir.path().join("styles.json");
    std::fs::write(&style, "{ not json").unwrap();
    let out = dir.path().join("out");

    assert!(process(&args(&input, &out, &["--style", style.to_str().unwrap()])).is_err());
}
