//! Sounding file loader.

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use edmap_common::{DensityVolume, Sounding};
use tracing::debug;

use crate::error::{NetCdfError, NetCdfResult};
use crate::native::{get_global_f64, read_f32_variable, silence_hdf5_errors};

/// Variable and attribute names used by sounding files.
pub mod variables {
    pub const ALTITUDE: &str = "MSL_alt";
    pub const LONGITUDE: &str = "GEO_lon";
    pub const LATITUDE: &str = "GEO_lat";
    pub const DENSITY: &str = "ELEC_dens";

    /// Global attributes making up the observation time, in order.
    pub const TIME_FIELDS: [&str; 6] = ["year", "month", "day", "hour", "minute", "second"];
}

/// Open a sounding file and read its axes, density volume and timestamp.
///
/// Returns [`NetCdfError::OpenFailed`] when the path is missing or is not a
/// NetCDF file; every other problem is reported with its own variant.
pub fn open_sounding<P: AsRef<Path>>(path: P) -> NetCdfResult<Sounding> {
    let path = path.as_ref();

    if !path.is_file() {
        return Err(NetCdfError::OpenFailed {
            path: path.display().to_string(),
            message: "no such file".to_string(),
        });
    }

    silence_hdf5_errors();

    let file = netcdf::open(path).map_err(|e| NetCdfError::OpenFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let time = read_time(&file)?;

    let altitude = read_axis(&file, variables::ALTITUDE)?;
    let longitude = read_axis(&file, variables::LONGITUDE)?;
    let latitude = read_axis(&file, variables::LATITUDE)?;

    let density = read_f32_variable(&file, variables::DENSITY)?;
    let [n_alt, n_lat, n_lon] = <[usize; 3]>::try_from(density.shape.as_slice()).map_err(|_| {
        NetCdfError::InvalidFormat(format!(
            "{} must be 3-D, found {} dimensions",
            variables::DENSITY,
            density.shape.len()
        ))
    })?;

    debug!(
        path = %path.display(),
        n_alt,
        n_lat,
        n_lon,
        time = %time,
        "Read sounding arrays"
    );

    let volume = DensityVolume::new(density.values, n_alt, n_lat, n_lon)?;
    Ok(Sounding::new(time, altitude, longitude, latitude, volume)?)
}

/// Read a 1-D coordinate variable.
fn read_axis(file: &netcdf::File, name: &str) -> NetCdfResult<Vec<f32>> {
    let var = read_f32_variable(file, name)?;
    if var.shape.len() != 1 {
        return Err(NetCdfError::InvalidFormat(format!(
            "{} must be 1-D, found {} dimensions",
            name,
            var.shape.len()
        )));
    }
    Ok(var.values)
}

/// Compose the observation time from the global date/time attributes.
fn read_time(file: &netcdf::File) -> NetCdfResult<NaiveDateTime> {
    let mut fields = [0f64; 6];
    for (slot, name) in fields.iter_mut().zip(variables::TIME_FIELDS) {
        *slot = get_global_f64(file, name)?;
    }
    compose_time(fields)
}

/// Build a timestamp from `[year, month, day, hour, minute, second]`.
///
/// Seconds are truncated toward zero.
pub(crate) fn compose_time(fields: [f64; 6]) -> NetCdfResult<NaiveDateTime> {
    let [year, month, day, hour, minute, second] = fields;
    NaiveDate::from_ymd_opt(year as i32, month as u32, day as u32)
        .and_then(|date| date.and_hms_opt(hour as u32, minute as u32, second.trunc() as u32))
        .ok_or_else(|| {
            NetCdfError::InvalidFormat(format!(
                "invalid timestamp {}-{}-{} {}:{}:{}",
                year, month, day, hour, minute, second
            ))
        })
}
