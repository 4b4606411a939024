//! Sounding fixtures written as real NetCDF files.
//!
//! The fixture mirrors the layout of the electron-density map files the
//! loader expects: global `year`..`second` attributes and the `MSL_alt`,
//! `GEO_lon`, `GEO_lat` and `ELEC_dens` variables.

use std::path::{Path, PathBuf};

use crate::generators::{chapman_volume, linear_axis};

/// Reference observation time used by fixtures: 2021-03-04 05:06:07.
pub mod time {
    pub const YEAR: i32 = 2021;
    pub const MONTH: i32 = 3;
    pub const DAY: i32 = 4;
    pub const HOUR: i32 = 5;
    pub const MINUTE: i32 = 6;
    /// Fractional on purpose; the loader truncates it.
    pub const SECOND: f32 = 7.75;
    pub const LABEL: &str = "2021-03-04 05:06:07";
}

/// Storage of `ELEC_dens` as `i16` with CF packing attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Packing {
    pub scale_factor: f32,
    pub add_offset: f32,
}

impl Packing {
    /// Stored integer for a physical value.
    pub fn pack(&self, value: f32) -> i16 {
        ((value - self.add_offset) / self.scale_factor).round() as i16
    }
}

/// An in-memory sounding that can be written to a NetCDF file.
#[derive(Debug, Clone)]
pub struct SoundingFixture {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
    pub second: f32,
    pub altitude: Vec<f32>,
    pub longitude: Vec<f32>,
    pub latitude: Vec<f32>,
    /// Row-major (altitude, latitude, longitude)
    pub density: Vec<f32>,
    /// Optional `_FillValue` for `ELEC_dens`, in stored units
    pub fill_value: Option<f32>,
    /// Optional `missing_value` for `ELEC_dens`, in stored units
    pub missing_value: Option<f32>,
    /// Write `ELEC_dens` packed; density cells equal to the fill or missing
    /// value are stored as is, the rest are packed
    pub packing: Option<Packing>,
    /// Variables left out when writing, for missing-data tests
    pub omit: Vec<&'static str>,
}

impl SoundingFixture {
    /// A small regional sounding: 9 altitudes (100..500 km), 11 latitudes
    /// (20..40 deg), 13 longitudes (100..124 deg), Chapman-layer density.
    pub fn small() -> Self {
        let altitude = linear_axis(100.0, 50.0, 9);
        let latitude = linear_axis(20.0, 2.0, 11);
        let longitude = linear_axis(100.0, 2.0, 13);
        let density = chapman_volume(&altitude, &latitude, &longitude);
        Self::new(altitude, longitude, latitude, density)
    }

    /// Fixture with the reference timestamp and the given arrays.
    pub fn new(altitude: Vec<f32>, longitude: Vec<f32>, latitude: Vec<f32>, density: Vec<f32>) -> Self {
        Self {
            year: time::YEAR,
            month: time::MONTH,
            day: time::DAY,
            hour: time::HOUR,
            minute: time::MINUTE,
            second: time::SECOND,
            altitude,
            longitude,
            latitude,
            density,
            fill_value: None,
            missing_value: None,
            packing: None,
            omit: Vec::new(),
        }
    }

    /// Leave `name` out of the written file.
    pub fn without(mut self, name: &'static str) -> Self {
        self.omit.push(name);
        self
    }

    /// Write the fixture to `dir/file_name` and return its path.
    ///
    /// The density variable is declared with the shape implied by the axes,
    /// so the density buffer must match it.
    pub fn write_netcdf(&self, dir: &Path, file_name: &str) -> Result<PathBuf, netcdf::Error> {
        let path = dir.join(file_name);
        let mut file = netcdf::create(&path)?;

        file.add_dimension("MSL_alt", self.altitude.len())?;
        file.add_dimension("GEO_lat", self.latitude.len())?;
        file.add_dimension("GEO_lon", self.longitude.len())?;

        for (name, values) in [
            ("MSL_alt", &self.altitude),
            ("GEO_lat", &self.latitude),
            ("GEO_lon", &self.longitude),
        ] {
            if self.omit.contains(&name) {
                continue;
            }
            let mut var = file.add_variable::<f32>(name, &[name])?;
            var.put_values(&values[..], ..)?;
        }

        if !self.omit.contains(&"ELEC_dens") {
            let dims = ["MSL_alt", "GEO_lat", "GEO_lon"];
            match self.packing {
                Some(packing) => {
                    let mut var = file.add_variable::<i16>("ELEC_dens", &dims)?;
                    if let Some(fill) = self.fill_value {
                        var.set_fill_value(fill as i16)?;
                    }
                    if let Some(missing) = self.missing_value {
                        var.put_attribute("missing_value", missing as i16)?;
                    }
                    var.put_attribute("scale_factor", packing.scale_factor)?;
                    var.put_attribute("add_offset", packing.add_offset)?;
                    let stored: Vec<i16> = self
                        .density
                        .iter()
                        .map(|&v| {
                            if Some(v) == self.fill_value || Some(v) == self.missing_value {
                                v as i16
                            } else {
                                packing.pack(v)
                            }
                        })
                        .collect();
                    var.put_values(&stored[..], ..)?;
                }
                None => {
                    let mut var = file.add_variable::<f32>("ELEC_dens", &dims)?;
                    if let Some(fill) = self.fill_value {
                        var.set_fill_value(fill)?;
                    }
                    if let Some(missing) = self.missing_value {
                        var.put_attribute("missing_value", missing)?;
                    }
                    var.put_values(&self.density[..], ..)?;
                }
            }
        }

        for (name, value) in [
            ("year", self.year),
            ("month", self.month),
            ("day", self.day),
            ("hour", self.hour),
            ("minute", self.minute),
        ] {
            if !self.omit.contains(&name) {
                file.add_attribute(name, value)?;
            }
        }
        if !self.omit.contains(&"second") {
            file.add_attribute("second", self.second)?;
        }

        Ok(path)
    }
}
