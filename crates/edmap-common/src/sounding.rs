//! In-memory representation of an electron-density sounding.

use chrono::NaiveDateTime;

use crate::bbox::BoundingBox;
use crate::error::{CommonError, CommonResult};

/// Electron density on an (altitude, latitude, longitude) grid.
///
/// Values are stored row-major: index `(k, i, j)` lives at
/// `k * n_lat * n_lon + i * n_lon + j`.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityVolume {
    data: Vec<f32>,
    n_alt: usize,
    n_lat: usize,
    n_lon: usize,
}

impl DensityVolume {
    /// Wrap a flat buffer, checking it holds `n_alt * n_lat * n_lon` values.
    pub fn new(data: Vec<f32>, n_alt: usize, n_lat: usize, n_lon: usize) -> CommonResult<Self> {
        let expected = n_alt * n_lat * n_lon;
        if data.len() != expected {
            return Err(CommonError::ShapeMismatch {
                name: "electron density".to_string(),
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            n_alt,
            n_lat,
            n_lon,
        })
    }

    /// `(n_alt, n_lat, n_lon)`
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.n_alt, self.n_lat, self.n_lon)
    }

    pub fn n_alt(&self) -> usize {
        self.n_alt
    }

    pub fn n_lat(&self) -> usize {
        self.n_lat
    }

    pub fn n_lon(&self) -> usize {
        self.n_lon
    }

    /// Raw row-major values.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Value at altitude `k`, latitude `i`, longitude `j`.
    #[inline]
    pub fn get(&self, k: usize, i: usize, j: usize) -> f32 {
        self.data[(k * self.n_lat + i) * self.n_lon + j]
    }

    /// The lat x lon plane at altitude index `k`.
    pub fn layer(&self, k: usize) -> CommonResult<&[f32]> {
        if k >= self.n_alt {
            return Err(CommonError::IndexOutOfRange {
                axis: "altitude".to_string(),
                index: k,
                len: self.n_alt,
            });
        }
        let plane = self.n_lat * self.n_lon;
        Ok(&self.data[k * plane..(k + 1) * plane])
    }
}

/// A loaded sounding: coordinate axes, density volume and observation time.
#[derive(Debug, Clone)]
pub struct Sounding {
    /// Observation time composed from the file's date/time fields
    pub time: NaiveDateTime,
    /// Altitude levels (MSL), length A
    pub altitude: Vec<f32>,
    /// Longitude grid in degrees, length N
    pub longitude: Vec<f32>,
    /// Latitude grid in degrees, length M
    pub latitude: Vec<f32>,
    /// Electron density, shape A x M x N
    pub density: DensityVolume,
}

impl Sounding {
    /// Assemble a sounding, checking that the axes agree with the volume.
    pub fn new(
        time: NaiveDateTime,
        altitude: Vec<f32>,
        longitude: Vec<f32>,
        latitude: Vec<f32>,
        density: DensityVolume,
    ) -> CommonResult<Self> {
        let (n_alt, n_lat, n_lon) = density.shape();
        for (name, len, expected) in [
            ("altitude", altitude.len(), n_alt),
            ("latitude", latitude.len(), n_lat),
            ("longitude", longitude.len(), n_lon),
        ] {
            if expected == 0 {
                return Err(CommonError::EmptyAxis(name.to_string()));
            }
            if len != expected {
                return Err(CommonError::ShapeMismatch {
                    name: name.to_string(),
                    expected,
                    actual: len,
                });
            }
        }
        Ok(Self {
            time,
            altitude,
            longitude,
            latitude,
            density,
        })
    }

    /// Native lon/lat extent of the grid.
    pub fn bbox(&self) -> Option<BoundingBox> {
        BoundingBox::from_axes(&self.longitude, &self.latitude)
    }

    /// Timestamp formatted for figure titles, e.g. `2021-03-04 05:06:07`.
    pub fn time_label(&self) -> String {
        self.time.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
