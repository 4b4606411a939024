//! Helpers shared by the grid integration tests.

use chrono::NaiveDate;
use edmap_common::{DensityVolume, Sounding};

/// Wrap raw arrays into a validated sounding at a fixed time.
pub fn sounding(altitude: Vec<f32>, longitude: Vec<f32>, latitude: Vec<f32>, density: Vec<f32>) -> Sounding {
    let time = NaiveDate::from_ymd_opt(2021, 3, 4)
        .and_then(|d| d.and_hms_opt(5, 6, 7))
        .unwrap();
    let volume = DensityVolume::new(density, altitude.len(), latitude.len(), longitude.len()).unwrap();
    Sounding::new(time, altitude, longitude, latitude, volume).unwrap()
}
