//! Nearest-index selection and 2-D slices of a sounding.

use edmap_common::{Field2D, Sounding};
use tracing::debug;

use crate::error::{GridError, GridResult};
use crate::types::SectionAxis;

/// Index of the value closest to `target`.
///
/// Ties resolve to the first minimal index and NaN entries are skipped, so
/// for `[100, 150, 200, 300]` and `250` this returns 2.
pub fn nearest_index(values: &[f32], target: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        if v.is_nan() {
            continue;
        }
        let distance = (v as f64 - target).abs();
        match best {
            Some((_, d)) if distance >= d => {}
            _ => best = Some((i, distance)),
        }
    }
    best.map(|(i, _)| i)
}

/// A lat x lon density plane at one altitude level.
#[derive(Debug, Clone)]
pub struct HorizontalSlice {
    /// Index of the selected altitude level
    pub index: usize,
    /// Altitude of the selected level
    pub altitude: f32,
    /// Density plane; columns are longitudes, rows latitudes
    pub field: Field2D,
}

/// Select the altitude level nearest `altitude` and extract its plane.
pub fn altitude_slice(sounding: &Sounding, altitude: f64) -> GridResult<HorizontalSlice> {
    let index = nearest_index(&sounding.altitude, altitude)
        .ok_or_else(|| GridError::EmptyAxis("altitude".to_string()))?;

    let layer = sounding.density.layer(index)?;
    let field = Field2D::new(
        layer.to_vec(),
        sounding.longitude.clone(),
        sounding.latitude.clone(),
    )?;

    debug!(
        requested = altitude,
        index,
        selected = sounding.altitude[index],
        "Selected altitude level"
    );

    Ok(HorizontalSlice {
        index,
        altitude: sounding.altitude[index],
        field,
    })
}

/// A vertical (altitude x horizontal) section through the volume.
#[derive(Debug, Clone)]
pub struct CrossSection {
    pub axis: SectionAxis,
    /// Index of the fixed coordinate along its axis
    pub index: usize,
    /// Value of the fixed coordinate
    pub coordinate: f32,
    /// Section values; columns follow the free horizontal axis, rows altitude
    pub field: Field2D,
}

/// Extract the vertical section nearest `value` along `axis`.
///
/// Values are multiplied by [`SectionAxis::value_scale`]: fixed-longitude
/// sections are scaled by 1e-6, fixed-latitude sections are left raw.
pub fn cross_section(sounding: &Sounding, axis: SectionAxis, value: f64) -> GridResult<CrossSection> {
    let density = &sounding.density;
    let (n_alt, n_lat, n_lon) = density.shape();

    let (index, coordinate, x, data) = match axis {
        SectionAxis::Longitude => {
            let j = nearest_index(&sounding.longitude, value)
                .ok_or_else(|| GridError::EmptyAxis("longitude".to_string()))?;
            let mut data = Vec::with_capacity(n_alt * n_lat);
            for k in 0..n_alt {
                for i in 0..n_lat {
                    data.push(density.get(k, i, j));
                }
            }
            (j, sounding.longitude[j], sounding.latitude.clone(), data)
        }
        SectionAxis::Latitude => {
            let i = nearest_index(&sounding.latitude, value)
                .ok_or_else(|| GridError::EmptyAxis("latitude".to_string()))?;
            let mut data = Vec::with_capacity(n_alt * n_lon);
            for k in 0..n_alt {
                for j in 0..n_lon {
                    data.push(density.get(k, i, j));
                }
            }
            (i, sounding.latitude[i], sounding.longitude.clone(), data)
        }
    };

    let field = Field2D::new(data, x, sounding.altitude.clone())?.scaled(axis.value_scale());

    debug!(
        axis = axis.label(),
        requested = value,
        index,
        selected = coordinate,
        "Selected cross-section"
    );

    Ok(CrossSection {
        axis,
        index,
        coordinate,
        field,
    })
}
