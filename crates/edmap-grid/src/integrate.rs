//! Vertical integration of electron density into column content.

use edmap_common::{Field2D, Sounding};
use tracing::debug;

use crate::error::GridResult;

/// Thickness assigned to every altitude bin, in kilometres.
pub const DEFAULT_LAYER_THICKNESS_KM: f64 = 50.0;

/// Conversion of file density units (per cm^3) to per m^3.
const DENSITY_TO_PER_M3: f64 = 1.0e6;

/// One TEC unit, electrons per m^2.
const TECU: f64 = 1.0e16;

/// Options for [`column_content`].
#[derive(Debug, Clone, Copy)]
pub struct ColumnContentOptions {
    pub layer_thickness_km: f64,
}

impl Default for ColumnContentOptions {
    fn default() -> Self {
        Self {
            layer_thickness_km: DEFAULT_LAYER_THICKNESS_KM,
        }
    }
}

impl ColumnContentOptions {
    /// Factor turning one density value into its TECU contribution.
    pub fn layer_factor(&self) -> f64 {
        DENSITY_TO_PER_M3 * self.layer_thickness_km * 1.0e3 / TECU
    }
}

/// Integrate density over all altitude levels for every (lat, lon) cell.
///
/// Each level counts as a slab of `layer_thickness_km`, so a cell holds
/// `sum_k density[k, i, j] * 1e6 * thickness_m / 1e16` (TECU). Accumulation
/// is done in f64. A NaN anywhere in a column makes that cell NaN.
pub fn column_content(sounding: &Sounding, options: &ColumnContentOptions) -> GridResult<Field2D> {
    let density = &sounding.density;
    let (n_alt, n_lat, n_lon) = density.shape();
    let factor = options.layer_factor();

    let mut sums = vec![0f64; n_lat * n_lon];
    for k in 0..n_alt {
        let layer = density.layer(k)?;
        for (sum, &value) in sums.iter_mut().zip(layer) {
            *sum += value as f64;
        }
    }

    let data: Vec<f32> = sums.into_iter().map(|s| (s * factor) as f32).collect();
    let field = Field2D::new(data, sounding.longitude.clone(), sounding.latitude.clone())?;

    debug!(
        layers = n_alt,
        layer_thickness_km = options.layer_thickness_km,
        range = ?field.value_range(),
        "Integrated column content"
    );

    Ok(field)
}
