//! Resampling a rectilinear lon/lat field onto a regular grid.

use edmap_common::{axis_bounds, Field2D};
use rayon::prelude::*;
use tracing::debug;

use crate::error::{GridError, GridResult};
use crate::interpolation::{fractional_index, sample};
use crate::types::InterpolationMethod;

/// Default spacing of the regular grid, in degrees.
pub const DEFAULT_GRID_STEP: f64 = 0.5;

/// Tolerance on the point count so that rounding noise in `(stop - start) / step`
/// does not add a spurious trailing point.
const COUNT_EPSILON: f64 = 1e-9;

/// Most cells a regular grid may hold (256 MiB of `f32`). A global grid
/// fits down to a step of about 0.045 degrees.
pub const MAX_GRID_CELLS: usize = 1 << 26;

/// Number of points [`regular_axis`] yields, checked against
/// [`MAX_GRID_CELLS`] before anything is allocated.
pub fn regular_axis_len(min: f64, max: f64, step: f64) -> GridResult<usize> {
    if !(step.is_finite() && step > 0.0) {
        return Err(GridError::InvalidStep(step));
    }
    if !(min.is_finite() && max.is_finite()) || max < min {
        return Err(GridError::EmptyAxis(format!("[{}, {}]", min, max)));
    }
    let count = ((max + step - min) / step - COUNT_EPSILON).ceil().max(1.0);
    if !count.is_finite() || count > MAX_GRID_CELLS as f64 {
        return Err(GridError::TooManyCells {
            requested: count,
            limit: MAX_GRID_CELLS,
        });
    }
    Ok(count as usize)
}

/// Values `min, min + step, ...` up to the first one at or after `max`.
///
/// Equivalent to `arange(min, max + step, step)`: the first point is `min`,
/// the last point is `>= max` and less than `max + step`.
pub fn regular_axis(min: f64, max: f64, step: f64) -> GridResult<Vec<f64>> {
    let count = regular_axis_len(min, max, step)?;
    Ok((0..count).map(|i| min + i as f64 * step).collect())
}

/// A field sampled on a regular lon/lat grid.
#[derive(Debug, Clone)]
pub struct RegularGrid {
    /// Column coordinates (longitude), ascending by `step`
    pub lons: Vec<f64>,
    /// Row coordinates (latitude), ascending by `step`
    pub lats: Vec<f64>,
    pub step: f64,
    /// Row-major values, `lats.len()` rows of `lons.len()` columns
    pub data: Vec<f32>,
}

impl RegularGrid {
    pub fn width(&self) -> usize {
        self.lons.len()
    }

    pub fn height(&self) -> usize {
        self.lats.len()
    }

    /// Value at (lon, lat), interpolated between regular nodes.
    ///
    /// Points outside the grid clamp to the edge.
    pub fn sample(&self, lon: f64, lat: f64, method: InterpolationMethod) -> f32 {
        let (w, h) = (self.width(), self.height());
        if w == 0 || h == 0 {
            return f32::NAN;
        }
        let x = ((lon - self.lons[0]) / self.step).clamp(0.0, (w - 1) as f64);
        let y = ((lat - self.lats[0]) / self.step).clamp(0.0, (h - 1) as f64);
        sample(&self.data, w, h, x, y, method)
    }

    /// Minimum and maximum of the finite values.
    pub fn value_range(&self) -> Option<(f32, f32)> {
        self.data
            .iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc, &v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Multiply every value by `factor`.
    pub fn scaled(mut self, factor: f32) -> Self {
        self.data.iter_mut().for_each(|v| *v *= factor);
        self
    }
}

/// Resample `field` (columns = lon, rows = lat) onto a regular grid of
/// spacing `step` covering the field's native bounding box.
///
/// Fails with [`GridError::TooManyCells`] when the grid would exceed
/// [`MAX_GRID_CELLS`].
pub fn resample_to_regular(
    field: &Field2D,
    step: f64,
    method: InterpolationMethod,
) -> GridResult<RegularGrid> {
    let (min_lon, max_lon) =
        axis_bounds(&field.x).ok_or_else(|| GridError::EmptyAxis("longitude".to_string()))?;
    let (min_lat, max_lat) =
        axis_bounds(&field.y).ok_or_else(|| GridError::EmptyAxis("latitude".to_string()))?;

    let width = regular_axis_len(min_lon, max_lon, step)?;
    let height = regular_axis_len(min_lat, max_lat, step)?;
    match width.checked_mul(height) {
        Some(cells) if cells <= MAX_GRID_CELLS => {}
        _ => {
            return Err(GridError::TooManyCells {
                requested: width as f64 * height as f64,
                limit: MAX_GRID_CELLS,
            })
        }
    }

    let lons = regular_axis(min_lon, max_lon, step)?;
    let lats = regular_axis(min_lat, max_lat, step)?;

    let xs: Vec<f64> = lons
        .iter()
        .map(|&lon| fractional_index(&field.x, lon).unwrap_or(f64::NAN))
        .collect();
    let ys: Vec<f64> = lats
        .iter()
        .map(|&lat| fractional_index(&field.y, lat).unwrap_or(f64::NAN))
        .collect();

    let mut data = vec![f32::NAN; width * height];

    data.par_chunks_mut(width)
        .zip(ys.par_iter())
        .for_each(|(row, &y)| {
            for (out, &x) in row.iter_mut().zip(&xs) {
                *out = sample(&field.data, field.width, field.height, x, y, method);
            }
        });

    debug!(
        src_width = field.width,
        src_height = field.height,
        dst_width = width,
        dst_height = height,
        step,
        method = ?method,
        "Resampled field to regular grid"
    );

    Ok(RegularGrid {
        lons,
        lats,
        step,
        data,
    })
}
