//! Two-dimensional fields extracted from a sounding.

use crate::error::{CommonError, CommonResult};

/// A 2-D field in row-major order with its column and row coordinates.
///
/// For map fields the columns are longitudes and the rows latitudes. For
/// cross-sections the columns are the remaining horizontal coordinate and the
/// rows are altitude levels.
#[derive(Debug, Clone, PartialEq)]
pub struct Field2D {
    /// Values, `height` rows of `width` columns
    pub data: Vec<f32>,
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Coordinate of each column
    pub x: Vec<f32>,
    /// Coordinate of each row
    pub y: Vec<f32>,
}

impl Field2D {
    /// Build a field, checking that the data and coordinate lengths agree.
    pub fn new(data: Vec<f32>, x: Vec<f32>, y: Vec<f32>) -> CommonResult<Self> {
        let width = x.len();
        let height = y.len();
        if width == 0 {
            return Err(CommonError::EmptyAxis("x".to_string()));
        }
        if height == 0 {
            return Err(CommonError::EmptyAxis("y".to_string()));
        }
        if data.len() != width * height {
            return Err(CommonError::ShapeMismatch {
                name: "field".to_string(),
                expected: width * height,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            x,
            y,
        })
    }

    /// Value at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.data.get(row * self.width + col).copied()
    }

    /// Multiply every value by `factor`.
    pub fn scaled(mut self, factor: f32) -> Self {
        for v in &mut self.data {
            *v *= factor;
        }
        self
    }

    /// Minimum and maximum of the finite values, if any.
    pub fn value_range(&self) -> Option<(f32, f32)> {
        let mut range: Option<(f32, f32)> = None;
        for &v in self.data.iter().filter(|v| v.is_finite()) {
            range = Some(match range {
                None => (v, v),
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
            });
        }
        range
    }
}

/// Minimum and maximum of the finite values of a coordinate axis.
pub fn axis_bounds(axis: &[f32]) -> Option<(f64, f64)> {
    let mut bounds: Option<(f64, f64)> = None;
    for &v in axis.iter().filter(|v| v.is_finite()) {
        let v = v as f64;
        bounds = Some(match bounds {
            None => (v, v),
            Some((lo, hi)) => (lo.min(v), hi.max(v)),
        });
    }
    bounds
}
