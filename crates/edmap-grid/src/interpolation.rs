//! Interpolation on rectilinear grids.
//!
//! Sampling happens in two steps: a coordinate is turned into a fractional
//! index along its axis with [`fractional_index`], then the field is sampled
//! at that fractional (column, row) position.

use crate::types::InterpolationMethod;

/// Fractional index of `coord` along a monotonic axis.
///
/// Works for ascending and descending axes. Coordinates outside the axis
/// clamp to the first or last index, which gives nearest-value extrapolation
/// at the edges. Returns `None` for an empty axis.
pub fn fractional_index(axis: &[f32], coord: f64) -> Option<f64> {
    let n = axis.len();
    if n == 0 {
        return None;
    }
    if n == 1 {
        return Some(0.0);
    }

    let ascending = axis[n - 1] >= axis[0];
    let first = axis[0] as f64;
    let last = axis[n - 1] as f64;

    let before_start = if ascending { coord <= first } else { coord >= first };
    let after_end = if ascending { coord >= last } else { coord <= last };
    if before_start {
        return Some(0.0);
    }
    if after_end {
        return Some((n - 1) as f64);
    }

    // First index whose value lies past `coord`; the segment ends there.
    let upper = if ascending {
        axis.partition_point(|&v| (v as f64) <= coord)
    } else {
        axis.partition_point(|&v| (v as f64) >= coord)
    };
    let upper = upper.clamp(1, n - 1);
    let lower = upper - 1;

    let a = axis[lower] as f64;
    let b = axis[upper] as f64;
    let span = b - a;
    if span == 0.0 {
        return Some(lower as f64);
    }
    Some(lower as f64 + (coord - a) / span)
}

/// Coordinate at a fractional index, the inverse of [`fractional_index`].
pub fn coordinate_at(axis: &[f32], index: f64) -> f64 {
    let n = axis.len();
    if n == 0 {
        return f64::NAN;
    }
    let clamped = index.clamp(0.0, (n - 1) as f64);
    let lower = (clamped.floor() as usize).min(n - 1);
    let upper = (lower + 1).min(n - 1);
    let t = clamped - lower as f64;
    axis[lower] as f64 * (1.0 - t) + axis[upper] as f64 * t
}

/// Nearest neighbor interpolation.
///
/// Returns the value of the nearest grid point.
pub fn nearest_interpolate(data: &[f32], width: usize, height: usize, x: f64, y: f64) -> f32 {
    let col = x.round() as usize;
    let row = y.round() as usize;

    if col >= width || row >= height {
        return f32::NAN;
    }

    data[row * width + col]
}

/// Bilinear interpolation.
///
/// Smoothly interpolates between the four nearest grid points.
pub fn bilinear_interpolate(data: &[f32], width: usize, height: usize, x: f64, y: f64) -> f32 {
    let x0 = x.floor() as usize;
    let y0 = y.floor() as usize;

    if x0 >= width || y0 >= height {
        return f32::NAN;
    }

    let x1 = (x0 + 1).min(width - 1);
    let y1 = (y0 + 1).min(height - 1);

    let xf = (x - x0 as f64) as f32;
    let yf = (y - y0 as f64) as f32;

    let v00 = data[y0 * width + x0];
    let v10 = data[y0 * width + x1];
    let v01 = data[y1 * width + x0];
    let v11 = data[y1 * width + x1];

    // Handle NaN values - if any corner is NaN, return NaN
    if v00.is_nan() || v10.is_nan() || v01.is_nan() || v11.is_nan() {
        return f32::NAN;
    }

    let top = v00 * (1.0 - xf) + v10 * xf;
    let bottom = v01 * (1.0 - xf) + v11 * xf;
    top * (1.0 - yf) + bottom * yf
}

/// Bicubic interpolation.
///
/// Uses 16 surrounding points for smoother interpolation.
pub fn cubic_interpolate(data: &[f32], width: usize, height: usize, x: f64, y: f64) -> f32 {
    let xi = x.floor() as i32;
    let yi = y.floor() as i32;

    let xf = (x - xi as f64) as f32;
    let yf = (y - yi as f64) as f32;

    let mut values = [[0.0f32; 4]; 4];

    for j in 0..4 {
        for i in 0..4 {
            let px = (xi + i - 1).clamp(0, width as i32 - 1) as usize;
            let py = (yi + j - 1).clamp(0, height as i32 - 1) as usize;
            values[j as usize][i as usize] = data[py * width + px];

            // If any value is NaN, fall back to bilinear
            if values[j as usize][i as usize].is_nan() {
                return bilinear_interpolate(data, width, height, x, y);
            }
        }
    }

    let mut row_values = [0.0f32; 4];
    for (j, row) in values.iter().enumerate() {
        row_values[j] = cubic_1d(row[0], row[1], row[2], row[3], xf);
    }

    cubic_1d(row_values[0], row_values[1], row_values[2], row_values[3], yf)
}

/// 1D cubic interpolation using Catmull-Rom spline.
fn cubic_1d(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;

    let a = -0.5 * p0 + 1.5 * p1 - 1.5 * p2 + 0.5 * p3;
    let b = p0 - 2.5 * p1 + 2.0 * p2 - 0.5 * p3;
    let c = -0.5 * p0 + 0.5 * p2;
    let d = p1;

    a * t3 + b * t2 + c * t + d
}

/// Sample a row-major grid at fractional (column, row) position.
pub fn sample(
    data: &[f32],
    width: usize,
    height: usize,
    x: f64,
    y: f64,
    method: InterpolationMethod,
) -> f32 {
    match method {
        InterpolationMethod::Nearest => nearest_interpolate(data, width, height, x, y),
        InterpolationMethod::Bilinear => bilinear_interpolate(data, width, height, x, y),
        InterpolationMethod::Cubic => cubic_interpolate(data, width, height, x, y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_interpolate() {
        let data: Vec<f32> = vec![
            1.0, 2.0, 3.0,
            4.0, 5.0, 6.0,
            7.0, 8.0, 9.0,
        ];

        assert_eq!(nearest_interpolate(&data, 3, 3, 0.0, 0.0), 1.0);
        assert_eq!(nearest_interpolate(&data, 3, 3, 1.0, 1.0), 5.0);
        assert_eq!(nearest_interpolate(&data, 3, 3, 0.4, 0.4), 1.0);
        assert_eq!(nearest_interpolate(&data, 3, 3, 0.6, 0.6), 5.0);
    }

    #[test]
    fn test_bilinear_interpolate() {
        let data: Vec<f32> = vec![
            1.0, 2.0,
            3.0, 4.0,
        ];

        // Corners
        assert_eq!(bilinear_interpolate(&data, 2, 2, 0.0, 0.0), 1.0);
        assert_eq!(bilinear_interpolate(&data, 2, 2, 1.0, 0.0), 2.0);
        assert_eq!(bilinear_interpolate(&data, 2, 2, 0.0, 1.0), 3.0);
        assert_eq!(bilinear_interpolate(&data, 2, 2, 1.0, 1.0), 4.0);

        // Center
        let center = bilinear_interpolate(&data, 2, 2, 0.5, 0.5);
        assert!((center - 2.5).abs() < 0.001);
    }

    #[test]
    fn test_bilinear_with_nan() {
        let data: Vec<f32> = vec![
            1.0, f32::NAN,
            3.0, 4.0,
        ];

        let result = bilinear_interpolate(&data, 2, 2, 0.5, 0.5);
        assert!(result.is_nan());
    }

    #[test]
    fn test_cubic_reproduces_nodes() {
        let data: Vec<f32> = (0..16).map(|v| v as f32).collect();
        assert!((cubic_interpolate(&data, 4, 4, 1.0, 2.0) - 9.0).abs() < 1e-5);
    }

    #[test]
    fn test_fractional_index_ascending() {
        let axis = [0.0, 1.0, 3.0];
        assert_eq!(fractional_index(&axis, 0.0), Some(0.0));
        assert_eq!(fractional_index(&axis, 0.5), Some(0.5));
        assert_eq!(fractional_index(&axis, 2.0), Some(1.5));
        assert_eq!(fractional_index(&axis, 3.0), Some(2.0));
    }

    #[test]
    fn test_fractional_index_descending_and_clamped() {
        let axis = [40.0, 30.0, 20.0];
        assert_eq!(fractional_index(&axis, 35.0), Some(0.5));
        assert_eq!(fractional_index(&axis, 50.0), Some(0.0));
        assert_eq!(fractional_index(&axis, 10.0), Some(2.0));
        assert_eq!(fractional_index(&[], 1.0), None);
        assert_eq!(fractional_index(&[7.0], 1.0), Some(0.0));
    }

    #[test]
    fn test_coordinate_at_inverts_fractional_index() {
        let axis = [100.0, 150.0, 250.0];
        for coord in [100.0, 120.0, 150.0, 200.0, 250.0] {
            let idx = fractional_index(&axis, coord).unwrap();
            assert!((coordinate_at(&axis, idx) - coord).abs() < 1e-9);
        }
    }
}
