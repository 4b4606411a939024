//! Synthetic sounding data with predictable, verifiable values.
//!
//! Volumes are flat `Vec<f32>` in (altitude, latitude, longitude) row-major
//! order, the layout the loader produces.

/// Evenly spaced axis: `start, start + step, ...` with `len` points.
///
/// # Example
///
/// ```
/// use test_utils::linear_axis;
///
/// assert_eq!(linear_axis(100.0, 50.0, 3), vec![100.0, 150.0, 200.0]);
/// ```
pub fn linear_axis(start: f32, step: f32, len: usize) -> Vec<f32> {
    (0..len).map(|i| start + step * i as f32).collect()
}

/// Volume filled with a single value.
pub fn uniform_volume(n_alt: usize, n_lat: usize, n_lon: usize, value: f32) -> Vec<f32> {
    vec![value; n_alt * n_lat * n_lon]
}

/// Volume whose values encode their own position: `k * 10000 + i * 100 + j`.
///
/// This makes it easy to check that slicing picked the right cells.
///
/// # Example
///
/// ```
/// use test_utils::index_volume;
///
/// let v = index_volume(2, 3, 4);
/// assert_eq!(v.len(), 24);
/// assert_eq!(v[1 * 12 + 2 * 4 + 3], 10203.0);
/// ```
pub fn index_volume(n_alt: usize, n_lat: usize, n_lon: usize) -> Vec<f32> {
    let mut data = Vec::with_capacity(n_alt * n_lat * n_lon);
    for k in 0..n_alt {
        for i in 0..n_lat {
            for j in 0..n_lon {
                data.push((k * 10000 + i * 100 + j) as f32);
            }
        }
    }
    data
}

/// Chapman-layer electron density in per-cm^3.
///
/// Peak density follows latitude (densest at the equator, 1e6 at most),
/// the layer peaks at 300 km with a 60 km scale height.
pub fn chapman_volume(altitude: &[f32], latitude: &[f32], longitude: &[f32]) -> Vec<f32> {
    const PEAK_HEIGHT: f32 = 300.0;
    const SCALE_HEIGHT: f32 = 60.0;

    let mut data = Vec::with_capacity(altitude.len() * latitude.len() * longitude.len());
    for &h in altitude {
        let z = (h - PEAK_HEIGHT) / SCALE_HEIGHT;
        let profile = (0.5 * (1.0 - z - (-z).exp())).exp();
        for &lat in latitude {
            let nm = 1.0e6 * (0.3 + 0.7 * lat.to_radians().cos().powi(2));
            for &lon in longitude {
                let ripple = 1.0 + 0.1 * (lon.to_radians() * 3.0).sin();
                data.push(nm * profile * ripple);
            }
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chapman_peaks_at_layer_height() {
        let alt = linear_axis(100.0, 50.0, 9); // 100..500
        let data = chapman_volume(&alt, &[0.0], &[0.0]);
        let peak = data
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(alt[peak], 300.0);
        assert!((data[peak] - 1.0e6).abs() < 1.0);
    }

    #[test]
    fn test_uniform_volume_len() {
        assert_eq!(uniform_volume(4, 3, 2, 7.0), vec![7.0; 24]);
    }
}
