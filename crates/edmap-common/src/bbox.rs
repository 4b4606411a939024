//! Geographic bounding box of a sounding grid.

use serde::{Deserialize, Serialize};

/// A lon/lat bounding box in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// Create a new bounding box.
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }

    /// Bounding box spanned by two coordinate axes, in any order.
    ///
    /// Returns `None` if either axis has no finite value.
    pub fn from_axes(lons: &[f32], lats: &[f32]) -> Option<Self> {
        let (min_lon, max_lon) = crate::grid::axis_bounds(lons)?;
        let (min_lat, max_lat) = crate::grid::axis_bounds(lats)?;
        Some(Self::new(min_lon, min_lat, max_lon, max_lat))
    }

    /// Width in degrees of longitude.
    pub fn width(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Height in degrees of latitude.
    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Check if a point is contained within this bounding box.
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        lon >= self.min_lon && lon <= self.max_lon && lat >= self.min_lat && lat <= self.max_lat
    }

    /// Width over height; 1.0 for a degenerate box.
    pub fn aspect_ratio(&self) -> f64 {
        if self.width() <= 0.0 || self.height() <= 0.0 {
            return 1.0;
        }
        self.width() / self.height()
    }
}
