//! Core types for grid processing.

/// Interpolation method for resampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationMethod {
    /// Nearest neighbor - fastest, preserves exact values
    Nearest,
    /// Bilinear - smooth, good for continuous data
    #[default]
    Bilinear,
    /// Catmull-Rom cubic - smoothest, may overshoot
    Cubic,
}

/// Which horizontal coordinate a vertical cross-section holds fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionAxis {
    /// Fixed longitude; the section runs along latitude (flag 0).
    Longitude,
    /// Fixed latitude; the section runs along longitude (flag 1).
    Latitude,
}

impl SectionAxis {
    /// Map the numeric axis flag (0 = longitude, 1 = latitude).
    pub fn from_flag(flag: u8) -> Option<Self> {
        match flag {
            0 => Some(Self::Longitude),
            1 => Some(Self::Latitude),
            _ => None,
        }
    }

    pub fn flag(&self) -> u8 {
        match self {
            Self::Longitude => 0,
            Self::Latitude => 1,
        }
    }

    /// Scale applied to density values in the section.
    ///
    /// Fixed-longitude sections are shown in 10^6 units; fixed-latitude
    /// sections keep the raw file values.
    pub fn value_scale(&self) -> f32 {
        match self {
            Self::Longitude => 1.0e-6,
            Self::Latitude => 1.0,
        }
    }

    /// Short label, `LON` or `LAT`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Longitude => "LON",
            Self::Latitude => "LAT",
        }
    }
}
