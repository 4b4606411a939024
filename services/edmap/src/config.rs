//! Command-line arguments and environment fallbacks.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use edmap_grid::{InterpolationMethod, SectionAxis};
use tracing::Level;

/// Kind of figure to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlotKind {
    /// Electron density at one altitude
    Ied,
    /// Total electron content
    Tec,
    /// Vertical section at a fixed longitude
    Lon,
    /// Vertical section at a fixed latitude
    Lat,
}

impl PlotKind {
    /// Lowercase name; used for file names and style keys.
    pub fn name(&self) -> &'static str {
        match self {
            PlotKind::Ied => "ied",
            PlotKind::Tec => "tec",
            PlotKind::Lon => "lon",
            PlotKind::Lat => "lat",
        }
    }

    /// Whether `--parameter` selects anything for this plot.
    pub fn uses_parameter(&self) -> bool {
        !matches!(self, PlotKind::Tec)
    }

    pub fn section_axis(&self) -> Option<SectionAxis> {
        match self {
            PlotKind::Lon => Some(SectionAxis::Longitude),
            PlotKind::Lat => Some(SectionAxis::Latitude),
            PlotKind::Ied | PlotKind::Tec => None,
        }
    }
}

/// Resampling method for the regular lon/lat grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Interpolation {
    Nearest,
    #[default]
    Bilinear,
    Cubic,
}

impl From<Interpolation> for InterpolationMethod {
    fn from(value: Interpolation) -> Self {
        match value {
            Interpolation::Nearest => InterpolationMethod::Nearest,
            Interpolation::Bilinear => InterpolationMethod::Bilinear,
            Interpolation::Cubic => InterpolationMethod::Cubic,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "edmap")]
#[command(about = "Plot ionospheric electron-density soundings from NetCDF files")]
pub struct Args {
    /// Sounding file (NetCDF)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Directory the PNG is written to
    #[arg(short, long)]
    pub output: PathBuf,

    /// Altitude for "ied", fixed coordinate for "lon"/"lat"
    #[arg(short, long, default_value = "250", allow_negative_numbers = true)]
    pub parameter: f64,

    /// Plot type
    #[arg(short = 't', long = "type", value_enum, default_value = "ied")]
    pub plot_type: PlotKind,

    /// Figure width in pixels
    #[arg(long, env = "EDMAP_WIDTH", default_value = "1200")]
    pub width: u32,

    /// Figure height in pixels
    #[arg(long, env = "EDMAP_HEIGHT", default_value = "800")]
    pub height: u32,

    /// Spacing of the regular lon/lat grid, degrees
    #[arg(long, env = "EDMAP_GRID_STEP", default_value = "0.5")]
    pub step: f64,

    /// Resampling method
    #[arg(long, env = "EDMAP_INTERPOLATION", value_enum, default_value = "bilinear")]
    pub interpolation: Interpolation,

    /// Thickness of one altitude bin for TEC integration, km
    #[arg(long, env = "EDMAP_LAYER_THICKNESS_KM", default_value = "50")]
    pub layer_thickness_km: f64,

    /// GeoJSON coastlines drawn on TEC maps
    #[arg(long, env = "EDMAP_COASTLINES")]
    pub coastlines: Option<PathBuf>,

    /// JSON style file keyed by plot type
    #[arg(long, env = "EDMAP_STYLE")]
    pub style: Option<PathBuf>,

    /// Fail instead of skipping when the input cannot be opened
    #[arg(long, env = "EDMAP_STRICT")]
    pub strict: bool,

    /// Log level
    #[arg(long, env = "EDMAP_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Emit logs as JSON
    #[arg(long, env = "EDMAP_LOG_JSON")]
    pub log_json: bool,
}

/// Map a level name to a tracing level, falling back to INFO.
pub fn parse_level(name: &str) -> Level {
    match name.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["edmap", "-i", "in.nc", "-o", "out"]).unwrap();
        assert_eq!(args.plot_type, PlotKind::Ied);
        assert_eq!(args.parameter, 250.0);
        assert_eq!(args.interpolation, Interpolation::Bilinear);
        assert!(!args.strict);
    }

    #[test]
    fn test_short_flags() {
        let args = Args::try_parse_from([
            "edmap", "-i", "in.nc", "-o", "out", "-t", "lat", "-p", "-30.5",
        ])
        .unwrap();
        assert_eq!(args.plot_type, PlotKind::Lat);
        assert_eq!(args.parameter, -30.5);
        assert_eq!(args.plot_type.section_axis(), Some(SectionAxis::Latitude));
    }

    #[test]
    fn test_rejects_unknown_values() {
        assert!(Args::try_parse_from(["edmap", "-i", "a", "-o", "b", "-t", "xyz"]).is_err());
        assert!(Args::try_parse_from(["edmap", "-i", "a", "-o", "b", "--interpolation", "spline"]).is_err());
        assert!(Args::try_parse_from(["edmap", "-o", "b"]).is_err());
    }

    #[test]
    fn test_interpolation_maps_to_grid_method() {
        let args = Args::try_parse_from(["edmap", "-i", "a", "-o", "b", "--interpolation", "cubic"]).unwrap();
        assert_eq!(InterpolationMethod::from(args.interpolation), InterpolationMethod::Cubic);
        assert_eq!(InterpolationMethod::from(Interpolation::Nearest), InterpolationMethod::Nearest);
        assert_eq!(InterpolationMethod::from(Interpolation::default()), InterpolationMethod::default());
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("DEBUG"), Level::DEBUG);
        assert_eq!(parse_level("warn"), Level::WARN);
        assert_eq!(parse_level("chatty"), Level::INFO);
    }
}
