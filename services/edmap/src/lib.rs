//! `edmap`: plot ionospheric electron-density soundings.
//!
//! One invocation reads one NetCDF sounding and writes one PNG:
//!
//! - `ied`: density at the altitude nearest `--parameter`, 10^6 cm^-3
//! - `lon` / `lat`: filled-contour altitude section at a fixed coordinate
//! - `tec`: vertically integrated total electron content, TECU

pub mod config;
pub mod plots;

pub use config::{Args, Interpolation, PlotKind};
pub use plots::process;
