//! Common types shared by the edmap loader, grid processing and renderer.

pub mod bbox;
pub mod error;
pub mod grid;
pub mod sounding;

pub use bbox::BoundingBox;
pub use error::{CommonError, CommonResult};
pub use grid::{axis_bounds, Field2D};
pub use sounding::{DensityVolume, Sounding};
