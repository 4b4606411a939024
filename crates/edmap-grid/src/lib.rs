//! Grid processing for electron-density soundings.
//!
//! - [`slice`]: nearest-index selection, horizontal slices and vertical
//!   cross-sections
//! - [`integrate`]: vertical integration into column content (TEC)
//! - [`interpolation`] / [`resample`]: resampling a rectilinear field onto a
//!   regular lon/lat grid

pub mod error;
pub mod integrate;
pub mod interpolation;
pub mod resample;
pub mod slice;
pub mod types;

pub use error::{GridError, GridResult};
pub use integrate::{column_content, ColumnContentOptions, DEFAULT_LAYER_THICKNESS_KM};
pub use resample::{
    regular_axis, regular_axis_len, resample_to_regular, RegularGrid, DEFAULT_GRID_STEP, MAX_GRID_CELLS,
};
pub use slice::{altitude_slice, cross_section, nearest_index, CrossSection, HorizontalSlice};
pub use types::{InterpolationMethod, SectionAxis};
