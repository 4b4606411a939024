//! Figure rendering for electron-density plots.
//!
//! - [`maps`]: pseudocolor lon/lat maps with graticule labels and coastlines
//! - [`section`]: filled contour plots of vertical cross-sections
//! - [`figure`]: plotters canvas, colorbar, pixel shading and PNG export
//! - [`gradient`] / [`style`]: colormaps and JSON style overrides

pub mod coastline;
pub mod contour;
pub mod error;
pub mod figure;
pub mod gradient;
pub mod maps;
pub mod section;
pub mod style;
pub mod ticks;

pub use coastline::Coastlines;
pub use error::{RenderError, RenderResult};
pub use figure::{render_png, Canvas, ColorScale};
pub use gradient::Colormap;
pub use maps::{render_map, Graticule, MapPlot};
pub use section::{render_section, SectionPlot};
pub use style::{StyleConfig, StyleDefinition};
