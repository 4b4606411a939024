//! Pseudocolor maps of lon/lat fields (horizontal slices and TEC).

use edmap_common::BoundingBox;
use edmap_grid::{InterpolationMethod, RegularGrid};
use plotters::coord::combinators::BindKeyPoints;
use plotters::prelude::*;
use tracing::debug;

use crate::coastline::Coastlines;
use crate::error::{RenderError, RenderResult};
use crate::figure::{
    aspect_padding, draw_colorbar, layout, plot_size, render_png, shade_pixels, ColorScale, FONT,
    LABEL_SIZE, MARGIN, X_LABEL_AREA, Y_LABEL_AREA,
};
use crate::gradient::Colormap;
use crate::ticks::{decimated_indices, format_latitude, format_longitude, nice_ticks, widen_range};

const COASTLINE_COLOR: RGBColor = RGBColor(30, 30, 30);

/// Parallels and meridians to label, in degrees.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graticule {
    pub parallels: Vec<f64>,
    pub meridians: Vec<f64>,
}

impl Graticule {
    /// Every `M / 5`-th latitude and every `N / 6`-th longitude of the
    /// native axes.
    pub fn from_axes(latitude: &[f32], longitude: &[f32]) -> Self {
        Self {
            parallels: decimated_indices(latitude.len(), 5)
                .into_iter()
                .map(|i| latitude[i] as f64)
                .collect(),
            meridians: decimated_indices(longitude.len(), 6)
                .into_iter()
                .map(|i| longitude[i] as f64)
                .collect(),
        }
    }

    /// Nice round values inside the box.
    pub fn nice(extent: &BoundingBox) -> Self {
        Self {
            parallels: nice_ticks(extent.min_lat, extent.max_lat, 6),
            meridians: nice_ticks(extent.min_lon, extent.max_lon, 7),
        }
    }
}

/// A pseudocolor map.
pub struct MapPlot<'a> {
    pub grid: &'a RegularGrid,
    /// Area shown; usually the native bounding box of the sounding
    pub extent: BoundingBox,
    pub title: String,
    pub colormap: &'a Colormap,
    /// Values mapped to the ends of the colormap
    pub value_range: (f32, f32),
    pub graticule: Graticule,
    pub coastlines: Option<&'a Coastlines>,
    pub colorbar_label: Option<String>,
}

/// Draw a map and encode it as PNG.
///
/// The plotting area keeps the extent's lon/lat aspect (equirectangular).
/// Pixels are shaded by bilinear sampling of the regular grid; graticule
/// values become tick labels without grid lines.
pub fn render_map(plot: &MapPlot<'_>, width: u32, height: u32) -> RenderResult<Vec<u8>> {
    let grid = plot.grid;
    if grid.width() == 0 || grid.height() == 0 {
        return Err(RenderError::EmptyData("map grid".to_string()));
    }

    let extent = plot.extent;
    let (lo, hi) = widen_range(plot.value_range.0 as f64, plot.value_range.1 as f64);
    let (lo, hi) = (lo as f32, hi as f32);
    let (x_min, x_max) = widen_range(extent.min_lon, extent.max_lon);
    let (y_min, y_max) = widen_range(extent.min_lat, extent.max_lat);

    let meridians: Vec<f64> = plot
        .graticule
        .meridians
        .iter()
        .copied()
        .filter(|&lon| lon >= x_min && lon <= x_max)
        .collect();
    let parallels: Vec<f64> = plot
        .graticule
        .parallels
        .iter()
        .copied()
        .filter(|&lat| lat >= y_min && lat <= y_max)
        .collect();

    let png = render_png(width, height, |root| {
        let (map_area, bar_area) = layout(root, &plot.title)?;
        let (pad_x, pad_y) = aspect_padding(plot_size(&map_area), extent.aspect_ratio());
        let (pad_x, pad_y) = (pad_x as i32, pad_y as i32);
        let map_area = map_area.margin(pad_y, pad_y, pad_x, pad_x);

        let mut chart = ChartBuilder::on(&map_area)
            .margin(MARGIN)
            .x_label_area_size(X_LABEL_AREA)
            .y_label_area_size(Y_LABEL_AREA)
            .build_cartesian_2d(
                (x_min..x_max).with_key_points(meridians),
                (y_min..y_max).with_key_points(parallels),
            )?;

        shade_pixels(
            &chart.plotting_area().strip_coord_spec(),
            |fx, fy| {
                let lon = x_min + fx * (x_max - x_min);
                let lat = y_max - fy * (y_max - y_min);
                grid.sample(lon, lat, InterpolationMethod::Bilinear)
            },
            |v| plot.colormap.color_for(v, lo, hi),
        )?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .x_label_formatter(&|v| format_longitude(*v))
            .y_label_formatter(&|v| format_latitude(*v))
            .label_style((FONT, LABEL_SIZE))
            .draw()?;

        if let Some(coastlines) = plot.coastlines {
            chart.draw_series(
                coastlines
                    .clipped(&extent)
                    .into_iter()
                    .map(|run| PathElement::new(run, COASTLINE_COLOR.stroke_width(1))),
            )?;
        }
        chart.draw_series(std::iter::once(Rectangle::new(
            [(x_min, y_min), (x_max, y_max)],
            BLACK.stroke_width(1),
        )))?;

        draw_colorbar(
            &bar_area,
            ColorScale::Continuous {
                colormap: plot.colormap,
                min: lo,
                max: hi,
            },
            plot.colorbar_label.as_deref(),
        )
    })?;

    debug!(
        width,
        height,
        grid_width = grid.width(),
        grid_height = grid.height(),
        min = lo,
        max = hi,
        "Rendered map"
    );
    Ok(png)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graticule_from_axes_decimates() {
        let lat: Vec<f32> = (0..11).map(|i| 20.0 + 2.0 * i as f32).collect();
        let lon: Vec<f32> = (0..13).map(|i| 100.0 + 2.0 * i as f32).collect();
        let g = Graticule::from_axes(&lat, &lon);
        assert_eq!(g.parallels, vec![20.0, 24.0, 28.0, 32.0, 36.0, 40.0]);
        assert_eq!(g.meridians, vec![100.0, 104.0, 108.0, 112.0, 116.0, 120.0, 124.0]);
    }

    #[test]
    fn test_graticule_nice_stays_inside_box() {
        let g = Graticule::nice(&BoundingBox::new(100.0, 20.0, 124.0, 40.0));
        assert!(g.meridians.iter().all(|&lon| (100.0..=124.0).contains(&lon)));
        assert!(g.parallels.iter().all(|&lat| (20.0..=40.0).contains(&lat)));
        assert!(!g.meridians.is_empty() && !g.parallels.is_empty());
    }
}
