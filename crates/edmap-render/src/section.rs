//! Filled contour plots of vertical cross-sections.

use edmap_common::{axis_bounds, Field2D};
use edmap_grid::interpolation::{bilinear_interpolate, coordinate_at, fractional_index};
use plotters::prelude::*;
use tracing::debug;

use crate::contour::{band_colors, band_index, isolines, nice_levels, MAX_BANDS};
use crate::error::{RenderError, RenderResult};
use crate::figure::{
    draw_colorbar, layout, render_png, shade_pixels, ColorScale, FONT, LABEL_SIZE, MARGIN,
    X_LABEL_AREA, Y_LABEL_AREA,
};
use crate::gradient::{Colormap, NAN_COLOR};
use crate::ticks::{format_tick, nice_step, widen_range};

const ISOLINE_COLOR: RGBColor = RGBColor(40, 40, 40);

/// A filled contour plot of a 2-D field against its column and row
/// coordinates.
pub struct SectionPlot<'a> {
    /// Columns along x, rows along y (altitude)
    pub field: &'a Field2D,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub colormap: &'a Colormap,
    /// Value range to cover with bands; the field's own range when `None`
    pub value_range: Option<(f32, f32)>,
    pub max_bands: usize,
    /// Trace band boundaries as thin lines
    pub isolines: bool,
}

impl<'a> SectionPlot<'a> {
    pub fn new(field: &'a Field2D, colormap: &'a Colormap, title: impl Into<String>) -> Self {
        Self {
            field,
            title: title.into(),
            x_label: String::new(),
            y_label: String::new(),
            colormap,
            value_range: None,
            max_bands: MAX_BANDS,
            isolines: true,
        }
    }
}

/// Draw a cross-section and encode it as PNG.
pub fn render_section(plot: &SectionPlot<'_>, width: u32, height: u32) -> RenderResult<Vec<u8>> {
    let field = plot.field;
    let (vmin, vmax) = plot
        .value_range
        .or_else(|| field.value_range())
        .ok_or_else(|| RenderError::EmptyData("cross-section has no finite values".to_string()))?;

    let levels = nice_levels(vmin, vmax, plot.max_bands);
    let colors = band_colors(&levels, plot.colormap);
    let (lo, hi) = (levels[0], levels[levels.len() - 1]);

    let (x_min, x_max) = axis_bounds(&field.x).ok_or_else(|| RenderError::EmptyData("x axis".to_string()))?;
    let (y_min, y_max) = axis_bounds(&field.y).ok_or_else(|| RenderError::EmptyData("y axis".to_string()))?;
    let (x_min, x_max) = widen_range(x_min, x_max);
    let (y_min, y_max) = widen_range(y_min, y_max);

    let x_step = nice_step(x_min, x_max, 7);
    let y_step = nice_step(y_min, y_max, 7);

    let png = render_png(width, height, |root| {
        let (plot_area, bar_area) = layout(root, &plot.title)?;
        let mut chart = ChartBuilder::on(&plot_area)
            .margin(MARGIN)
            .x_label_area_size(X_LABEL_AREA)
            .y_label_area_size(Y_LABEL_AREA)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

        shade_pixels(
            &chart.plotting_area().strip_coord_spec(),
            |fx, fy| {
                let x = fractional_index(&field.x, x_min + fx * (x_max - x_min));
                let y = fractional_index(&field.y, y_max - fy * (y_max - y_min));
                match (x, y) {
                    (Some(x), Some(y)) => bilinear_interpolate(&field.data, field.width, field.height, x, y),
                    _ => f32::NAN,
                }
            },
            |v| {
                band_index(&levels, v)
                    .and_then(|band| colors.get(band).copied())
                    .unwrap_or(NAN_COLOR)
            },
        )?;

        if plot.isolines {
            chart.draw_series(isolines(&field.data, field.width, field.height, &levels).into_iter().map(
                |contour| {
                    let mut points: Vec<(f64, f64)> = contour
                        .points
                        .iter()
                        .map(|p| (coordinate_at(&field.x, p.x as f64), coordinate_at(&field.y, p.y as f64)))
                        .collect();
                    if contour.closed {
                        if let Some(&first) = points.first() {
                            points.push(first);
                        }
                    }
                    PathElement::new(points, ISOLINE_COLOR.stroke_width(1))
                },
            ))?;
        }

        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .x_labels(8)
            .y_labels(8)
            .x_label_formatter(&|v| format_tick(*v, x_step))
            .y_label_formatter(&|v| format_tick(*v, y_step))
            .x_desc(plot.x_label.as_str())
            .y_desc(plot.y_label.as_str())
            .label_style((FONT, LABEL_SIZE))
            .axis_desc_style((FONT, LABEL_SIZE))
            .draw()?;
        chart.draw_series(std::iter::once(Rectangle::new(
            [(x_min, y_min), (x_max, y_max)],
            BLACK.stroke_width(1),
        )))?;

        draw_colorbar(
            &bar_area,
            ColorScale::Bands {
                levels: &levels,
                colors: &colors,
            },
            None,
        )
    })?;

    debug!(
        width,
        height,
        bands = colors.len(),
        min = vmin,
        max = vmax,
        "Rendered cross-section"
    );
    Ok(png)
}
