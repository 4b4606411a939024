//! Shared figure plumbing on top of plotters: canvas setup, the colorbar,
//! per-pixel shading of the plotting area and PNG export.

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder};
use plotters::coord::Shift;
use plotters::prelude::*;
use rayon::prelude::*;

use crate::error::{RenderError, RenderResult};
use crate::gradient::{Colormap, NAN_COLOR};
use crate::ticks::{format_tick, nice_step, widen_range};

pub const MIN_WIDTH: u32 = 320;
pub const MIN_HEIGHT: u32 = 240;

pub const FONT: &str = "sans-serif";
pub const TITLE_SIZE: u32 = 22;
pub const LABEL_SIZE: u32 = 14;

/// Margin around each chart, pixels
pub const MARGIN: i32 = 12;
pub const X_LABEL_AREA: i32 = 45;
pub const Y_LABEL_AREA: i32 = 70;

const COLORBAR_AREA: i32 = 120;
const COLORBAR_GAP: i32 = 16;
const COLORBAR_LABEL_AREA: i32 = 70;
const COLORBAR_STEPS: usize = 200;

/// A drawing area on the in-memory RGB canvas.
pub type Canvas<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

/// How the colorbar maps values to colours.
#[derive(Debug, Clone, Copy)]
pub enum ColorScale<'a> {
    /// Smooth ramp between `min` and `max`
    Continuous {
        colormap: &'a Colormap,
        min: f32,
        max: f32,
    },
    /// Discrete bands between consecutive levels
    Bands {
        levels: &'a [f32],
        colors: &'a [RGBColor],
    },
}

impl ColorScale<'_> {
    fn range(&self) -> (f64, f64) {
        match *self {
            ColorScale::Continuous { min, max, .. } => widen_range(min as f64, max as f64),
            ColorScale::Bands { levels, .. } => match (levels.first(), levels.last()) {
                (Some(&lo), Some(&hi)) => widen_range(lo as f64, hi as f64),
                _ => (0.0, 1.0),
            },
        }
    }
}

/// Draw a figure on a white `width` x `height` canvas and encode it as PNG.
pub fn render_png<F>(width: u32, height: u32, draw: F) -> RenderResult<Vec<u8>>
where
    F: FnOnce(&Canvas<'_>) -> RenderResult<()>,
{
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        return Err(RenderError::InvalidSize { width, height });
    }

    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE)?;
        draw(&root)?;
        root.present()?;
    }
    encode_png(&buffer, width, height)
}

/// Encode packed RGB rows as PNG.
pub fn encode_png(rgb: &[u8], width: u32, height: u32) -> RenderResult<Vec<u8>> {
    let mut png = Vec::new();
    PngEncoder::new(&mut png).write_image(rgb, width, height, ColorType::Rgb8)?;
    Ok(png)
}

/// Title strip on top, then the plot area and the colorbar area side by side.
pub fn layout<'a>(root: &Canvas<'a>, title: &str) -> RenderResult<(Canvas<'a>, Canvas<'a>)> {
    let body = root.titled(title, (FONT, TITLE_SIZE))?;
    let (width, _) = body.dim_in_pixel();
    Ok(body.split_horizontally((width as i32 - COLORBAR_AREA).max(0)))
}

/// Padding `(horizontal, vertical)` on each side that shrinks an
/// `available` plot rectangle to the largest centred one with
/// `width / height == aspect`.
pub fn aspect_padding(available: (u32, u32), aspect: f64) -> (u32, u32) {
    let (w, h) = available;
    if !(aspect.is_finite() && aspect > 0.0) || w == 0 || h == 0 {
        return (0, 0);
    }
    if aspect > w as f64 / h as f64 {
        let fitted = ((w as f64 / aspect).round() as u32).clamp(1, h);
        (0, (h - fitted) / 2)
    } else {
        let fitted = ((h as f64 * aspect).round() as u32).clamp(1, w);
        ((w - fitted) / 2, 0)
    }
}

/// Size of the plotting rectangle a chart with the standard margin and label
/// areas leaves inside `area`.
pub fn plot_size(area: &Canvas<'_>) -> (u32, u32) {
    let (w, h) = area.dim_in_pixel();
    (
        w.saturating_sub((2 * MARGIN + Y_LABEL_AREA) as u32),
        h.saturating_sub((2 * MARGIN + X_LABEL_AREA) as u32),
    )
}

/// Paint every pixel of `area`.
///
/// `value_at` receives the pixel centre as fractions of the area (`0, 0` is
/// the top-left corner); NaN values get [`NAN_COLOR`].
pub fn shade_pixels<V, C>(area: &Canvas<'_>, value_at: V, color_of: C) -> RenderResult<()>
where
    V: Fn(f64, f64) -> f32 + Sync,
    C: Fn(f32) -> RGBColor + Sync,
{
    let (w, h) = area.dim_in_pixel();
    let (w, h) = (w as usize, h as usize);
    if w == 0 || h == 0 {
        return Ok(());
    }

    let mut colors = vec![NAN_COLOR; w * h];
    colors.par_chunks_mut(w).enumerate().for_each(|(row, out)| {
        let fy = (row as f64 + 0.5) / h as f64;
        for (col, color) in out.iter_mut().enumerate() {
            let value = value_at((col as f64 + 0.5) / w as f64, fy);
            *color = if value.is_nan() { NAN_COLOR } else { color_of(value) };
        }
    });

    for (i, color) in colors.iter().enumerate() {
        area.draw_pixel(((i % w) as i32, (i / w) as i32), color)?;
    }
    Ok(())
}

/// Vertical colorbar filling `area`, with value labels on its right and an
/// optional caption.
pub fn draw_colorbar(area: &Canvas<'_>, scale: ColorScale<'_>, caption: Option<&str>) -> RenderResult<()> {
    let (lo, hi) = scale.range();
    let mut chart = ChartBuilder::on(area)
        .margin_top(MARGIN)
        .margin_bottom(MARGIN + X_LABEL_AREA)
        .margin_left(COLORBAR_GAP)
        .set_label_area_size(LabelAreaPosition::Left, 0)
        .set_label_area_size(LabelAreaPosition::Right, COLORBAR_LABEL_AREA)
        .build_cartesian_2d(0f64..1f64, lo..hi)?;

    match scale {
        ColorScale::Continuous { colormap, .. } => {
            let dy = (hi - lo) / COLORBAR_STEPS as f64;
            chart.draw_series((0..COLORBAR_STEPS).map(|i| {
                let t = (i as f32 + 0.5) / COLORBAR_STEPS as f32;
                let y = lo + i as f64 * dy;
                Rectangle::new([(0.0, y), (1.0, y + dy)], colormap.color_at(t).filled())
            }))?;
        }
        ColorScale::Bands { levels, colors } => {
            chart.draw_series(levels.windows(2).zip(colors).map(|(pair, color)| {
                Rectangle::new([(0.0, pair[0] as f64), (1.0, pair[1] as f64)], color.filled())
            }))?;
        }
    }
    chart.draw_series(std::iter::once(Rectangle::new([(0.0, lo), (1.0, hi)], BLACK.stroke_width(1))))?;

    let step = nice_step(lo, hi, 7);
    let formatter = |v: &f64| format_tick(*v, step);
    let mut mesh = chart.configure_mesh();
    mesh.disable_x_mesh()
        .disable_y_mesh()
        .disable_x_axis()
        .y_labels(8)
        .y_label_formatter(&formatter)
        .label_style((FONT, LABEL_SIZE));
    if let Some(caption) = caption {
        mesh.y_desc(caption);
    }
    mesh.draw()?;
    Ok(())
}
