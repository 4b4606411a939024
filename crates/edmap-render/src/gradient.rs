//! Colormaps for gridded values.

use plotters::style::colors::colormaps::{ColorMap, ViridisRGB};
use plotters::style::RGBColor;

/// Background for cells without data.
pub const NAN_COLOR: RGBColor = RGBColor(200, 200, 200);

/// Linear color interpolation
pub fn interpolate_color(color1: RGBColor, color2: RGBColor, t: f32) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    let t_inv = 1.0 - t;
    let mix = |a: u8, b: u8| ((a as f32 * t_inv) + (b as f32 * t)).round() as u8;

    RGBColor(
        mix(color1.0, color2.0),
        mix(color1.1, color2.1),
        mix(color1.2, color2.2),
    )
}

/// Maps normalized positions in [0, 1] to colours.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Colormap {
    /// plotters' viridis
    #[default]
    Viridis,
    /// Piecewise-linear ramp through sorted `(position, colour)` stops
    Stops(Vec<(f32, RGBColor)>),
}

impl Colormap {
    /// Build from `(position, color)` pairs.
    ///
    /// Positions are sorted and rescaled so the first stop sits at 0 and the
    /// last at 1. Returns `None` for an empty list.
    pub fn new(mut stops: Vec<(f32, RGBColor)>) -> Option<Self> {
        if stops.is_empty() {
            return None;
        }
        stops.sort_by(|a, b| a.0.total_cmp(&b.0));
        let first = stops[0].0;
        let span = stops[stops.len() - 1].0 - first;
        for stop in &mut stops {
            stop.0 = if span > 0.0 { (stop.0 - first) / span } else { 0.0 };
        }
        Some(Self::Stops(stops))
    }

    pub fn viridis() -> Self {
        Self::Viridis
    }

    /// Color at normalized position `t`; values outside [0, 1] clamp.
    pub fn color_at(&self, t: f32) -> RGBColor {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Viridis => ViridisRGB.get_color(t as f64),
            Self::Stops(stops) => {
                let upper = stops.partition_point(|&(pos, _)| pos < t);
                if upper == 0 {
                    return stops[0].1;
                }
                if upper >= stops.len() {
                    return stops[stops.len() - 1].1;
                }
                let (p0, c0) = stops[upper - 1];
                let (p1, c1) = stops[upper];
                let span = p1 - p0;
                if span <= 0.0 {
                    return c1;
                }
                interpolate_color(c0, c1, (t - p0) / span)
            }
        }
    }

    /// Colour for `value` on the range `[min, max]`; NaN gets [`NAN_COLOR`].
    pub fn color_for(&self, value: f32, min: f32, max: f32) -> RGBColor {
        if value.is_nan() {
            return NAN_COLOR;
        }
        let range = max - min;
        let range = if range.abs() < f32::EPSILON { 1.0 } else { range };
        self.color_at((value - min) / range)
    }
}
