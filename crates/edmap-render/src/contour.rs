//! Filled-contour banding and isoline extraction (marching squares).
//!
//! A filled contour plot divides the value range into bands bounded by
//! nice levels; every cell is painted with its band's colour. Band
//! boundaries can be traced as isolines with [`march_squares`] and
//! [`connect_segments`].

use plotters::style::RGBColor;

use crate::gradient::Colormap;
use crate::ticks::nice_bounds;

/// Upper bound on the number of filled bands.
pub const MAX_BANDS: usize = 8;

/// A point in grid index space (x = column, y = row)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    fn distance(&self, other: &Point) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// A line segment between two points
#[derive(Debug, Clone)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

/// A complete contour line (polyline)
#[derive(Debug, Clone)]
pub struct Contour {
    pub level: f32,
    pub points: Vec<Point>,
    pub closed: bool,
}

/// Contour levels for a value range: nice, evenly spaced, at most
/// `max_bands` bands, first level at or below `min`, last at or above `max`.
pub fn nice_levels(min: f32, max: f32, max_bands: usize) -> Vec<f32> {
    nice_bounds(min as f64, max as f64, max_bands)
        .into_iter()
        .map(|v| v as f32)
        .collect()
}

/// Band containing `value`, i.e. `i` with `levels[i] <= value < levels[i + 1]`.
///
/// Values outside the levels fall into the first or last band; NaN has no
/// band.
pub fn band_index(levels: &[f32], value: f32) -> Option<usize> {
    if value.is_nan() || levels.len() < 2 {
        return None;
    }
    let bands = levels.len() - 1;
    let upper = levels.partition_point(|&l| l <= value);
    Some(upper.saturating_sub(1).min(bands - 1))
}

/// Colour of each band, taken from the colormap at the band midpoint.
pub fn band_colors(levels: &[f32], colormap: &Colormap) -> Vec<RGBColor> {
    if levels.len() < 2 {
        return vec![];
    }
    let lo = levels[0];
    let span = levels[levels.len() - 1] - lo;
    levels
        .windows(2)
        .map(|pair| {
            let mid = (pair[0] + pair[1]) / 2.0;
            let t = if span > 0.0 { (mid - lo) / span } else { 0.5 };
            colormap.color_at(t)
        })
        .collect()
}

/// Marching squares algorithm to generate contour lines
///
/// # Arguments
/// * `data` - Grid data in row-major order
/// * `width` - Grid width
/// * `height` - Grid height
/// * `level` - Contour level to extract
///
/// # Returns
/// Vector of line segments in grid index space
pub fn march_squares(data: &[f32], width: usize, height: usize, level: f32) -> Vec<Segment> {
    if width < 2 || height < 2 || data.len() != width * height {
        return vec![];
    }

    let mut segments = Vec::new();

    for y in 0..(height - 1) {
        for x in 0..(width - 1) {
            let tl = data[y * width + x];
            let tr = data[y * width + x + 1];
            let bl = data[(y + 1) * width + x];
            let br = data[(y + 1) * width + x + 1];

            if tl.is_nan() || tr.is_nan() || bl.is_nan() || br.is_nan() {
                continue;
            }

            let mut cell_index = 0u8;
            if tl >= level {
                cell_index |= 1;
            }
            if tr >= level {
                cell_index |= 2;
            }
            if br >= level {
                cell_index |= 4;
            }
            if bl >= level {
                cell_index |= 8;
            }

            let corners = CellCorners { tl, tr, br, bl };
            segments.extend(cell_segments(cell_index, x as f32, y as f32, &corners, level));
        }
    }

    segments
}

struct CellCorners {
    tl: f32,
    tr: f32,
    br: f32,
    bl: f32,
}

/// Line segments for one marching squares cell.
fn cell_segments(cell_index: u8, x: f32, y: f32, c: &CellCorners, level: f32) -> Vec<Segment> {
    let top = interpolate_edge((x, y), (x + 1.0, y), c.tl, c.tr, level);
    let right = interpolate_edge((x + 1.0, y), (x + 1.0, y + 1.0), c.tr, c.br, level);
    let bottom = interpolate_edge((x, y + 1.0), (x + 1.0, y + 1.0), c.bl, c.br, level);
    let left = interpolate_edge((x, y), (x, y + 1.0), c.tl, c.bl, level);

    let seg = |start: Point, end: Point| Segment { start, end };
    match cell_index {
        0 | 15 => vec![],
        1 | 14 => vec![seg(left, top)],
        2 | 13 => vec![seg(top, right)],
        3 | 12 => vec![seg(left, right)],
        4 | 11 => vec![seg(right, bottom)],
        // saddles
        5 => vec![seg(left, top), seg(right, bottom)],
        6 | 9 => vec![seg(top, bottom)],
        7 | 8 => vec![seg(left, bottom)],
        10 => vec![seg(top, right), seg(left, bottom)],
        _ => vec![],
    }
}

/// Point on an edge where the level crosses between two corner values.
fn interpolate_edge(p1: (f32, f32), p2: (f32, f32), val1: f32, val2: f32, level: f32) -> Point {
    if (val2 - val1).abs() < f32::EPSILON {
        return Point::new((p1.0 + p2.0) / 2.0, (p1.1 + p2.1) / 2.0);
    }
    let t = ((level - val1) / (val2 - val1)).clamp(0.0, 1.0);
    Point::new(p1.0 + t * (p2.0 - p1.0), p1.1 + t * (p2.1 - p1.1))
}

/// Connect line segments into continuous polylines
///
/// Takes a collection of unordered segments and joins those that share an
/// endpoint.
pub fn connect_segments(segments: Vec<Segment>, level: f32) -> Vec<Contour> {
    const EPSILON: f32 = 1e-3;

    let mut contours = Vec::new();
    let mut used = vec![false; segments.len()];

    for start_idx in 0..segments.len() {
        if used[start_idx] {
            continue;
        }
        used[start_idx] = true;
        let mut points = vec![segments[start_idx].start, segments[start_idx].end];

        let mut changed = true;
        while changed {
            changed = false;
            let current_end = points[points.len() - 1];

            for (i, seg) in segments.iter().enumerate() {
                if used[i] {
                    continue;
                }
                if seg.start.distance(&current_end) < EPSILON {
                    points.push(seg.end);
                } else if seg.end.distance(&current_end) < EPSILON {
                    points.push(seg.start);
                } else {
                    continue;
                }
                used[i] = true;
                changed = true;
                break;
            }
        }

        let closed = points.len() > 2 && points[0].distance(&points[points.len() - 1]) < EPSILON;
        contours.push(Contour {
            level,
            points,
            closed,
        });
    }

    contours
}

/// Isolines of `data` at every interior level.
pub fn isolines(data: &[f32], width: usize, height: usize, levels: &[f32]) -> Vec<Contour> {
    let interior = if levels.len() > 2 {
        &levels[1..levels.len() - 1]
    } else {
        &[][..]
    };
    interior
        .iter()
        .flat_map(|&level| connect_segments(march_squares(data, width, height, level), level))
        .collect()
}
