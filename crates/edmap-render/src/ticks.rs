//! Axis tick placement and label formatting.

/// Step multipliers tried within each power of ten.
const NICE_MULTIPLIERS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Smallest "nice" step (1, 2, 2.5, 5 or 10 times a power of ten) such that
/// the range, widened outward to multiples of the step, spans at most
/// `max_intervals` steps.
pub fn nice_step(min: f64, max: f64, max_intervals: usize) -> f64 {
    let max_intervals = max_intervals.max(2);
    let range = max - min;
    if !(range.is_finite() && range > 0.0) {
        return 1.0;
    }

    let raw = range / max_intervals as f64;
    let mut magnitude = 10f64.powf(raw.log10().floor());
    loop {
        for m in NICE_MULTIPLIERS {
            let step = m * magnitude;
            if step < raw {
                continue;
            }
            if interval_count(min, max, step) <= max_intervals {
                return step;
            }
        }
        magnitude *= 10.0;
    }
}

/// Number of `step` intervals between the outward-rounded ends of the range.
fn interval_count(min: f64, max: f64, step: f64) -> usize {
    let start = (min / step).floor();
    let end = (max / step).ceil();
    (end - start).round().max(1.0) as usize
}

/// Widen a degenerate range so it can be subdivided.
pub fn widen_range(min: f64, max: f64) -> (f64, f64) {
    if max > min {
        return (min, max);
    }
    let pad = if min == 0.0 { 1.0 } else { min.abs() * 0.1 };
    (min - pad, max + pad)
}

/// Evenly spaced nice values covering `[min, max]`, ends included.
///
/// The first value is at or below `min`, the last at or above `max`.
pub fn nice_bounds(min: f64, max: f64, max_intervals: usize) -> Vec<f64> {
    let (min, max) = widen_range(min, max);
    let step = nice_step(min, max, max_intervals);
    let start = (min / step).floor();
    let n = interval_count(min, max, step);
    (0..=n).map(|i| (start + i as f64) * step).collect()
}

/// Nice tick values lying inside `[min, max]`.
pub fn nice_ticks(min: f64, max: f64, max_ticks: usize) -> Vec<f64> {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let step = nice_step(lo, hi, max_ticks.saturating_sub(1));
    let tolerance = step * 1e-9;
    let first = (lo / step).ceil();
    let mut ticks = Vec::new();
    let mut i = 0.0;
    loop {
        let v = (first + i) * step;
        if v > hi + tolerance {
            break;
        }
        ticks.push(v);
        i += 1.0;
    }
    ticks
}

/// Format a value for a tick label with as many decimals as `step` needs.
///
/// Very large or very small magnitudes switch to exponent notation, e.g.
/// `1.5E6`.
pub fn format_tick(value: f64, step: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs().max(step.abs());
    if magnitude >= 1e5 || magnitude < 1e-3 {
        let exponent = magnitude.log10().floor() as i32;
        let mantissa = value / 10f64.powi(exponent);
        return format!("{}E{}", trim_decimals(mantissa, 2), exponent);
    }
    let decimals = if step > 0.0 {
        (-step.log10().floor()).clamp(0.0, 6.0) as usize
    } else {
        2
    };
    // 2.5 steps need one extra digit
    let decimals = if (step / 10f64.powi(-(decimals as i32)) - 2.5).abs() < 1e-9 {
        decimals + 1
    } else {
        decimals
    };
    format!("{:.*}", decimals, value)
}

fn trim_decimals(value: f64, max_decimals: usize) -> String {
    let text = format!("{:.*}", max_decimals, value);
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

/// Latitude label such as `20°N`, `15.5°S` or `0°`.
pub fn format_latitude(lat: f64) -> String {
    let body = trim_decimals(lat.abs(), 2);
    if lat > 0.0 {
        format!("{}°N", body)
    } else if lat < 0.0 {
        format!("{}°S", body)
    } else {
        "0°".to_string()
    }
}

/// Longitude label such as `100°E` or `75°W`; values are wrapped to
/// (-180, 180].
pub fn format_longitude(lon: f64) -> String {
    let mut wrapped = lon % 360.0;
    if wrapped > 180.0 {
        wrapped -= 360.0;
    } else if wrapped <= -180.0 {
        wrapped += 360.0;
    }
    let body = trim_decimals(wrapped.abs(), 2);
    if wrapped == 180.0 || wrapped == 0.0 {
        format!("{}°", body)
    } else if wrapped > 0.0 {
        format!("{}°E", body)
    } else {
        format!("{}°W", body)
    }
}

/// Every `len / divisions`-th index (at least every index), starting at 0.
pub fn decimated_indices(len: usize, divisions: usize) -> Vec<usize> {
    let step = (len / divisions.max(1)).max(1);
    (0..len).step_by(step).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_step_choices() {
        assert!((nice_step(0.0, 1.0, 8) - 0.2).abs() < 1e-12);
        assert!((nice_step(0.0, 10.0, 5) - 2.0).abs() < 1e-12);
        assert!((nice_step(0.0, 100.0, 8) - 20.0).abs() < 1e-9);
        assert!((nice_step(0.0, 4.0, 8) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_nice_step_respects_outward_rounding() {
        // 0.1 would need 9 intervals from 0.0 to 0.9
        let step = nice_step(0.01, 0.81, 8);
        assert!(interval_count(0.01, 0.81, step) <= 8);
    }

    #[test]
    fn test_nice_bounds_cover_range() {
        let bounds = nice_bounds(0.13, 0.87, 8);
        assert!(bounds[0] <= 0.13);
        assert!(*bounds.last().unwrap() >= 0.87);
        assert!(bounds.len() - 1 <= 8);
    }

    #[test]
    fn test_nice_bounds_constant_field() {
        let bounds = nice_bounds(5.0, 5.0, 8);
        assert!(bounds.len() >= 2);
        assert!(bounds[0] < 5.0 && *bounds.last().unwrap() > 5.0);
    }

    #[test]
    fn test_nice_ticks_inside_range() {
        let ticks = nice_ticks(100.0, 124.0, 7);
        assert_eq!(ticks, vec![100.0, 105.0, 110.0, 115.0, 120.0]);
        let ticks = nice_ticks(20.0, 40.0, 6);
        assert_eq!(ticks.first(), Some(&20.0));
        assert_eq!(ticks.last(), Some(&40.0));
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(0.4, 0.2), "0.4");
        assert_eq!(format_tick(300.0, 50.0), "300");
        assert_eq!(format_tick(0.25, 0.25), "0.25");
        assert_eq!(format_tick(1.5e6, 5e5), "1.5E6");
        assert_eq!(format_tick(0.0, 0.1), "0");
    }

    #[test]
    fn test_geographic_labels() {
        assert_eq!(format_latitude(20.0), "20°N");
        assert_eq!(format_latitude(-15.5), "15.5°S");
        assert_eq!(format_latitude(0.0), "0°");
        assert_eq!(format_longitude(100.0), "100°E");
        assert_eq!(format_longitude(285.0), "75°W");
        assert_eq!(format_longitude(-30.0), "30°W");
        assert_eq!(format_longitude(180.0), "180°");
    }

    #[test]
    fn test_decimated_indices() {
        assert_eq!(decimated_indices(11, 5), vec![0, 2, 4, 6, 8, 10]);
        assert_eq!(decimated_indices(13, 6), vec![0, 2, 4, 6, 8, 10, 12]);
        // fewer points than divisions still steps by one
        assert_eq!(decimated_indices(3, 5), vec![0, 1, 2]);
        assert!(decimated_indices(0, 5).is_empty());
    }
}
