//! Coastline polylines loaded from GeoJSON.
//!
//! Accepts a `FeatureCollection`, a single `Feature`, a
//! `GeometryCollection` or a bare geometry. Line-like geometries
//! (`LineString`, `MultiLineString`, `Polygon`, `MultiPolygon`) become
//! polylines in lon/lat degrees; points are ignored.

use std::path::Path;

use edmap_common::BoundingBox;
use serde_json::Value;
use tracing::debug;

use crate::error::{RenderError, RenderResult};

/// Coastline polylines as `(lon, lat)` vertices.
#[derive(Debug, Clone, Default)]
pub struct Coastlines {
    pub lines: Vec<Vec<(f64, f64)>>,
}

impl Coastlines {
    pub fn from_geojson_str(json: &str) -> RenderResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        let mut lines = Vec::new();
        collect_object(&value, &mut lines)?;
        Ok(Self { lines })
    }

    pub fn from_file(path: impl AsRef<Path>) -> RenderResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let coastlines = Self::from_geojson_str(&content)?;
        debug!(
            path = %path.display(),
            lines = coastlines.lines.len(),
            "Loaded coastlines"
        );
        Ok(coastlines)
    }

    /// Runs of consecutive vertices inside `bbox`.
    ///
    /// A polyline leaving the box is split where it leaves; runs shorter
    /// than two vertices are dropped.
    pub fn clipped(&self, bbox: &BoundingBox) -> Vec<Vec<(f64, f64)>> {
        let mut runs = Vec::new();
        for line in &self.lines {
            let mut run: Vec<(f64, f64)> = Vec::new();
            for &(lon, lat) in line {
                if bbox.contains(lon, lat) {
                    run.push((lon, lat));
                } else if !run.is_empty() {
                    if run.len() >= 2 {
                        runs.push(std::mem::take(&mut run));
                    } else {
                        run.clear();
                    }
                }
            }
            if run.len() >= 2 {
                runs.push(run);
            }
        }
        runs
    }
}

fn collect_object(value: &Value, lines: &mut Vec<Vec<(f64, f64)>>) -> RenderResult<()> {
    let kind = value
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| RenderError::InvalidGeometry("object without \"type\"".to_string()))?;

    match kind {
        "FeatureCollection" => {
            for feature in array_field(value, "features")? {
                collect_object(feature, lines)?;
            }
        }
        "Feature" => match value.get("geometry") {
            Some(Value::Null) | None => {}
            Some(geometry) => collect_object(geometry, lines)?,
        },
        "GeometryCollection" => {
            for geometry in array_field(value, "geometries")? {
                collect_object(geometry, lines)?;
            }
        }
        "LineString" => lines.push(parse_line(coordinates(value)?)?),
        "MultiLineString" | "Polygon" => {
            for line in as_array(coordinates(value)?)? {
                lines.push(parse_line(line)?);
            }
        }
        "MultiPolygon" => {
            for polygon in as_array(coordinates(value)?)? {
                for ring in as_array(polygon)? {
                    lines.push(parse_line(ring)?);
                }
            }
        }
        "Point" | "MultiPoint" => {}
        other => {
            return Err(RenderError::InvalidGeometry(format!("unknown type '{}'", other)));
        }
    }
    Ok(())
}

fn array_field<'a>(value: &'a Value, name: &str) -> RenderResult<&'a Vec<Value>> {
    value
        .get(name)
        .and_then(Value::as_array)
        .ok_or_else(|| RenderError::InvalidGeometry(format!("missing \"{}\" array", name)))
}

fn coordinates(value: &Value) -> RenderResult<&Value> {
    value
        .get("coordinates")
        .ok_or_else(|| RenderError::InvalidGeometry("missing \"coordinates\"".to_string()))
}

fn as_array(value: &Value) -> RenderResult<&Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| RenderError::InvalidGeometry(format!("expected array, got {}", value)))
}

fn parse_line(value: &Value) -> RenderResult<Vec<(f64, f64)>> {
    as_array(value)?
        .iter()
        .map(|position| {
            let pair = as_array(position)?;
            match (pair.first().and_then(Value::as_f64), pair.get(1).and_then(Value::as_f64)) {
                (Some(lon), Some(lat)) => Ok((lon, lat)),
                _ => Err(RenderError::InvalidGeometry(format!("bad position {}", position))),
            }
        })
        .collect()
}
