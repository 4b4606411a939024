//! Style configuration for plot colormaps.
//!
//! Styles are keyed by plot type (`ied`, `tec`, `lon`, `lat`):
//!
//! ```json
//! {
//!   "version": "1.0",
//!   "styles": {
//!     "tec": {
//!       "name": "TEC",
//!       "units": "TECU",
//!       "stops": [
//!         { "value": 0.0, "color": "#000080" },
//!         { "value": 1.0, "color": "#FF0000" }
//!       ],
//!       "min_value": 0.0,
//!       "max_value": 60.0
//!     }
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::{RenderError, RenderResult};
use plotters::style::RGBColor;

use crate::gradient::Colormap;

/// Style configuration loaded from JSON
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StyleConfig {
    pub version: String,
    pub styles: HashMap<String, StyleDefinition>,
}

/// A single style definition
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StyleDefinition {
    pub name: String,
    pub description: Option<String>,
    pub units: Option<String>,
    pub stops: Vec<ColorStop>,
    /// Overrides the lower end of the colour range
    pub min_value: Option<f32>,
    /// Overrides the upper end of the colour range
    pub max_value: Option<f32>,
}

/// Color stop for gradient
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ColorStop {
    pub value: f32,
    pub color: String,
    pub label: Option<String>,
}

impl StyleConfig {
    /// Load style configuration from JSON string
    pub fn from_json(json_str: &str) -> RenderResult<Self> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Load style configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> RenderResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Get a specific style definition
    pub fn get_style(&self, name: &str) -> Option<&StyleDefinition> {
        self.styles.get(name)
    }
}

impl StyleDefinition {
    /// Colormap built from the stops; stop values are rescaled to [0, 1].
    pub fn colormap(&self) -> RenderResult<Colormap> {
        let stops = self
            .stops
            .iter()
            .map(|stop| {
                hex_to_rgb(&stop.color)
                    .map(|(r, g, b)| (stop.value, RGBColor(r, g, b)))
                    .ok_or_else(|| {
                        RenderError::Style(format!("{}: bad color '{}'", self.name, stop.color))
                    })
            })
            .collect::<RenderResult<Vec<_>>>()?;

        Colormap::new(stops).ok_or_else(|| RenderError::Style(format!("{}: no color stops", self.name)))
    }

    /// Apply `min_value`/`max_value` overrides to a computed range.
    pub fn value_range(&self, (min, max): (f32, f32)) -> (f32, f32) {
        (self.min_value.unwrap_or(min), self.max_value.unwrap_or(max))
    }
}

/// Parse hex color string to RGB
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some((r, g, b))
}
