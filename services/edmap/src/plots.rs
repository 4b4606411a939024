//! One invocation: load a sounding, build the requested figure, write it.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use edmap_common::Sounding;
use edmap_grid::{
    altitude_slice, column_content, cross_section, resample_to_regular, ColumnContentOptions,
    SectionAxis,
};
use edmap_netcdf::{open_sounding, silence_hdf5_errors};
use edmap_render::{
    render_map, render_section, Coastlines, Colormap, Graticule, MapPlot, SectionPlot,
    StyleConfig, StyleDefinition,
};
use tracing::{debug, info, warn};

use crate::config::{Args, PlotKind};

/// Units of 10^6 cm^-3 for horizontal slices.
const IED_SCALE: f32 = 1.0e-6;
const IED_RANGE: (f32, f32) = (0.0, 1.0);

/// Render the figure described by `args`.
///
/// Returns the path of the written PNG, or `None` when the input could not
/// be opened and `--strict` is off.
pub fn process(args: &Args) -> Result<Option<PathBuf>> {
    silence_hdf5_errors();

    let sounding = match open_sounding(&args.input) {
        Ok(sounding) => sounding,
        Err(e) if e.is_open_failure() && !args.strict => {
            warn!(path = %args.input.display(), error = %e, "Skipping unreadable sounding");
            return Ok(None);
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to load {}", args.input.display()));
        }
    };

    let styles = args
        .style
        .as_ref()
        .map(|path| {
            StyleConfig::from_file(path)
                .with_context(|| format!("Failed to load style file {}", path.display()))
        })
        .transpose()?;
    let style = styles
        .as_ref()
        .and_then(|config| config.get_style(args.plot_type.name()));

    info!(
        path = %args.input.display(),
        plot = args.plot_type.name(),
        time = %sounding.time_label(),
        "Loaded sounding"
    );

    let png = match args.plot_type {
        PlotKind::Ied => plot_ied(&sounding, args, style)?,
        PlotKind::Tec => plot_tec(&sounding, args, style)?,
        PlotKind::Lon => plot_section(&sounding, SectionAxis::Longitude, args, style)?,
        PlotKind::Lat => plot_section(&sounding, SectionAxis::Latitude, args, style)?,
    };

    fs::create_dir_all(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    let path = args.output.join(output_file_name(&args.input, args.plot_type, args.parameter));
    fs::write(&path, &png).with_context(|| format!("Failed to write {}", path.display()))?;

    info!(path = %path.display(), bytes = png.len(), "Wrote figure");
    Ok(Some(path))
}

/// `<input stem>_<type>[_<parameter>].png`
pub fn output_file_name(input: &Path, kind: PlotKind, parameter: f64) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "sounding".to_string());
    if kind.uses_parameter() {
        format!("{}_{}_{}.png", stem, kind.name(), parameter)
    } else {
        format!("{}_{}.png", stem, kind.name())
    }
}

/// Coordinate as shown in titles: always at least one decimal.
pub fn format_coordinate(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

fn colormap_for(style: Option<&StyleDefinition>) -> Result<Colormap> {
    match style {
        Some(style) => style.colormap().context("Invalid style"),
        None => Ok(Colormap::viridis()),
    }
}

fn plot_ied(sounding: &Sounding, args: &Args, style: Option<&StyleDefinition>) -> Result<Vec<u8>> {
    let slice = altitude_slice(sounding, args.parameter)?;
    let grid = resample_to_regular(&slice.field, args.step, args.interpolation.into())?.scaled(IED_SCALE);
    debug!(
        index = slice.index,
        altitude = slice.altitude,
        width = grid.width(),
        height = grid.height(),
        "Resampled altitude slice"
    );

    let extent = sounding
        .bbox()
        .ok_or_else(|| anyhow!("sounding has no finite lon/lat extent"))?;
    let colormap = colormap_for(style)?;
    let plot = MapPlot {
        grid: &grid,
        extent,
        title: format!(
            "IED {} ({})",
            sounding.time_label(),
            format_coordinate(slice.altitude)
        ),
        colormap: &colormap,
        value_range: style.map_or(IED_RANGE, |s| s.value_range(IED_RANGE)),
        graticule: Graticule::nice(&extent),
        coastlines: None,
        colorbar_label: style.and_then(|s| s.units.clone()),
    };
    Ok(render_map(&plot, args.width, args.height)?)
}

fn plot_section(
    sounding: &Sounding,
    axis: SectionAxis,
    args: &Args,
    style: Option<&StyleDefinition>,
) -> Result<Vec<u8>> {
    let section = cross_section(sounding, axis, args.parameter)?;
    debug!(
        axis = axis.label(),
        index = section.index,
        coordinate = section.coordinate,
        range = ?section.field.value_range(),
        "Extracted cross-section"
    );

    let colormap = colormap_for(style)?;
    let title = format!(
        "{}={} {}",
        axis.label(),
        format_coordinate(section.coordinate),
        sounding.time_label()
    );
    let mut plot = SectionPlot::new(&section.field, &colormap, title);
    plot.x_label = match axis {
        SectionAxis::Longitude => "LATITUDE",
        SectionAxis::Latitude => "LONGITUDE",
    }
    .to_string();
    plot.y_label = "ALTITUDE".to_string();
    if let (Some(style), Some(range)) = (style, section.field.value_range()) {
        plot.value_range = Some(style.value_range(range));
    }

    Ok(render_section(&plot, args.width, args.height)?)
}

fn plot_tec(sounding: &Sounding, args: &Args, style: Option<&StyleDefinition>) -> Result<Vec<u8>> {
    let options = ColumnContentOptions {
        layer_thickness_km: args.layer_thickness_km,
    };
    let tec = column_content(sounding, &options)?;
    let grid = resample_to_regular(&tec, args.step, args.interpolation.into())?;
    let range = grid
        .value_range()
        .ok_or_else(|| anyhow!("column content has no finite values"))?;
    debug!(min = range.0, max = range.1, "Integrated column content");

    let coastlines = args
        .coastlines
        .as_ref()
        .map(|path| {
            Coastlines::from_file(path)
                .with_context(|| format!("Failed to load coastlines {}", path.display()))
        })
        .transpose()?;

    let extent = sounding
        .bbox()
        .ok_or_else(|| anyhow!("sounding has no finite lon/lat extent"))?;
    let colormap = colormap_for(style)?;
    let plot = MapPlot {
        grid: &grid,
        extent,
        title: format!("TEC {}", sounding.time_label()),
        colormap: &colormap,
        value_range: style.map_or(range, |s| s.value_range(range)),
        graticule: Graticule::from_axes(&sounding.latitude, &sounding.longitude),
        coastlines: coastlines.as_ref(),
        colorbar_label: Some(
            style
                .and_then(|s| s.units.clone())
                .unwrap_or_else(|| "TECU".to_string()),
        ),
    };
    Ok(render_map(&plot, args.width, args.height)?)
}
