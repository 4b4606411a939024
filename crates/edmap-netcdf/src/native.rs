//! Thin helpers over the native netcdf library.
//!
//! The netcdf crate wraps libnetcdf/HDF5; these helpers read typed values and
//! attributes without tripping HDF5's diagnostic output.

use std::sync::Once;

use crate::error::{NetCdfError, NetCdfResult};

/// Silence HDF5's automatic error printing to stderr.
///
/// The HDF5 C library prints verbose error messages to stderr even when errors
/// are handled gracefully by the Rust code (e.g., when checking for optional
/// attributes that don't exist). This creates confusing log spam like:
///
/// ```text
/// HDF5-DIAG: Error detected in HDF5 (1.10.8) thread 3:
///   #003: ../../../src/H5Adense.c line 397 in H5A__dense_open(): can't locate attribute in name index
/// ```
///
/// It only needs to be called once per process, but is safe to call multiple
/// times. Call it before the first file is opened.
pub fn silence_hdf5_errors() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        // SAFETY: H5Eset_auto2 is thread-safe and we're passing null pointers
        // to disable error output, which is a documented valid use.
        unsafe {
            hdf5_metno_sys::h5e::H5Eset_auto2(
                hdf5_metno_sys::h5e::H5E_DEFAULT,
                None,
                std::ptr::null_mut(),
            );
        }
    });
}

/// A variable read as `f32`, with its dimension lengths.
#[derive(Debug, Clone)]
pub struct FloatVariable {
    pub values: Vec<f32>,
    pub shape: Vec<usize>,
}

/// Read a whole variable as `f32`.
///
/// Cells equal to `_FillValue` or `missing_value` become NaN. The rest are
/// unpacked as `value * scale_factor + add_offset` when either attribute is
/// present; both are compared and applied to the stored values.
pub fn read_f32_variable(file: &netcdf::File, name: &str) -> NetCdfResult<FloatVariable> {
    let var = file
        .variable(name)
        .ok_or_else(|| NetCdfError::MissingData(format!("{} variable", name)))?;

    let shape: Vec<usize> = var.dimensions().iter().map(|d| d.len()).collect();

    let mut values: Vec<f32> = var
        .get_values(..)
        .map_err(|e| NetCdfError::InvalidFormat(format!("Failed to read {}: {}", name, e)))?;

    let fill_value = get_f32_attr(&var, "_FillValue");
    let missing_value = get_f32_attr(&var, "missing_value");
    let scale_factor = get_f32_attr(&var, "scale_factor");
    let add_offset = get_f32_attr(&var, "add_offset");
    let packed = scale_factor.is_some() || add_offset.is_some();
    let scale_factor = scale_factor.unwrap_or(1.0);
    let add_offset = add_offset.unwrap_or(0.0);

    for v in values.iter_mut() {
        if Some(*v) == fill_value || Some(*v) == missing_value {
            *v = f32::NAN;
        } else if packed {
            *v = *v * scale_factor + add_offset;
        }
    }

    Ok(FloatVariable { values, shape })
}

/// Check if a variable has an attribute with the given name.
/// This avoids HDF5 error spam when checking for optional attributes.
fn has_attr(var: &netcdf::Variable, name: &str) -> bool {
    var.attributes().any(|attr| attr.name() == name)
}

/// Helper to get f32 attribute.
fn get_f32_attr(var: &netcdf::Variable, name: &str) -> Option<f32> {
    if !has_attr(var, name) {
        return None;
    }
    let attr_value = var.attribute_value(name)?.ok()?;
    f32::try_from(attr_value).ok()
}

/// Read a numeric global attribute as `f64`.
pub fn get_global_f64(file: &netcdf::File, name: &str) -> NetCdfResult<f64> {
    if !file.attributes().any(|attr| attr.name() == name) {
        return Err(NetCdfError::MissingData(format!("{} attribute", name)));
    }
    let value = file
        .attribute(name)
        .ok_or_else(|| NetCdfError::MissingData(format!("{} attribute", name)))?
        .value()
        .map_err(|e| NetCdfError::InvalidFormat(format!("Failed to read {}: {}", name, e)))?;
    f64::try_from(value)
        .map_err(|e| NetCdfError::InvalidFormat(format!("{} is not numeric: {}", name, e)))
}
