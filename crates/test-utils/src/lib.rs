//! Test helpers shared by the edmap crates.
//!
//! - [`generators`]: axes and density volumes with known values
//! - [`fixtures`]: [`SoundingFixture`], written to disk as a NetCDF sounding
//! - [`paths`]: temp dirs and lookup of optional real sounding files
//!
//! ```ignore
//! use test_utils::{require_test_file, temp_test_dir, SoundingFixture};
//!
//! let dir = temp_test_dir();
//! let path = SoundingFixture::small().write_netcdf(dir.path(), "ne.nc").unwrap();
//! ```

pub mod fixtures;
pub mod generators;
pub mod paths;

pub use fixtures::*;
pub use generators::*;
pub use paths::*;

/// Resolve a real sounding file by name, or return early from the test.
///
/// Real files are not checked in; see [`find_test_file`] for where they
/// are looked up.
#[macro_export]
macro_rules! require_test_file {
    ($name:expr) => {{
        match $crate::find_test_file($name) {
            Some(path) => path,
            None => {
                eprintln!("SKIPPED: sounding '{}' not found (set TEST_DATA_DIR)", $name);
                return;
            }
        }
    }};
}

/// Assert `|left - right| <= epsilon`, comparing as `f64`.
///
/// ```ignore
/// assert_approx_eq!(grid.data[0], 0.25_f32, 1e-6);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let (left, right, epsilon) = ($left as f64, $right as f64, $epsilon as f64);
        if !((left - right).abs() <= epsilon) {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`\n right: `{:?}`\n  diff: `{:?}` > `{:?}`",
                left,
                right,
                (left - right).abs(),
                epsilon
            );
        }
    }};
}
