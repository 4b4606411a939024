//! Temp directories and lookup of optional sounding files.

use std::path::PathBuf;

/// Workspace root, two levels above this crate's manifest.
pub fn workspace_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .ancestors()
        .nth(2)
        .map(|p| p.to_path_buf())
        .unwrap_or(manifest_dir)
}

/// Look for a real sounding file.
///
/// Checked in order: `$TEST_DATA_DIR/<name>`,
/// `crates/edmap-netcdf/testdata/<name>`, `testdata/<name>`.
pub fn find_test_file(name: &str) -> Option<PathBuf> {
    let root = workspace_root();
    std::env::var_os("TEST_DATA_DIR")
        .map(|dir| PathBuf::from(dir).join(name))
        .into_iter()
        .chain([
            root.join("crates/edmap-netcdf/testdata").join(name),
            root.join("testdata").join(name),
        ])
        .find(|path| path.is_file())
}

/// Scratch directory for fixtures and rendered PNGs; removed on drop.
pub fn temp_test_dir() -> tempfile::TempDir {
    tempfile::Builder::new()
        .prefix("edmap_test_")
        .tempdir()
        .expect("create temp test dir")
}
