//! NetCDF loader for ionospheric electron-density soundings.
//!
//! A sounding file carries four variables and a timestamp:
//!
//! | name        | shape                       | meaning                     |
//! |-------------|-----------------------------|-----------------------------|
//! | `MSL_alt`   | A                           | altitude above mean sea level |
//! | `GEO_lon`   | N                           | longitude, degrees           |
//! | `GEO_lat`   | M                           | latitude, degrees            |
//! | `ELEC_dens` | A x M x N                   | electron density             |
//!
//! The observation time is composed from the global attributes `year`,
//! `month`, `day`, `hour`, `minute` and `second` (fractional seconds are
//! truncated).
//!
//! [`open_sounding`] holds the file handle only while reading and returns a
//! plain [`Sounding`](edmap_common::Sounding).

pub mod error;
pub mod native;
pub mod reader;

pub use error::{NetCdfError, NetCdfResult};
pub use native::silence_hdf5_errors;
pub use reader::{open_sounding, variables};
