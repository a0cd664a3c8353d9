//! Core library for the `moon` CLI.
//!
//! This crate defines:
//! - Configuration handling
//! - The Nominatim geocoding client
//! - The offline coordinates-to-timezone resolver
//! - The USNO moon-data client and event extraction
//! - Shared domain models and the error taxonomy
//!
//! It is used by `moon-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod geocode;
pub mod model;
pub mod moondata;
pub mod timezone;

pub use config::Config;
pub use error::MoonError;
pub use geocode::NominatimGeocoder;
pub use model::{Coordinates, LocationQuery, MoonReport, MoonTimes, TimezoneInfo};
pub use moondata::{Phenomenon, UsnoClient, extract_moon_times};
