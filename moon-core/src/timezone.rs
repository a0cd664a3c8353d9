use chrono::{NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::debug;
use tzf_rs::DefaultFinder;

use crate::{error::MoonError, model::Coordinates, model::TimezoneInfo};

/// Map coordinates to their IANA timezone and the UTC offset right now.
///
/// The lookup is fully offline: tzf-rs carries the timezone boundary data,
/// chrono-tz carries the rule sets. The offset is evaluated at the current
/// instant, so it reflects daylight saving as of this run.
pub fn resolve(coords: &Coordinates) -> Result<TimezoneInfo, MoonError> {
    let finder = DefaultFinder::new();
    let name = finder.get_tz_name(coords.longitude, coords.latitude);
    debug!(
        "Coordinates ({}, {}) map to timezone {name:?}",
        coords.latitude, coords.longitude
    );

    resolve_named(name, coords, Utc::now().naive_utc())
}

/// Evaluate a named zone's offset at `instant` (a UTC wall time).
///
/// An empty or unrecognized name means the coordinates fell outside every
/// known zone, e.g. open ocean.
fn resolve_named(
    name: &str,
    coords: &Coordinates,
    instant: NaiveDateTime,
) -> Result<TimezoneInfo, MoonError> {
    let tz: Tz = name.parse().map_err(|_| MoonError::UnknownTimezone {
        latitude: coords.latitude,
        longitude: coords.longitude,
    })?;

    let offset_secs = tz.offset_from_utc_datetime(&instant).fix().local_minus_utc();

    Ok(TimezoneInfo {
        name: name.to_string(),
        utc_offset_hours: f64::from(offset_secs) / 3600.0,
    })
}
