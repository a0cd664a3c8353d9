use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{
    config::Config,
    error::MoonError,
    model::{Coordinates, MoonTimes, TimezoneInfo},
};

const USNO_URL: &str = "https://aa.usno.navy.mil/api/rstt/oneday";

/// Client for the USNO "rise/set/transit times, one day" API.
#[derive(Debug, Clone)]
pub struct UsnoClient {
    http: Client,
}

impl UsnoClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .context("Failed to build HTTP client for the USNO API")?;

        Ok(Self { http })
    }

    /// Fetch the day's moon phenomena for one location.
    ///
    /// `dst=false` is deliberate and must stay: the offset we send already
    /// reflects daylight saving at the current instant, and the service
    /// would otherwise apply it a second time.
    pub async fn one_day(
        &self,
        date: NaiveDate,
        coords: &Coordinates,
        timezone: &TimezoneInfo,
    ) -> Result<Vec<Phenomenon>, MoonError> {
        let date = date.format("%Y-%m-%d").to_string();
        let coords = format!("{:.2},{:.2}", coords.latitude, coords.longitude);
        let tz = timezone.utc_offset_hours.to_string();
        debug!("Requesting USNO one-day data: date={date} coords={coords} tz={tz}");

        let res = self
            .http
            .get(USNO_URL)
            .query(&[
                ("date", date.as_str()),
                ("coords", coords.as_str()),
                ("tz", tz.as_str()),
                ("dst", "false"),
            ])
            .send()
            .await
            .map_err(|source| MoonError::Transport { service: "USNO", source })?;

        check_status(res.status())?;

        let body = res
            .text()
            .await
            .map_err(|source| MoonError::Transport { service: "USNO", source })?;

        let parsed: UsnoResponse =
            serde_json::from_str(&body).map_err(|e| MoonError::MalformedResponse {
                service: "USNO",
                detail: e.to_string(),
            })?;

        Ok(parsed.properties.data.moondata)
    }
}

/// Any non-success status is fatal and carries the code; no retry.
fn check_status(status: reqwest::StatusCode) -> Result<(), MoonError> {
    if !status.is_success() {
        return Err(MoonError::DataRetrieval { status });
    }

    Ok(())
}

/// One tagged moon event, e.g. `{"phen": "Rise", "time": "05:32"}`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Phenomenon {
    pub phen: String,
    pub time: String,
}

#[derive(Debug, Deserialize)]
struct UsnoResponse {
    properties: UsnoProperties,
}

#[derive(Debug, Deserialize)]
struct UsnoProperties {
    data: UsnoData,
}

#[derive(Debug, Deserialize)]
struct UsnoData {
    moondata: Vec<Phenomenon>,
}

/// Pick the moonrise and moonset out of the day's event list.
///
/// Single forward scan; tags other than "Rise" and "Set" (upper transit,
/// begin/end civil twilight) are ignored. When a tag appears more than once
/// the last entry in source order wins, matching the service's own ordering
/// of a day's events. A missing event is `None`, not an error.
pub fn extract_moon_times(events: &[Phenomenon]) -> Result<MoonTimes, MoonError> {
    let mut times = MoonTimes::default();

    for event in events {
        match event.phen.as_str() {
            "Rise" => times.rise = Some(to_twelve_hour(&event.time)?),
            "Set" => times.set = Some(to_twelve_hour(&event.time)?),
            _ => {}
        }
    }

    Ok(times)
}

/// "17:48" -> "05:48 PM".
fn to_twelve_hour(raw: &str) -> Result<String, MoonError> {
    let time = NaiveTime::parse_from_str(raw, "%H:%M")
        .map_err(|_| MoonError::MalformedTime(raw.to_string()))?;

    Ok(time.format("%I:%M %p").to_string())
}
