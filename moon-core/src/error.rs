use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can abort a moon-data run.
///
/// None of these are recovered from: each one terminates the pipeline and is
/// reported to the user as-is. No partial report is ever printed.
#[derive(Debug, Error)]
pub enum MoonError {
    /// The geocoder returned no match for the query string.
    #[error("could not find coordinates for {query}")]
    LocationNotFound { query: String },

    /// The coordinates do not fall inside any known IANA timezone
    /// (e.g. open ocean).
    #[error("no timezone found for coordinates ({latitude}, {longitude})")]
    UnknownTimezone { latitude: f64, longitude: f64 },

    /// The moon data service answered with a non-success HTTP status.
    #[error("failed to retrieve moon data: status code {status}")]
    DataRetrieval { status: StatusCode },

    /// A response body did not match the expected JSON shape.
    #[error("malformed response from {service}: {detail}")]
    MalformedResponse {
        service: &'static str,
        detail: String,
    },

    /// An event time string was not in 24-hour "HH:MM" form.
    #[error("malformed event time {0:?}, expected HH:MM")]
    MalformedTime(String),

    /// The request never produced a usable response (connect failure,
    /// timeout, body read error).
    #[error("request to {service} failed")]
    Transport {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },
}
