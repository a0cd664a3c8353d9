use chrono::NaiveDate;

/// A normalized city/state pair, ready to hand to the geocoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationQuery {
    pub city: String,
    pub state: String,
}

impl LocationQuery {
    /// Normalize raw input: city is trimmed and title-cased, state is
    /// trimmed and upper-cased. Empty input is passed through; the
    /// geocoder rejects it with a location-not-found error.
    pub fn new(city: &str, state: &str) -> Self {
        Self {
            city: title_case(city.trim()),
            state: state.trim().to_uppercase(),
        }
    }

    /// The combined query string sent to the geocoder, "{city}, {state}".
    pub fn as_query(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}

impl std::fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.city, self.state)
    }
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// A point on the globe, degrees. Produced by the geocoder, never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// An IANA timezone name plus its UTC offset at the moment of resolution.
///
/// The offset already reflects daylight saving at that instant; it is not
/// valid across DST boundaries and is not cached.
#[derive(Debug, Clone, PartialEq)]
pub struct TimezoneInfo {
    pub name: String,
    pub utc_offset_hours: f64,
}

/// Moonrise/moonset for one day, already formatted as 12-hour "hh:mm AM/PM".
/// `None` means the event does not occur that day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoonTimes {
    pub rise: Option<String>,
    pub set: Option<String>,
}

/// The complete result of one run, handed to the presenter.
#[derive(Debug, Clone)]
pub struct MoonReport {
    pub date: NaiveDate,
    pub timezone: TimezoneInfo,
    pub times: MoonTimes,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_city_and_state() {
        let q = LocationQuery::new("  el paso ", "tx");
        assert_eq!(q.city, "El Paso");
        assert_eq!(q.state, "TX");
    }

    #[test]
    fn title_case_handles_mixed_input() {
        assert_eq!(title_case("SAN ANTONIO"), "San Antonio");
        assert_eq!(title_case("new york"), "New York");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn empty_input_passes_through() {
        let q = LocationQuery::new("", "  ");
        assert_eq!(q.city, "");
        assert_eq!(q.state, "");
    }

    #[test]
    fn query_string_joins_with_comma() {
        let q = LocationQuery::new("El Paso", "TX");
        assert_eq!(q.as_query(), "El Paso, TX");
        assert_eq!(q.to_string(), "El Paso, TX");
    }
}
