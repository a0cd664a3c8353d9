use anyhow::Context;
use chrono::Local;
use clap::Parser;
use inquire::Text;

use moon_core::{
    Config, LocationQuery, MoonReport, NominatimGeocoder, UsnoClient, extract_moon_times, timezone,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "moon", version, about = "Moonrise/moonset times for a city")]
pub struct Cli {
    /// Skip the prompts and use the configured default city.
    #[arg(short = 'd', long)]
    pub debug: bool,
}

impl Cli {
    /// One linear pass: resolve input, geocode, resolve the timezone,
    /// fetch the day's moon data, print. Any failure aborts with no
    /// partial report.
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?;
        let location = self.resolve_location(&config)?;

        let geocoder = NominatimGeocoder::new(&config)?;
        let coords = geocoder.geocode(&location).await?;

        let timezone = timezone::resolve(&coords)?;
        let date = Local::now().date_naive();

        let usno = UsnoClient::new(&config)?;
        let events = usno.one_day(date, &coords, &timezone).await?;
        let times = extract_moon_times(&events)?;

        let report = MoonReport { date, timezone, times };
        print!("{}", format_report(&report, self.debug.then_some(&location)));

        Ok(())
    }

    /// Debug mode takes the configured default pair without prompting;
    /// otherwise read the two lines interactively.
    fn resolve_location(&self, config: &Config) -> anyhow::Result<LocationQuery> {
        if self.debug {
            return Ok(LocationQuery::new(&config.debug_city, &config.debug_state));
        }

        let city = Text::new("Enter the city:")
            .prompt()
            .context("Failed to read city")?;
        let state = Text::new("Enter the state:")
            .prompt()
            .context("Failed to read state")?;

        Ok(LocationQuery::new(&city, &state))
    }
}

/// Render the three-line report, plus a leading notice when running with
/// the debug default city. Missing events render as "N/A".
fn format_report(report: &MoonReport, debug_default: Option<&LocationQuery>) -> String {
    let mut out = String::new();

    if let Some(location) = debug_default {
        out.push_str(&format!(
            "Running in debug mode. Defaulting to city ({location})\n"
        ));
    }

    out.push_str(&format!(
        "# Moon rise/set times in (Timezone: {} {}) on {}:\n",
        report.timezone.name,
        format_offset(report.timezone.utc_offset_hours),
        report.date.format("%Y-%m-%d"),
    ));

    let rise = report.times.rise.as_deref().unwrap_or("N/A");
    let set = report.times.set.as_deref().unwrap_or("N/A");
    out.push_str(&format!("-  RISE: {rise}\n"));
    out.push_str(&format!("-  SET: {set}\n"));

    out
}

/// Sign always explicit: whole hours render with one decimal ("-7.0"),
/// fractional offsets as-is ("+5.5", "+5.75").
fn format_offset(hours: f64) -> String {
    let sign = if hours >= 0.0 { '+' } else { '-' };
    let magnitude = hours.abs();

    if magnitude.fract() == 0.0 {
        format!("{sign}{magnitude:.1}")
    } else {
        format!("{sign}{magnitude}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use moon_core::{MoonTimes, TimezoneInfo};

    fn report(rise: Option<&str>, set: Option<&str>, offset: f64) -> MoonReport {
        MoonReport {
            date: NaiveDate::from_ymd_opt(2026, 8, 29).expect("valid date"),
            timezone: TimezoneInfo {
                name: "America/Denver".to_string(),
                utc_offset_hours: offset,
            },
            times: MoonTimes {
                rise: rise.map(str::to_string),
                set: set.map(str::to_string),
            },
        }
    }

    #[test]
    fn offset_sign_is_always_explicit() {
        assert_eq!(format_offset(-7.0), "-7.0");
        assert_eq!(format_offset(5.5), "+5.5");
        assert_eq!(format_offset(5.75), "+5.75");
        assert_eq!(format_offset(0.0), "+0.0");
    }

    #[test]
    fn renders_the_three_line_report() {
        let out = format_report(&report(Some("05:32 AM"), Some("05:48 PM"), -7.0), None);
        assert_eq!(
            out,
            "# Moon rise/set times in (Timezone: America/Denver -7.0) on 2026-08-29:\n\
             -  RISE: 05:32 AM\n\
             -  SET: 05:48 PM\n"
        );
    }

    #[test]
    fn missing_events_render_as_na() {
        let out = format_report(&report(None, None, 5.5), None);
        assert!(out.contains("-  RISE: N/A\n"));
        assert!(out.contains("-  SET: N/A\n"));
        assert!(out.contains("+5.5"));
    }

    #[test]
    fn debug_mode_adds_a_leading_notice() {
        let location = LocationQuery::new("El Paso", "TX");
        let out = format_report(&report(Some("05:32 AM"), None, -7.0), Some(&location));

        let first = out.lines().next().unwrap();
        assert_eq!(first, "Running in debug mode. Defaulting to city (El Paso, TX)");
    }

    #[test]
    fn debug_flag_parses() {
        let cli = Cli::parse_from(["moon", "-d"]);
        assert!(cli.debug);

        let cli = Cli::parse_from(["moon"]);
        assert!(!cli.debug);
    }
}
