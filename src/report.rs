//! Per-location evaluation and output formatting.
//!
//! Each location argument is resolved, evaluated with [`day_rise_set`] and
//! turned into one tab-separated line:
//!
//! ```text
//! YYYY-MM-DD<TAB>HH:MM<TAB>HH:MM
//! ```
//!
//! The date is the sunrise date; sunrise and sunset are shown in the local
//! time zone of the machine, or in UTC when requested.

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use std::fmt::Display;
use thiserror::Error;

use crate::config::Config;
use crate::constants::*;
use crate::geo::LocationError;
use crate::geo::solar::{DayRiseSet, day_rise_set};
use crate::logger::Log;

/// Time zone used for printed times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeBase {
    Local,
    Utc,
}

/// Why a location argument produced no output line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReportError {
    #[error("bad location coords")]
    BadCoords(#[source] LocationError),
    #[error("sun today never rises or sets")]
    NoSunEvent,
}

/// Shift `now` by a whole number of days.
///
/// Returns `None` when the result is outside chrono's representable range.
pub fn offset_instant(now: DateTime<Utc>, offset_days: i64) -> Option<DateTime<Utc>> {
    now.checked_add_signed(Duration::try_days(offset_days)?)
}

/// Format sunrise and sunset in the given time zone.
pub fn format_line_in<Tz>(sunrise: DateTime<Utc>, sunset: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let rise = sunrise.with_timezone(tz);
    let set = sunset.with_timezone(tz);
    format!(
        "{}\t{}\t{}",
        rise.format(DATE_FORMAT),
        rise.format(TIME_FORMAT),
        set.format(TIME_FORMAT)
    )
}

/// Format sunrise and sunset in the local time zone or in UTC.
pub fn format_line(sunrise: DateTime<Utc>, sunset: DateTime<Utc>, base: TimeBase) -> String {
    match base {
        TimeBase::Local => format_line_in(sunrise, sunset, &Local),
        TimeBase::Utc => format_line_in(sunrise, sunset, &Utc),
    }
}

/// Evaluate one location argument on the UTC date of `instant`.
pub fn evaluate(
    arg: &str,
    instant: DateTime<Utc>,
    config: &Config,
    base: TimeBase,
) -> Result<String, ReportError> {
    Log::log_decorated(&format!("Location argument '{}'", arg));

    let location = config.resolve_location(arg).map_err(|e| {
        Log::log_indented(&format!("Rejected: {}", e));
        ReportError::BadCoords(e)
    })?;

    let (latitude, longitude) = location.to_decimal_degrees();
    Log::log_indented(&format!("Coordinates: {}", location));
    Log::log_indented(&format!(
        "Decimal degrees: {:.6}, {:.6}",
        latitude, longitude
    ));
    Log::log_indented(&format!("UTC date: {}", instant.date_naive()));

    match day_rise_set(instant, &location) {
        DayRiseSet::Success { sunrise, sunset } => {
            Log::log_indented(&format!("Sunrise (UTC): {}", sunrise));
            Log::log_indented(&format!("Sunset (UTC): {}", sunset));
            Ok(format_line(sunrise, sunset, base))
        }
        DayRiseSet::NoEvent => {
            Log::log_indented("No sunrise or no sunset on this date");
            Err(ReportError::NoSunEvent)
        }
    }
}
