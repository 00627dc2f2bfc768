//! Sunrise and sunset times from the Almanac for Computers (1990) algorithm.
//!
//! [`solar_event_time`] is the closed-form calculation: day of year and
//! location in, UTC hour and minute out. [`day_rise_set`] wraps it with the
//! calendar: it takes an instant, evaluates both events on that instant's UTC
//! date with the standard zenith, and returns full UTC instants.
//!
//! The arithmetic follows the published algorithm step by step, including the
//! order of operations in each degree/radian conversion, so that results match
//! other implementations of the same algorithm to the minute.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use std::f64::consts::PI;

use crate::constants::*;
use crate::geo::Location;

const DEG_TO_RAD: f64 = PI / 180.0;
const RAD_TO_DEG: f64 = 180.0 / PI;

/// Which crossing of the horizon to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Sunrise,
    Sunset,
}

impl Event {
    fn approximate_local_hour(self) -> f64 {
        match self {
            Event::Sunrise => SUNRISE_APPROX_HOUR,
            Event::Sunset => SUNSET_APPROX_HOUR,
        }
    }
}

/// Outcome of a single sunrise or sunset calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolarEvent {
    /// The event happens at this UTC hour (0..=23) and minute (0..=59).
    Occurs { hour: u32, minute: u32 },
    /// The sun stays below the zenith angle all day (polar night).
    NeverRises,
    /// The sun stays above the zenith angle all day (midnight sun).
    NeverSets,
}

impl SolarEvent {
    /// UTC time of day of the event, if it occurs.
    pub fn time(&self) -> Option<NaiveTime> {
        match *self {
            SolarEvent::Occurs { hour, minute } => NaiveTime::from_hms_opt(hour, minute, 0),
            SolarEvent::NeverRises | SolarEvent::NeverSets => None,
        }
    }
}

/// Sunrise and sunset on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayRiseSet {
    Success {
        sunrise: DateTime<Utc>,
        sunset: DateTime<Utc>,
    },
    /// Either event does not happen that day; which one is not reported.
    NoEvent,
}

/// Compute the UTC hour and minute of sunrise or sunset.
///
/// # Arguments
/// * `event` - Sunrise or sunset
/// * `day_of_year` - Zero-based day of the year (0 = January 1)
/// * `latitude` - Decimal degrees, positive north
/// * `longitude` - Decimal degrees, positive east
/// * `zenith` - Zenith angle of the sun at the event, in degrees
///
/// No input is validated. Coordinates outside ±90°/±180° give meaningless
/// times rather than an error.
///
/// # Examples
/// ```
/// use suntime::constants::STANDARD_ZENITH;
/// use suntime::geo::solar::{Event, SolarEvent, solar_event_time};
///
/// // Greenwich, late June
/// let rise = solar_event_time(Event::Sunrise, 171, 51.48, 0.0, STANDARD_ZENITH);
/// assert!(matches!(rise, SolarEvent::Occurs { hour: 3, .. }));
/// ```
pub fn solar_event_time(
    event: Event,
    day_of_year: u32,
    latitude: f64,
    longitude: f64,
    zenith: f64,
) -> SolarEvent {
    // Day number, one-based
    let n = f64::from(day_of_year) + 1.0;

    // Longitude as an hour offset, and approximate time of the event
    let lng_hour = longitude / DEGREES_PER_HOUR;
    let t = n + ((event.approximate_local_hour() - lng_hour) / HOURS_PER_DAY);

    // Sun's mean anomaly
    let m = (MEAN_ANOMALY_RATE * t) - MEAN_ANOMALY_OFFSET;

    // Sun's true longitude
    let l = m
        + (EQUATION_OF_CENTER_1 * (DEG_TO_RAD * m).sin())
        + (EQUATION_OF_CENTER_2 * (2.0 * DEG_TO_RAD * m).sin())
        + PERIHELION_LONGITUDE;
    let l = l.rem_euclid(360.0);

    // Right ascension, moved into the same quadrant as L, in hours
    let ra = (RAD_TO_DEG * (COS_OBLIQUITY * (DEG_TO_RAD * l).tan()).atan()).rem_euclid(360.0);
    let l_quadrant = (l / 90.0).floor() * 90.0;
    let ra_quadrant = (ra / 90.0).floor() * 90.0;
    let ra = (ra + (l_quadrant - ra_quadrant)) / DEGREES_PER_HOUR;

    // Declination
    let sin_dec = SIN_OBLIQUITY * (DEG_TO_RAD * l).sin();
    let cos_dec = sin_dec.asin().cos();

    // Local hour angle
    let cos_h = ((DEG_TO_RAD * zenith).cos() - (sin_dec * (DEG_TO_RAD * latitude).sin()))
        / (cos_dec * (DEG_TO_RAD * latitude).cos());

    if cos_h > 1.0 {
        return SolarEvent::NeverRises;
    }
    if cos_h < -1.0 {
        return SolarEvent::NeverSets;
    }

    let h = RAD_TO_DEG * cos_h.acos();
    let h = match event {
        Event::Sunrise => 360.0 - h,
        Event::Sunset => h,
    };
    let h = h / DEGREES_PER_HOUR;

    // Local mean time of the event, then back to UTC
    let local_mean = h + ra - (SIDEREAL_RATE * t) - LOCAL_MEAN_TIME_OFFSET;
    let ut = (local_mean - lng_hour).rem_euclid(HOURS_PER_DAY);

    // rem_euclid can round up to exactly 24.0 for a tiny negative input,
    // and a fraction just below 1 can round up to 60 minutes
    let hour = (ut.trunc() as u32) % 24;
    let minute = ((ut.fract() * 60.0).floor() as u32).min(59);

    SolarEvent::Occurs { hour, minute }
}

/// Compute sunrise and sunset on the UTC calendar date of `instant`.
///
/// Only the date of `instant` is used. Both events are placed on that same UTC
/// date, so west of Greenwich the sunset instant can precede the sunrise
/// instant when the local evening falls after UTC midnight.
///
/// Sunset is not computed when sunrise does not occur.
pub fn day_rise_set(instant: DateTime<Utc>, location: &Location) -> DayRiseSet {
    let date = instant.date_naive();
    let (latitude, longitude) = location.to_decimal_degrees();

    let Some(sunrise) = event_on_date(Event::Sunrise, date, latitude, longitude) else {
        return DayRiseSet::NoEvent;
    };
    let Some(sunset) = event_on_date(Event::Sunset, date, latitude, longitude) else {
        return DayRiseSet::NoEvent;
    };

    DayRiseSet::Success { sunrise, sunset }
}

fn event_on_date(
    event: Event,
    date: NaiveDate,
    latitude: f64,
    longitude: f64,
) -> Option<DateTime<Utc>> {
    let time = solar_event_time(event, date.ordinal0(), latitude, longitude, STANDARD_ZENITH)
        .time()?;
    Some(date.and_time(time).and_utc())
}
