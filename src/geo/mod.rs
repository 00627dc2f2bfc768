//! Geographic location types and ISO 6709 coordinate parsing.
//!
//! A location is written the way the tz database writes the principal location
//! of a zone: latitude then longitude, each as sign-degrees-minutes with optional
//! seconds, in one fixed-width string:
//!
//! ```text
//! ±DDMM±DDDMM        11 characters, seconds are zero
//! ±DDMMSS±DDDMMSS    15 characters
//! ```
//!
//! `+` is north for latitude and east for longitude. The sign belongs to the
//! whole coordinate, so minutes and seconds are always unsigned.

pub mod solar;

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// Sign, degrees, minutes and optional seconds of latitude, then of longitude.
const ISO6709_PATTERN: &str = r"^([+-])([0-9]{2})([0-9]{2})([0-9]{2})?([+-])([0-9]{3})([0-9]{2})([0-9]{2})?$";

const SHORT_FORM_LEN: usize = 11;
const LONG_FORM_LEN: usize = 15;

/// Reasons a coordinate string or triple is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocationError {
    #[error("expected 11 or 15 characters, got {0}")]
    InvalidLength(usize),
    #[error("not in ±DDMM[SS]±DDDMM[SS] form")]
    Malformed,
    #[error("{field} must be below 60 (got {value})")]
    FieldOutOfRange { field: &'static str, value: u32 },
    #[error("latitude {0}° is beyond ±90°")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0}° is beyond ±180°")]
    LongitudeOutOfRange(f64),
}

/// One angular coordinate in sign-degrees-minutes-seconds form.
///
/// The sign is kept separately from the degree magnitude so that a coordinate
/// such as `-00°30'` stays in the southern or western hemisphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeoCoordinate {
    negative: bool,
    degrees: u32,
    minutes: u32,
    seconds: u32,
}

impl GeoCoordinate {
    /// Create a coordinate whose sign is taken from `degrees`.
    pub fn new(degrees: i32, minutes: u32, seconds: u32) -> Result<Self, LocationError> {
        Self::from_parts(degrees < 0, degrees.unsigned_abs(), minutes, seconds)
    }

    /// Create a coordinate from an explicit sign and unsigned fields.
    pub fn from_parts(
        negative: bool,
        degrees: u32,
        minutes: u32,
        seconds: u32,
    ) -> Result<Self, LocationError> {
        if minutes >= 60 {
            return Err(LocationError::FieldOutOfRange {
                field: "minutes",
                value: minutes,
            });
        }
        if seconds >= 60 {
            return Err(LocationError::FieldOutOfRange {
                field: "seconds",
                value: seconds,
            });
        }
        Ok(Self {
            negative,
            degrees,
            minutes,
            seconds,
        })
    }

    /// Signed whole degrees. Zero degrees reports 0 whatever the hemisphere;
    /// use [`GeoCoordinate::is_negative`] for the sign.
    pub fn degrees(&self) -> i32 {
        let magnitude = self.degrees as i32;
        if self.negative { -magnitude } else { magnitude }
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// `sign * (|deg| + min/60 + sec/3600)`
    pub fn to_decimal_degrees(&self) -> f64 {
        let magnitude =
            self.degrees as f64 + (self.minutes as f64 / 60.0) + (self.seconds as f64 / 3600.0);
        if self.negative { -magnitude } else { magnitude }
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}°{:02}'{:02}\"",
            if self.negative { '-' } else { '+' },
            self.degrees,
            self.minutes,
            self.seconds
        )
    }
}

/// A point on earth: latitude (positive north) and longitude (positive east).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub latitude: GeoCoordinate,
    pub longitude: GeoCoordinate,
}

impl Location {
    /// Pair two coordinates, rejecting latitudes beyond ±90° and longitudes
    /// beyond ±180°.
    pub fn new(latitude: GeoCoordinate, longitude: GeoCoordinate) -> Result<Self, LocationError> {
        let lat = latitude.to_decimal_degrees();
        if !(-90.0..=90.0).contains(&lat) {
            return Err(LocationError::LatitudeOutOfRange(lat));
        }
        let lon = longitude.to_decimal_degrees();
        if !(-180.0..=180.0).contains(&lon) {
            return Err(LocationError::LongitudeOutOfRange(lon));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude and longitude in decimal degrees.
    pub fn to_decimal_degrees(&self) -> (f64, f64) {
        (
            self.latitude.to_decimal_degrees(),
            self.longitude.to_decimal_degrees(),
        )
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.latitude, self.longitude)
    }
}

impl FromStr for Location {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_location(s)
    }
}

fn iso6709_regex() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(ISO6709_PATTERN).ok())
        .as_ref()
}

/// Parse an ISO 6709 `±DDMM±DDDMM` or `±DDMMSS±DDDMMSS` location string.
///
/// # Examples
/// ```
/// use suntime::geo::parse_location;
///
/// let nyc = parse_location("+404246-0740022").unwrap();
/// assert_eq!(nyc.latitude.degrees(), 40);
/// assert_eq!(nyc.longitude.degrees(), -74);
/// assert_eq!(nyc.longitude.seconds(), 22);
/// ```
pub fn parse_location(s: &str) -> Result<Location, LocationError> {
    let len = s.len();
    if len != SHORT_FORM_LEN && len != LONG_FORM_LEN {
        return Err(LocationError::InvalidLength(len));
    }

    let caps = iso6709_regex()
        .and_then(|re| re.captures(s))
        .ok_or(LocationError::Malformed)?;

    let field = |i: usize| -> Result<u32, LocationError> {
        caps.get(i)
            .map_or(Ok(0), |m| m.as_str().parse().map_err(|_| LocationError::Malformed))
    };
    let negative = |i: usize| caps.get(i).is_some_and(|m| m.as_str() == "-");

    let latitude = GeoCoordinate::from_parts(negative(1), field(2)?, field(3)?, field(4)?)?;
    let longitude = GeoCoordinate::from_parts(negative(5), field(6)?, field(7)?, field(8)?)?;

    Location::new(latitude, longitude)
}
