//! Application constants for suntime.
//!
//! This module contains the coefficients of the Almanac for Computers (1990)
//! sunrise/sunset algorithm, the standard solar zenith, configuration file
//! names, and process exit codes.

// ═══ Solar Zenith ═══
// Zenith angle of the sun's centre at the moment of sunrise or sunset

/// Official zenith, 90°50': 34' of atmospheric refraction plus 16' of solar radius.
pub const STANDARD_ZENITH: f64 = 90.0 + (50.0 / 60.0);

// ═══ Almanac Sunrise/Sunset Coefficients ═══
// Low-precision solar ephemeris from the Almanac for Computers (1990).
// Published values, used unrounded.

pub const HOURS_PER_DAY: f64 = 24.0;
pub const DEGREES_PER_HOUR: f64 = 15.0; // 360° / 24h
pub const SUNRISE_APPROX_HOUR: f64 = 6.0; // approximate local time of sunrise
pub const SUNSET_APPROX_HOUR: f64 = 18.0; // approximate local time of sunset

pub const MEAN_ANOMALY_RATE: f64 = 0.9856; // degrees per day
pub const MEAN_ANOMALY_OFFSET: f64 = 3.289; // degrees

pub const EQUATION_OF_CENTER_1: f64 = 1.916; // coefficient of sin(M)
pub const EQUATION_OF_CENTER_2: f64 = 0.020; // coefficient of sin(2M)
pub const PERIHELION_LONGITUDE: f64 = 282.634; // degrees

pub const COS_OBLIQUITY: f64 = 0.91764; // cos(23.44°), scales tan(L) to right ascension
pub const SIN_OBLIQUITY: f64 = 0.39782; // sin(23.44°), scales sin(L) to declination

pub const SIDEREAL_RATE: f64 = 0.06571; // hours per day
pub const LOCAL_MEAN_TIME_OFFSET: f64 = 6.622; // hours

// ═══ Configuration ═══

pub const CONFIG_DIR_NAME: &str = "suntime";
pub const CONFIG_FILE_NAME: &str = "suntime.toml";
pub const CONFIG_PATH_ENV: &str = "SUNTIME_CONFIG"; // explicit config file override

// ═══ Output Formatting ═══

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

// ═══ Exit Codes ═══

pub const EXIT_FAILURE: i32 = 1; // usage errors
