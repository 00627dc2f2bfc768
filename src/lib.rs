//! # Suntime
//!
//! Sunrise and sunset times for locations written in ISO 6709 form, computed
//! with the Sun Rise/Set Algorithm from the Almanac for Computers (1990).
//!
//! ## Architecture
//!
//! - **args**: Command-line parsing into a [`args::CliAction`]
//! - **config**: Optional `suntime.toml` with defaults and location aliases
//! - **constants**: Algorithm coefficients, the standard zenith, exit codes
//! - **geo**: DMS coordinates, ISO 6709 parsing, and the solar calculation in
//!   [`geo::solar`]
//! - **logger**: Level-tagged diagnostics on stderr
//! - **report**: Per-location evaluation and output line formatting

pub mod args;
pub mod config;
pub mod constants;
pub mod geo;
pub mod logger;
pub mod report;

// Re-export important types for easier access
pub use config::Config;
pub use geo::solar::{DayRiseSet, Event, SolarEvent, day_rise_set, solar_event_time};
pub use geo::{GeoCoordinate, Location, LocationError, parse_location};
pub use logger::{Log, LogLevel};
