use chrono::{Datelike, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use suntime::constants::STANDARD_ZENITH;
use suntime::geo::solar::{DayRiseSet, Event, SolarEvent, day_rise_set, solar_event_time};
use suntime::geo::{GeoCoordinate, Location, parse_location};

/// Latitudes where the sun rises and sets every day of the year
fn temperate_latitude_strategy() -> impl Strategy<Value = f64> {
    -60.0..=60.0
}

/// Generate valid latitude values
fn latitude_strategy() -> impl Strategy<Value = f64> {
    -90.0..=90.0
}

/// Generate valid longitude values
fn longitude_strategy() -> impl Strategy<Value = f64> {
    -180.0..=180.0
}

fn day_strategy() -> impl Strategy<Value = u32> {
    0u32..=365
}

fn event_strategy() -> impl Strategy<Value = Event> {
    prop_oneof![Just(Event::Sunrise), Just(Event::Sunset)]
}

/// Dates covering leap and common years
fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1990i32..2100, 1u32..=366).prop_filter_map("day beyond year end", |(year, ordinal)| {
        NaiveDate::from_yo_opt(year, ordinal)
    })
}

fn coordinate_strategy(max_degrees: u32) -> impl Strategy<Value = GeoCoordinate> {
    (any::<bool>(), 0..max_degrees, 0u32..60, 0u32..60).prop_map(|(negative, d, m, s)| {
        GeoCoordinate::from_parts(negative, d, m, s).unwrap()
    })
}

proptest! {
    /// Every computed time is a valid time of day
    #[test]
    fn test_event_time_in_range(
        event in event_strategy(),
        day in day_strategy(),
        lat in latitude_strategy(),
        lon in longitude_strategy()
    ) {
        if let SolarEvent::Occurs { hour, minute } =
            solar_event_time(event, day, lat, lon, STANDARD_ZENITH)
        {
            prop_assert!(hour <= 23, "hour {} out of range", hour);
            prop_assert!(minute <= 59, "minute {} out of range", minute);
        }
    }

    /// Same inputs, same answer
    #[test]
    fn test_event_time_deterministic(
        event in event_strategy(),
        day in day_strategy(),
        lat in latitude_strategy(),
        lon in longitude_strategy()
    ) {
        prop_assert_eq!(
            solar_event_time(event, day, lat, lon, STANDARD_ZENITH),
            solar_event_time(event, day, lat, lon, STANDARD_ZENITH)
        );
    }

    /// Below the polar circles both events always occur
    #[test]
    fn test_temperate_latitudes_always_have_events(
        event in event_strategy(),
        day in day_strategy(),
        lat in temperate_latitude_strategy(),
        lon in longitude_strategy()
    ) {
        let result = solar_event_time(event, day, lat, lon, STANDARD_ZENITH);
        let occurred = matches!(result, SolarEvent::Occurs { .. });
        prop_assert!(occurred, "no event at lat {} on day {}: {:?}", lat, day, result);
    }

    /// Sunrise and sunset never report opposite polar sentinels on one day
    #[test]
    fn test_polar_sentinels_agree(
        day in day_strategy(),
        lat in prop_oneof![70.0..=89.9, -89.9..=-70.0],
        lon in longitude_strategy()
    ) {
        let rise = solar_event_time(Event::Sunrise, day, lat, lon, STANDARD_ZENITH);
        let set = solar_event_time(Event::Sunset, day, lat, lon, STANDARD_ZENITH);
        if rise == SolarEvent::NeverRises {
            prop_assert_ne!(set, SolarEvent::NeverSets);
        }
        if rise == SolarEvent::NeverSets {
            prop_assert_ne!(set, SolarEvent::NeverRises);
        }
    }

    /// Results land on the UTC date of the input instant, at whole minutes
    #[test]
    fn test_day_rise_set_stays_on_date(
        date in date_strategy(),
        seconds_into_day in 0u32..86_400,
        latitude in coordinate_strategy(60),
        longitude in coordinate_strategy(180)
    ) {
        let location = Location::new(latitude, longitude).unwrap();
        let instant = Utc
            .from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap())
            + chrono::Duration::seconds(i64::from(seconds_into_day));

        match day_rise_set(instant, &location) {
            DayRiseSet::Success { sunrise, sunset } => {
                prop_assert_eq!(sunrise.date_naive(), date);
                prop_assert_eq!(sunset.date_naive(), date);
                prop_assert_eq!(sunrise.timestamp() % 60, 0);
                prop_assert_eq!(sunset.timestamp() % 60, 0);
            }
            DayRiseSet::NoEvent => prop_assert!(false, "no event below 60° at {}", location),
        }
    }

    /// DayRiseSet agrees with the raw calculation at the standard zenith
    #[test]
    fn test_day_rise_set_matches_solar_event_time(
        date in date_strategy(),
        latitude in coordinate_strategy(60),
        longitude in coordinate_strategy(180)
    ) {
        let location = Location::new(latitude, longitude).unwrap();
        let (lat, lon) = location.to_decimal_degrees();
        let instant = Utc.from_utc_datetime(&date.and_hms_opt(12, 0, 0).unwrap());
        let day = date.ordinal0();

        let rise = solar_event_time(Event::Sunrise, day, lat, lon, STANDARD_ZENITH).time();
        let set = solar_event_time(Event::Sunset, day, lat, lon, STANDARD_ZENITH).time();

        match day_rise_set(instant, &location) {
            DayRiseSet::Success { sunrise, sunset } => {
                prop_assert_eq!(Some(sunrise.time()), rise);
                prop_assert_eq!(Some(sunset.time()), set);
            }
            DayRiseSet::NoEvent => prop_assert!(false, "no event below 60° at {}", location),
        }
    }

    /// Formatting a parsed location back into fixed-width form parses to the same value
    #[test]
    fn test_long_form_parsing_recovers_fields(
        lat_neg in any::<bool>(), lat_d in 0u32..90, lat_m in 0u32..60, lat_s in 0u32..60,
        lon_neg in any::<bool>(), lon_d in 0u32..180, lon_m in 0u32..60, lon_s in 0u32..60
    ) {
        let text = format!(
            "{}{:02}{:02}{:02}{}{:03}{:02}{:02}",
            if lat_neg { '-' } else { '+' }, lat_d, lat_m, lat_s,
            if lon_neg { '-' } else { '+' }, lon_d, lon_m, lon_s
        );
        let location = parse_location(&text).unwrap();
        prop_assert_eq!(location.latitude.is_negative(), lat_neg);
        prop_assert_eq!(location.latitude.degrees().unsigned_abs(), lat_d);
        prop_assert_eq!(location.latitude.minutes(), lat_m);
        prop_assert_eq!(location.latitude.seconds(), lat_s);
        prop_assert_eq!(location.longitude.is_negative(), lon_neg);
        prop_assert_eq!(location.longitude.degrees().unsigned_abs(), lon_d);
        prop_assert_eq!(location.longitude.minutes(), lon_m);
        prop_assert_eq!(location.longitude.seconds(), lon_s);
    }

    /// Only 11 and 15 character strings can parse
    #[test]
    fn test_other_lengths_rejected(text in "[-+0-9]{0,20}") {
        if text.len() != 11 && text.len() != 15 {
            prop_assert!(parse_location(&text).is_err());
        }
    }
}

#[test]
fn test_equinox_day_length_at_equator() {
    for lon in [-150.0, -75.0, 0.0, 75.0, 150.0] {
        for day in [79u32, 265] {
            let rise = solar_event_time(Event::Sunrise, day, 0.0, lon, STANDARD_ZENITH).time();
            let set = solar_event_time(Event::Sunset, day, 0.0, lon, STANDARD_ZENITH).time();
            let (Some(rise), Some(set)) = (rise, set) else {
                panic!("equator must have sunrise and sunset");
            };
            let minutes = (set - rise).num_minutes().rem_euclid(24 * 60);
            assert!(
                (715..=730).contains(&minutes),
                "day length {} min at lon {} on day {}",
                minutes,
                lon,
                day
            );
        }
    }
}

#[test]
fn test_polar_sentinels_at_solstices() {
    // December solstice: north pole region dark, south pole region light
    assert_eq!(
        solar_event_time(Event::Sunrise, 354, 89.0, 0.0, STANDARD_ZENITH),
        SolarEvent::NeverRises
    );
    assert_ne!(
        solar_event_time(Event::Sunrise, 354, -89.0, 0.0, STANDARD_ZENITH),
        SolarEvent::NeverRises
    );
    // June solstice: the other way round
    assert_eq!(
        solar_event_time(Event::Sunrise, 171, -89.0, 0.0, STANDARD_ZENITH),
        SolarEvent::NeverRises
    );
    assert_ne!(
        solar_event_time(Event::Sunrise, 171, 89.0, 0.0, STANDARD_ZENITH),
        SolarEvent::NeverRises
    );
}
