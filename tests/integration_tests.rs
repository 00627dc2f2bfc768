use chrono::{TimeZone, Utc};
use serial_test::serial;
use std::fs;
use tempfile::tempdir;

use suntime::constants::CONFIG_PATH_ENV;
use suntime::report::{self, ReportError, TimeBase};
use suntime::{Config, LocationError};

fn create_test_config_file(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("suntime").join("suntime.toml");

    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, content).unwrap();

    (temp_dir, config_path)
}

fn point_config_env_at(path: &std::path::Path) {
    // SAFETY: tests touching the environment are serialized with #[serial]
    unsafe { std::env::set_var(CONFIG_PATH_ENV, path) };
}

fn clear_config_env() {
    // SAFETY: tests touching the environment are serialized with #[serial]
    unsafe { std::env::remove_var(CONFIG_PATH_ENV) };
}

#[test]
#[serial]
fn test_integration_load_from_env_path() {
    let (_temp_dir, config_path) = create_test_config_file(
        r#"
utc = true

[locations]
nyc = "+404246-0740022"
"#,
    );
    point_config_env_at(&config_path);

    assert_eq!(Config::get_config_path().unwrap(), config_path);
    let config = Config::load().unwrap();
    assert!(config.utc);
    assert!(!config.debug);
    assert_eq!(config.locations["nyc"], "+404246-0740022");

    clear_config_env();
}

#[test]
#[serial]
fn test_integration_missing_file_gives_defaults() {
    let temp_dir = tempdir().unwrap();
    point_config_env_at(&temp_dir.path().join("nowhere.toml"));

    assert_eq!(Config::load().unwrap(), Config::default());
    assert_eq!(Config::load_or_default(), Config::default());

    clear_config_env();
}

#[test]
#[serial]
fn test_integration_broken_file_falls_back_to_defaults() {
    let (_temp_dir, config_path) = create_test_config_file(
        r#"
debug = true
[locations]
home = "somewhere nice"
"#,
    );
    point_config_env_at(&config_path);

    assert!(Config::load().is_err());
    // The bad alias poisons the whole file, including debug = true
    assert_eq!(Config::load_or_default(), Config::default());

    clear_config_env();
}

#[test]
#[serial]
fn test_integration_aliases_through_report() {
    let (_temp_dir, config_path) = create_test_config_file(
        r#"
[locations]
nyc = "+404246-0740022"
sydney = "-3352+15113"
"#,
    );
    point_config_env_at(&config_path);
    let config = Config::load().unwrap();
    clear_config_env();

    let instant = Utc.with_ymd_and_hms(2025, 1, 1, 6, 0, 0).unwrap();

    assert_eq!(
        report::evaluate("nyc", instant, &config, TimeBase::Utc),
        Ok("2025-01-01\t12:20\t21:39".to_string())
    );
    assert_eq!(
        report::evaluate("sydney", instant, &config, TimeBase::Utc),
        Ok("2025-01-01\t18:47\t09:09".to_string())
    );
    // Raw coordinates still work next to aliases
    assert_eq!(
        report::evaluate("+404246-0740022", instant, &config, TimeBase::Utc),
        Ok("2025-01-01\t12:20\t21:39".to_string())
    );
    assert_eq!(
        report::evaluate("london", instant, &config, TimeBase::Utc),
        Err(ReportError::BadCoords(LocationError::InvalidLength(6)))
    );
}

#[test]
fn test_integration_polar_winter_and_summer() {
    let config = Config::default();
    let december = Utc.with_ymd_and_hms(2025, 12, 21, 12, 0, 0).unwrap();
    let june = Utc.with_ymd_and_hms(2025, 6, 21, 12, 0, 0).unwrap();

    // Longyearbyen, Svalbard
    for instant in [december, june] {
        assert_eq!(
            report::evaluate("+7813+01539", instant, &config, TimeBase::Utc),
            Err(ReportError::NoSunEvent)
        );
    }

    // Reykjavik sits just below the Arctic circle
    assert!(report::evaluate("+6408-02156", december, &config, TimeBase::Utc).is_ok());
    assert!(report::evaluate("+6408-02156", june, &config, TimeBase::Utc).is_ok());
}
