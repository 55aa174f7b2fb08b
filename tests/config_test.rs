//! Integration tests for Settings layered loading.
//!
//! These tests pass the global file explicitly, so no XDG config on the
//! host is consulted.

use std::fs;

use tempfile::TempDir;

use evenodd::application::ApplicationError;
use evenodd::config::Settings;
use evenodd::domain::SortStrategy;

#[test]
fn given_no_files_when_load_then_returns_defaults() {
    let settings = Settings::load_from(None, None).expect("load settings");
    assert_eq!(settings, Settings::default());
}

#[test]
fn given_global_file_when_load_then_applies_values() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let global = dir.path().join("evenodd.toml");
    fs::write(&global, "seed = 12\nsort = \"builtin\"\n").unwrap();

    // Act
    let settings = Settings::load_from(Some(&global), None).expect("load settings");

    // Assert
    assert_eq!(settings.seed, Some(12));
    assert_eq!(settings.sort, SortStrategy::Builtin);
    assert_eq!(settings.max_count, None);
}

#[test]
fn given_global_and_explicit_file_when_load_then_explicit_file_wins() {
    let dir = TempDir::new().unwrap();
    let global = dir.path().join("global.toml");
    let local = dir.path().join("local.toml");
    fs::write(&global, "seed = 1\nmax_count = 500\n").unwrap();
    fs::write(&local, "seed = 2\n").unwrap();

    let settings = Settings::load_from(Some(&global), Some(&local)).expect("load settings");

    assert_eq!(settings.seed, Some(2), "explicit file overrides global seed");
    assert_eq!(settings.max_count, Some(500), "unset keys inherit from global");
    assert_eq!(settings.sort, SortStrategy::Bubble);
}

#[test]
fn given_missing_explicit_file_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = Settings::load_from(None, Some(&missing)).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }));
}

#[test]
fn given_malformed_file_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "sort = \"quick\"\n").unwrap();

    let err = Settings::load_from(None, Some(&path)).unwrap_err();

    assert!(err.to_string().starts_with("config error: parse"));
}

#[test]
fn given_unknown_key_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("typo.toml");
    fs::write(&path, "sead = 3\n").unwrap();

    let err = Settings::load_from(None, Some(&path)).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }));
}

#[test]
fn given_settings_when_rendered_then_round_trips_through_toml() {
    let settings = Settings {
        seed: Some(5),
        sort: SortStrategy::Builtin,
        max_count: Some(1000),
    };

    let rendered = settings.to_toml().unwrap();
    let parsed: Settings = toml::from_str(&rendered).unwrap();

    assert_eq!(parsed, settings);
}
