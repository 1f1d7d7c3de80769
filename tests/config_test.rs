// ABOUTME: Tests for environment-driven tracker configuration
// ABOUTME: Covers defaults, overrides, unparsable values, and validation failures
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(clippy::unwrap_used, missing_docs)]

mod common;

use std::env;
use std::path::PathBuf;

use common::approx;
use nutrilog::{config::TrackerConfig, errors::ErrorCode};
use serial_test::serial;

const VARS: [&str; 10] = [
    "NUTRILOG_API_BASE_URL",
    "NUTRILOG_PREFERENCES_PATH",
    "NUTRILOG_GOAL_CALORIES",
    "NUTRILOG_GOAL_PROTEIN",
    "NUTRILOG_GOAL_CARBS",
    "NUTRILOG_GOAL_FAT",
    "USDA_API_KEY",
    "USDA_API_BASE_URL",
    "USDA_CACHE_TTL_SECS",
    "USDA_SEARCH_ENABLED",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults() {
    clear_env();
    let config = TrackerConfig::from_env();

    assert_eq!(config.backend.base_url, "http://127.0.0.1:5000");
    assert!(config.preferences.path.ends_with("nutrilog/preferences.json"));
    assert!(approx(config.goals.calories, 2000.0));
    assert!(approx(config.goals.fat, 70.0));
    assert_eq!(config.usda.api_key, "DEMO_KEY");
    assert!(config.usda.enabled);
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_overrides_and_unparsable_values() {
    clear_env();
    env::set_var("NUTRILOG_API_BASE_URL", "https://log.example.com");
    env::set_var("NUTRILOG_PREFERENCES_PATH", "/tmp/nutrilog-test/prefs.json");
    env::set_var("NUTRILOG_GOAL_CALORIES", "1800");
    env::set_var("NUTRILOG_GOAL_PROTEIN", "lots");
    env::set_var("USDA_CACHE_TTL_SECS", "60");
    env::set_var("USDA_SEARCH_ENABLED", "false");

    let config = TrackerConfig::from_env();
    clear_env();

    assert_eq!(config.backend.base_url, "https://log.example.com");
    assert_eq!(
        config.preferences.path,
        PathBuf::from("/tmp/nutrilog-test/prefs.json")
    );
    assert!(approx(config.goals.calories, 1800.0));
    assert!(approx(config.goals.protein, 50.0));
    assert_eq!(config.usda.cache_ttl_secs, 60);
    assert!(!config.usda.enabled);
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_validation_failures() {
    clear_env();

    env::set_var("NUTRILOG_GOAL_CALORIES", "0");
    let err = TrackerConfig::from_env().validate().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    clear_env();

    env::set_var("NUTRILOG_GOAL_FAT", "-5");
    assert!(TrackerConfig::from_env().validate().is_err());
    clear_env();

    env::set_var("NUTRILOG_API_BASE_URL", "ftp://127.0.0.1");
    assert!(TrackerConfig::from_env().validate().is_err());
    clear_env();

    env::set_var("NUTRILOG_API_BASE_URL", "not a url");
    assert!(TrackerConfig::from_env().validate().is_err());
    clear_env();
}
