#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_config_is_valid() {
    assert!(NavConfig::default().validate().is_ok());
}

#[test]
fn default_values_match_tuned_constants() {
    let cfg = NavConfig::default();
    assert_eq!(cfg.edge_tolerance, 20.0);
    assert_eq!(cfg.wheel_burst_reset_ms, 300.0);
    assert_eq!(cfg.wheel_threshold, 120.0);
    assert_eq!(cfg.wheel_debounce_ms, 500.0);
    assert_eq!(cfg.swipe_threshold, 60.0);
    assert_eq!(cfg.swipe_debounce_ms, 300.0);
    assert_eq!(cfg.header_hide_delay_ms, 220.0);
}

#[test]
fn from_json_partial_override_keeps_defaults() {
    let cfg = NavConfig::from_json(r#"{ "wheel_threshold": 200 }"#).unwrap();
    assert_eq!(cfg.wheel_threshold, 200.0);
    assert_eq!(cfg.swipe_threshold, 60.0);
    assert_eq!(cfg.wheel_debounce_ms, 500.0);
}

#[test]
fn from_json_empty_object_is_default() {
    let cfg = NavConfig::from_json("{}").unwrap();
    assert_eq!(cfg, NavConfig::default());
}

#[test]
fn from_json_rejects_malformed_input() {
    let err = NavConfig::from_json("{ wheel_threshold: ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn validate_rejects_non_positive_threshold() {
    let cfg = NavConfig { swipe_threshold: 0.0, ..NavConfig::default() };
    let err = cfg.validate().unwrap_err();
    assert!(matches!(err, ConfigError::NotPositive { field: "swipe_threshold", .. }));
}

#[test]
fn validate_rejects_nan() {
    let cfg = NavConfig { wheel_threshold: f64::NAN, ..NavConfig::default() };
    assert!(cfg.validate().is_err());
}

#[test]
fn validate_allows_zero_header_offset() {
    let cfg = NavConfig { header_top_offset: 0.0, ..NavConfig::default() };
    assert!(cfg.validate().is_ok());
}

#[test]
fn validate_requires_burst_reset_shorter_than_debounce() {
    let cfg = NavConfig { wheel_burst_reset_ms: 500.0, wheel_debounce_ms: 500.0, ..NavConfig::default() };
    let err = cfg.validate().unwrap_err();
    assert!(matches!(err, ConfigError::WheelWindows { .. }));
    assert!(err.to_string().contains("wheel_burst_reset_ms"));
}

#[test]
fn from_json_runs_validation() {
    let err = NavConfig::from_json(r#"{ "wheel_burst_reset_ms": 900 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::WheelWindows { .. }));
}
