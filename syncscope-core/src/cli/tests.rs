use crate::cli::conf::{check_summary, config_error_hint};
use crate::cli::{Overrides, resolve_config};
use crate::conf::{AnalyzerConfig, ConfigError};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

#[test]
fn flags_override_the_config_file() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("syncscope.toml");
    fs::write(&path, "trigger_count = 50\nwindow_capacity = 2000\n").unwrap();

    // Act
    let cfg = resolve_config(
        Some(path.as_path()),
        Overrides {
            window: Some(300),
            idle_timeout: Some(2.5),
            ..Overrides::default()
        },
    )
    .unwrap();

    // Assert
    assert_eq!(cfg.trigger_count, 50);
    assert_eq!(cfg.window_capacity, 300);
    assert_eq!(cfg.idle_timeout_secs, 2.5);
}

#[test]
fn invalid_override_is_rejected() {
    let err = resolve_config(
        None,
        Overrides {
            trigger_count: Some(0),
            ..Overrides::default()
        },
    )
    .unwrap_err();

    assert!(err.downcast_ref::<ConfigError>().is_some());
}

#[test]
fn check_summary_mentions_window_and_grades() {
    let lines = check_summary(&AnalyzerConfig::default());

    assert_eq!(lines[0], "Config loaded successfully");
    assert!(lines[1].contains("10000 readings"));
    assert!(lines[4].contains("excellent ≤ 500/50"));
}

#[test]
fn validation_errors_carry_a_hint() {
    let err = ConfigError::Validation {
        errors: vec!["trigger_count must be greater than 0".to_string()],
    };

    assert!(config_error_hint(&err).is_some());
}
