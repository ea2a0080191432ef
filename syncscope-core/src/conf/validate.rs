use crate::conf::error::ConfigError;
use crate::conf::types::{AnalyzerConfig, TierCeiling};

/// Check every constraint and report all violations at once.
pub fn validate_config(cfg: &AnalyzerConfig) -> Result<(), ConfigError> {
    let mut errors = Vec::new();

    if cfg.window_capacity == 0 {
        errors.push("window_capacity must be greater than 0".to_string());
    }
    if cfg.trigger_count == 0 {
        errors.push("trigger_count must be greater than 0".to_string());
    }
    if cfg.min_samples == 0 {
        errors.push("min_samples must be greater than 0".to_string());
    }

    positive_seconds("idle_timeout_secs", cfg.idle_timeout_secs, &mut errors);
    positive_seconds("shutdown_grace_secs", cfg.shutdown_grace_secs, &mut errors);

    non_negative("jitter_threshold", cfg.jitter_threshold, &mut errors);
    non_negative("drift_threshold", cfg.drift_threshold, &mut errors);

    if !(0.0..=1.0).contains(&cfg.stability_threshold) {
        errors.push(format!(
            "stability_threshold must be within [0, 1], got {}",
            cfg.stability_threshold
        ));
    }

    let tiers = &cfg.performance_thresholds;
    for (name, tier) in [
        ("excellent", tiers.excellent),
        ("good", tiers.good),
        ("fair", tiers.fair),
    ] {
        non_negative(&format!("performance_thresholds.{name}.jitter"), tier.jitter, &mut errors);
        non_negative(&format!("performance_thresholds.{name}.drift"), tier.drift, &mut errors);
    }

    ordered("excellent", &tiers.excellent, "good", &tiers.good, &mut errors);
    ordered("good", &tiers.good, "fair", &tiers.fair, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::Validation { errors })
    }
}

fn positive_seconds(field: &str, value: f64, errors: &mut Vec<String>) {
    if !value.is_finite() || value <= 0.0 {
        errors.push(format!("{field} must be a positive number of seconds, got {value}"));
    }
}

fn non_negative(field: &str, value: f64, errors: &mut Vec<String>) {
    if !value.is_finite() || value < 0.0 {
        errors.push(format!("{field} must be finite and non-negative, got {value}"));
    }
}

fn ordered(
    better: &str,
    better_tier: &TierCeiling,
    worse: &str,
    worse_tier: &TierCeiling,
    errors: &mut Vec<String>,
) {
    if better_tier.jitter > worse_tier.jitter || better_tier.drift > worse_tier.drift {
        errors.push(format!(
            "performance_thresholds.{better} ceilings must not exceed performance_thresholds.{worse}"
        ));
    }
}
