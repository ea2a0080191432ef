use crate::conf::{AnalyzerConfig, ConfigError, load_config};
use std::path::PathBuf;

pub fn check(path: PathBuf) -> anyhow::Result<()> {
    match load_config(&path) {
        Ok(cfg) => {
            for line in check_summary(&cfg) {
                println!("✔ {line}");
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("{err}");
            if let Some(hint) = config_error_hint(&err) {
                eprintln!();
                eprintln!("{hint}");
            }
            std::process::exit(1);
        }
    }
}

pub fn check_summary(cfg: &AnalyzerConfig) -> Vec<String> {
    let tiers = &cfg.performance_thresholds;
    vec![
        "Config loaded successfully".to_string(),
        format!(
            "window of {} readings, analysis every {} readings or {}s idle",
            cfg.window_capacity, cfg.trigger_count, cfg.idle_timeout_secs
        ),
        format!("at least {} sync samples per result", cfg.min_samples),
        format!(
            "warnings above {} ns jitter, {} ns/s drift, below {:.0}% stability",
            cfg.jitter_threshold,
            cfg.drift_threshold,
            cfg.stability_threshold * 100.0
        ),
        format!(
            "grades: excellent ≤ {}/{}, good ≤ {}/{}, fair ≤ {}/{} (ns / ns/s)",
            tiers.excellent.jitter,
            tiers.excellent.drift,
            tiers.good.jitter,
            tiers.good.drift,
            tiers.fair.jitter,
            tiers.fair.drift
        ),
    ]
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::ParseJson { .. } => Some(
            "JSON configs must be a single object.\n\
             \n\
             Example:\n\
             \n\
             { \"jitter_threshold\": 1000, \"performance_thresholds\": { \"good\": { \"jitter\": 1000, \"drift\": 100 } } }",
        ),

        ConfigError::ParseToml { .. } => Some(
            "Grade ceilings live in their own tables.\n\
             \n\
             Example:\n\
             \n\
             jitter_threshold = 1000\n\
             \n\
             [performance_thresholds.good]\n\
             jitter = 1000\n\
             drift  = 100",
        ),

        ConfigError::Validation { .. } => Some(
            "Grade ceilings must not decrease from excellent to good to fair,\n\
             and counts and timeouts must be greater than zero.",
        ),

        _ => None,
    }
}
