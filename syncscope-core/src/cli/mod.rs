pub mod analyze;
pub mod conf;
pub mod run;
mod session;

#[cfg(test)]
mod tests;

use crate::conf::{AnalyzerConfig, load_or_default, validate_config};
use anyhow::{Context, Result};
use std::path::Path;
use tokio::runtime::{Builder, Runtime};

/// Flag overrides applied on top of the config file.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Overrides {
    pub trigger_count: Option<usize>,
    pub window: Option<usize>,
    pub idle_timeout: Option<f64>,
}

pub(crate) fn resolve_config(path: Option<&Path>, overrides: Overrides) -> Result<AnalyzerConfig> {
    let mut cfg = load_or_default(path)?;

    if let Some(k) = overrides.trigger_count {
        cfg.trigger_count = k;
    }
    if let Some(n) = overrides.window {
        cfg.window_capacity = n;
    }
    if let Some(secs) = overrides.idle_timeout {
        cfg.idle_timeout_secs = secs;
    }

    validate_config(&cfg).context("invalid command line overrides")?;
    Ok(cfg)
}

pub(crate) fn build_runtime() -> Result<Runtime> {
    Builder::new_multi_thread()
        .enable_all()
        .thread_name("syncscope")
        .build()
        .context("failed to build Tokio runtime")
}
