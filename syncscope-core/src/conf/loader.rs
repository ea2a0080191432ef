use crate::conf::error::ConfigError;
use crate::conf::types::AnalyzerConfig;
use crate::conf::validate::validate_config;
use std::fs;
use std::path::Path;

/// Load and validate a configuration file.
///
/// `.json` files are read as JSON, anything else as TOML.
pub fn load_config(path: &Path) -> Result<AnalyzerConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;

    let cfg = parse_config(path, &text)?;
    validate_config(&cfg)?;

    tracing::debug!(path = %path.display(), "configuration loaded");

    Ok(cfg)
}

/// Defaults when no path is given, otherwise [`load_config`].
pub fn load_or_default(path: Option<&Path>) -> Result<AnalyzerConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => Ok(AnalyzerConfig::default()),
    }
}

pub(crate) fn parse_config(path: &Path, text: &str) -> Result<AnalyzerConfig, ConfigError> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(text).map_err(|e| ConfigError::ParseJson {
            path: path.to_path_buf(),
            source: e,
        })
    } else {
        toml::from_str(text).map_err(|e| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
