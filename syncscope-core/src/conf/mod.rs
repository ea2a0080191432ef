mod error;
mod loader;
mod types;
mod validate;


pub use error::ConfigError;
pub use loader::{load_config, load_or_default};
pub use types::{AnalyzerConfig, GradeThresholds, TierCeiling};
pub use validate::validate_config;
