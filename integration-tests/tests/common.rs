use syncscope_core::conf::AnalyzerConfig;
use syncscope_core::pipeline::{InputSource, Pipeline, PipelineOptions, QuietSummary};
use std::sync::Arc;

/// Offsets 100, 200, ... 1000.
#[allow(dead_code)]
pub fn ramp() -> Vec<i64> {
    (1..=10).map(|i| i * 100).collect()
}

#[allow(dead_code)]
pub fn pipeline(cfg: AnalyzerConfig, source: InputSource, options: PipelineOptions) -> Pipeline {
    Pipeline::new(cfg, source, Arc::new(QuietSummary)).with_options(options)
}
