use crate::analysis::AnalysisResult;
use crate::conf::AnalyzerConfig;
use crate::pipeline::sink::SummarySink;
use crate::pipeline::stop::StopHandle;
use crate::pipeline::trigger::AnalysisTrigger;
use crate::reading::ReadingParser;
use crate::window::ReadingWindow;
use arc_swap::ArcSwapOption;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;

/// State shared by the line reader and the analysis scheduler.
///
/// Only the window and the trigger are mutated concurrently; everything
/// else is read-only for the life of the pipeline.
pub(crate) struct PipelineContext {
    pub config: AnalyzerConfig,
    pub window: Arc<ReadingWindow>,
    pub trigger: AnalysisTrigger,
    pub latest: Arc<ArcSwapOption<AnalysisResult>>,
    pub sink: Arc<dyn SummarySink>,
    pub parser: ReadingParser,
    pub stop: StopHandle,
    pub passes: AtomicU64,
}
