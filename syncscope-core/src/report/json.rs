use crate::analysis::AnalysisResult;
use crate::conf::AnalyzerConfig;
use crate::reading::TimestampReading;
use crate::reading::clock::to_rfc3339;
use crate::report::ReportMetadata;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub metadata: JsonMetadata<'a>,
    pub results: Option<&'a AnalysisResult>,
    pub raw_data: &'a [TimestampReading],
}

#[derive(Debug, Serialize)]
pub struct JsonMetadata<'a> {
    pub generation_time: String,
    pub session_id: String,
    pub session_start: String,
    pub analysis_duration: Option<f64>,
    pub total_samples: usize,
    pub window_size: usize,
    pub config: &'a AnalyzerConfig,
}

pub fn build_report<'a>(
    meta: &'a ReportMetadata,
    readings: &'a [TimestampReading],
    result: Option<&'a AnalysisResult>,
) -> JsonReport<'a> {
    JsonReport {
        metadata: JsonMetadata {
            generation_time: chrono::Utc::now().to_rfc3339(),
            session_id: meta.session_id.to_string(),
            session_start: to_rfc3339(meta.session_start),
            analysis_duration: result.map(|r| r.duration_seconds),
            total_samples: readings.iter().filter(|r| r.sync_offset.is_some()).count(),
            window_size: readings.len(),
            config: &meta.config,
        },
        results: result,
        raw_data: readings,
    }
}
