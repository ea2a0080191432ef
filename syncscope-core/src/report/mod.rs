//! Durable end-of-session reports.
//!
//! Given a path prefix, the sink writes:
//! - `<prefix>.json`: metadata, final result and every retained reading
//! - `<prefix>.csv`: one row per retained reading
//! - `<prefix>.txt`: human-readable summary
//! - `<prefix>_series.csv`: plot series, only when requested
//!
//! Each file goes through a temp file + rename, so a failed write never
//! leaves a partial file behind.

mod atomic;
mod csv;
mod error;
mod json;
mod series;
mod text;

#[cfg(test)]
mod tests;

pub use atomic::write_atomic;
pub use csv::{CSV_HEADER, render_csv};
pub use error::ReportError;
pub use series::{SERIES_HEADER, render_series};
pub use text::{render_text, summary_lines};

use crate::analysis::{AnalysisResult, PlotSeries};
use crate::conf::AnalyzerConfig;
use crate::reading::TimestampReading;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Session facts recorded alongside the results.
#[derive(Debug, Clone)]
pub struct ReportMetadata {
    pub session_id: Uuid,
    /// Seconds since the Unix epoch.
    pub session_start: f64,
    pub config: AnalyzerConfig,
}

impl ReportMetadata {
    pub fn new(session_start: f64, config: AnalyzerConfig) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            session_start,
            config,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WrittenReports {
    pub json: PathBuf,
    pub csv: PathBuf,
    pub text: PathBuf,
    pub series: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct ReportSink {
    prefix: PathBuf,
    with_series: bool,
}

impl ReportSink {
    pub fn new(prefix: impl Into<PathBuf>) -> Self {
        Self {
            prefix: prefix.into(),
            with_series: false,
        }
    }

    pub fn with_series(mut self, enabled: bool) -> Self {
        self.with_series = enabled;
        self
    }

    pub fn prefix(&self) -> &Path {
        &self.prefix
    }

    /// Write every report for the final window and result.
    pub fn write(
        &self,
        meta: &ReportMetadata,
        readings: &[TimestampReading],
        result: Option<&AnalysisResult>,
    ) -> Result<WrittenReports, ReportError> {
        let json_path = self.path_with(".json");
        let report = json::build_report(meta, readings, result);
        let body = serde_json::to_vec_pretty(&report).map_err(|e| ReportError::Serialize {
            path: json_path.clone(),
            source: e,
        })?;
        write_atomic(&json_path, &body)?;

        let csv_path = self.path_with(".csv");
        write_atomic(&csv_path, render_csv(readings).as_bytes())?;

        let text_path = self.path_with(".txt");
        write_atomic(
            &text_path,
            render_text(meta, readings.len(), result).as_bytes(),
        )?;

        let series = if self.with_series {
            let path = self.path_with("_series.csv");
            let series = PlotSeries::from_readings(readings);
            write_atomic(&path, render_series(&series).as_bytes())?;
            Some(path)
        } else {
            None
        };

        tracing::info!(
            json = %json_path.display(),
            csv = %csv_path.display(),
            text = %text_path.display(),
            readings = readings.len(),
            "reports written"
        );

        Ok(WrittenReports {
            json: json_path,
            csv: csv_path,
            text: text_path,
            series,
        })
    }

    fn path_with(&self, suffix: &str) -> PathBuf {
        let mut name = OsString::from(self.prefix.as_os_str());
        name.push(suffix);
        PathBuf::from(name)
    }
}
