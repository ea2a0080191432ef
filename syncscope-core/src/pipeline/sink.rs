use crate::analysis::{AnalysisResult, PerformanceGrade};
use crate::report::summary_lines;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt;
use std::io::{self, IsTerminal, Write};

/// What caused an analysis pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PassReason {
    /// K new readings arrived.
    Count,
    /// Idle timeout elapsed.
    Idle,
    /// Last pass after the pipeline stopped.
    Final,
}

impl fmt::Display for PassReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PassReason::Count => "count",
            PassReason::Idle => "idle",
            PassReason::Final => "final",
        };
        f.write_str(s)
    }
}

/// Receives every analysis result the pipeline produces.
pub trait SummarySink: Send + Sync {
    fn publish(&self, result: &AnalysisResult, reason: PassReason);
}

/// Prints a summary block to stdout.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleSummary {
    colored: bool,
}

impl ConsoleSummary {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    /// Colors only when stdout is a terminal.
    pub fn detect() -> Self {
        Self::new(io::stdout().is_terminal())
    }

    pub fn render(&self, result: &AnalysisResult, reason: PassReason) -> String {
        let rule = "=".repeat(60);
        let title = match reason {
            PassReason::Final => "FINAL TIMESTAMP ANALYSIS",
            _ => "TIMESTAMP ANALYSIS SUMMARY",
        };

        let mut out = format!("\n{rule}\n{title}\n{rule}\n");
        for (label, value) in summary_lines(result) {
            let value = if label == "Performance" && self.colored {
                colorize_grade(result.performance_grade, &value)
            } else {
                value
            };
            out.push_str(&format!("{label}: {value}\n"));
        }
        out.push_str(&rule);
        out.push('\n');
        out
    }
}

fn colorize_grade(grade: PerformanceGrade, text: &str) -> String {
    match grade {
        PerformanceGrade::Excellent => text.green().bold().to_string(),
        PerformanceGrade::Good => text.green().to_string(),
        PerformanceGrade::Fair => text.yellow().to_string(),
        PerformanceGrade::Poor => text.red().bold().to_string(),
    }
}

impl SummarySink for ConsoleSummary {
    fn publish(&self, result: &AnalysisResult, reason: PassReason) {
        let mut stdout = io::stdout().lock();
        let _ = writeln!(stdout, "{}", self.render(result, reason));
        let _ = stdout.flush();
    }
}

/// Discards results; for runs that only want the final report.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuietSummary;

impl SummarySink for QuietSummary {
    fn publish(&self, _result: &AnalysisResult, _reason: PassReason) {}
}
