//! Monitoring session pipeline.
//!
//! ```text
//! daemon stdout/stderr ─► reader ─► window ─► scheduler ─► analysis ─► summary sink
//!                           │                    ▲
//!                           └──── trigger ───────┘
//! ```
//!
//! The reader appends parsed readings and fires the trigger every
//! `trigger_count` readings; the scheduler also wakes on an idle timeout.
//! At most one analysis pass runs at a time and triggers that arrive while
//! one is running are dropped. On stop the daemon is terminated, a final
//! pass runs, and reports are flushed once.

mod context;
pub mod daemon;
mod echo;
mod error;
mod lines;
mod raw_log;
mod reader;
mod runner;
mod scheduler;
mod sink;
mod state;
mod stop;
mod trigger;
mod view;

#[cfg(test)]
mod tests;

pub use daemon::{DaemonCommand, DaemonExit};
pub use echo::LineEcho;
pub use error::PipelineError;
pub use lines::LineStream;
pub use raw_log::RawLineLog;
pub use reader::ReaderStats;
pub use runner::{InputSource, Pipeline, PipelineOptions, PipelineOutcome, PipelineStats};
pub use sink::{ConsoleSummary, PassReason, QuietSummary, SummarySink};
pub use state::{PipelineState, StateError, StateMachine};
pub use stop::{StopHandle, StopReason, StopSignal};
pub use trigger::{AnalysisTrigger, InFlightGuard, TriggerStats};
pub use view::AnalyzerView;
