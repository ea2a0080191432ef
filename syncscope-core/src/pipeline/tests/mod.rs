mod lines_tests;
mod trigger_tests;

use crate::analysis::AnalysisResult;
use crate::pipeline::{PassReason, SummarySink};
use std::sync::Mutex;

/// Sink that remembers why each published pass ran.
#[derive(Debug, Default)]
pub(super) struct RecordingSink {
    pub passes: Mutex<Vec<(PassReason, usize)>>,
}

impl RecordingSink {
    pub fn reasons(&self) -> Vec<PassReason> {
        self.passes.lock().unwrap().iter().map(|(r, _)| *r).collect()
    }
}

impl SummarySink for RecordingSink {
    fn publish(&self, result: &AnalysisResult, reason: PassReason) {
        self.passes
            .lock()
            .unwrap()
            .push((reason, result.total_samples));
    }
}

/// `<rfc3339>: <line>` sync lines one second apart, offsets 100, 110, ...
pub(super) fn replay_lines(count: usize) -> String {
    let mut out = String::new();
    for i in 0..count {
        let ts = format!(
            "2026-10-16T{:02}:{:02}:{:02}Z",
            10 + i / 3600,
            (i / 60) % 60,
            i % 60
        );
        out.push_str(&format!(
            "{ts}: ptp4l[1.0]: sync message offset = {} sequence = {i} hardware timestamp\n",
            100 + i * 10
        ));
    }
    out
}
