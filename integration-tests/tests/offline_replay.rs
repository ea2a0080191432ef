use integration_tests::harness::FakeDaemon;
use pretty_assertions::assert_eq;
use std::fs;
use syncscope_core::analysis::PerformanceGrade;
use syncscope_core::conf::AnalyzerConfig;
use syncscope_core::pipeline::{InputSource, PipelineError, PipelineOptions};

mod common;

#[tokio::test(flavor = "multi_thread")]
async fn replay_of_one_second_ramp() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("ramp.log");
    let text: String = common::ramp()
        .iter()
        .enumerate()
        .map(|(i, offset)| {
            format!("2026-10-16T10:00:{i:02}Z: ptp4l: sync message offset = {offset}\n")
        })
        .collect();
    fs::write(&log, text).unwrap();

    // Act
    let source = InputSource::open(&log).await.unwrap();
    let outcome = common::pipeline(AnalyzerConfig::default(), source, PipelineOptions::default())
        .run()
        .await
        .unwrap();

    // Assert
    let result = outcome.final_result.unwrap();
    assert_eq!(result.total_samples, 10);
    assert_eq!(result.mean_sync_offset, 550.0);
    assert_eq!(result.duration_seconds, 9.0);
    assert!((result.drift_rate - 100.0).abs() < 1e-9);
    assert_eq!(result.performance_grade, PerformanceGrade::Good);
}

#[tokio::test(flavor = "multi_thread")]
async fn raw_log_from_a_live_run_replays_identically() {
    let daemon = FakeDaemon::new()
        .sync_offsets(&[120, -80, 40, 15, -35, 90, 0, 60, -20, 10, 30, -5])
        .stdout("ptp4l: port 1: new foreign master");
    let raw = daemon.dir().join("raw.log");

    let live = common::pipeline(
        AnalyzerConfig::default(),
        InputSource::Daemon(daemon.command()),
        PipelineOptions {
            raw_log: Some(raw.clone()),
            ..PipelineOptions::default()
        },
    )
    .run()
    .await
    .unwrap();

    let replayed = common::pipeline(
        AnalyzerConfig::default(),
        InputSource::open(&raw).await.unwrap(),
        PipelineOptions::default(),
    )
    .run()
    .await
    .unwrap();

    assert_eq!(replayed.stats.lines, 13);
    assert_eq!(replayed.readings.len(), live.readings.len());

    let live = live.final_result.unwrap();
    let replayed = replayed.final_result.unwrap();
    assert_eq!(replayed.total_samples, live.total_samples);
    assert_eq!(replayed.mean_sync_offset, live.mean_sync_offset);
    assert_eq!(replayed.sync_jitter, live.sync_jitter);
}

#[tokio::test]
async fn missing_input_file_is_an_input_error() {
    let err = match InputSource::open("/nonexistent/ptp.log".as_ref()).await {
        Ok(_) => panic!("opened a missing file"),
        Err(e) => e,
    };

    assert!(matches!(err, PipelineError::Input { .. }));
}
