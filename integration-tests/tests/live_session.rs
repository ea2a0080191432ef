use integration_tests::harness::FakeDaemon;
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::fs;
use std::time::Duration;
use syncscope_core::conf::AnalyzerConfig;
use syncscope_core::pipeline::{InputSource, PipelineError, PipelineOptions, StopReason};
use syncscope_core::report::ReportSink;

mod common;

#[tokio::test(flavor = "multi_thread")]
async fn ramp_daemon_produces_reports() {
    // Arrange
    let mut daemon = FakeDaemon::new().stdout("ptp4l[0.000]: selected best master clock");
    for offset in common::ramp() {
        daemon = daemon
            .stdout(&format!("ptp4l: sync message offset = {offset}"))
            .sleep(0.05);
    }
    let prefix = daemon.dir().join("session");
    let options = PipelineOptions {
        reports: Some(ReportSink::new(&prefix).with_series(true)),
        ..PipelineOptions::default()
    };
    let pipeline = common::pipeline(
        AnalyzerConfig::default(),
        InputSource::Daemon(daemon.command()),
        options,
    );

    // Act
    let outcome = pipeline.run().await.unwrap();

    // Assert
    assert_eq!(outcome.stop_reason, StopReason::EndOfStream);
    assert_eq!(outcome.stats.lines, 11);

    let result = outcome.final_result.as_ref().unwrap();
    assert_eq!(result.total_samples, 10);
    assert_eq!(result.mean_sync_offset, 550.0);
    assert!(result.drift_rate > 0.0);

    let reports = outcome.reports.unwrap();
    let json: Value = serde_json::from_str(&fs::read_to_string(&reports.json).unwrap()).unwrap();
    assert_eq!(json["metadata"]["total_samples"], 10);
    assert_eq!(json["results"]["total_samples"], 10);

    let csv = fs::read_to_string(&reports.csv).unwrap();
    assert_eq!(csv.lines().count(), 11);

    let series = fs::read_to_string(reports.series.unwrap()).unwrap();
    assert_eq!(series.lines().count(), 11);
}

#[tokio::test(flavor = "multi_thread")]
async fn crash_still_flushes_reports() {
    let daemon = FakeDaemon::new()
        .sync_offsets(&common::ramp())
        .stderr("ptp4l: fault detected")
        .exit(3);
    let prefix = daemon.dir().join("crash");
    let options = PipelineOptions {
        reports: Some(ReportSink::new(&prefix)),
        ..PipelineOptions::default()
    };

    let err = common::pipeline(
        AnalyzerConfig::default(),
        InputSource::Daemon(daemon.command()),
        options,
    )
    .run()
    .await
    .unwrap_err();

    assert!(matches!(err, PipelineError::DaemonCrashed { .. }), "{err}");
    let json: Value =
        serde_json::from_str(&fs::read_to_string(daemon.dir().join("crash.json")).unwrap()).unwrap();
    assert_eq!(json["raw_data"].as_array().unwrap().len(), 10);
}

#[tokio::test(flavor = "multi_thread")]
async fn duration_cap_stops_a_hanging_daemon() {
    let daemon = FakeDaemon::new().sync_offsets(&[5, 6, 7]).hang();
    let options = PipelineOptions {
        max_duration: Some(Duration::from_millis(300)),
        ..PipelineOptions::default()
    };

    let outcome = common::pipeline(
        AnalyzerConfig::default(),
        InputSource::Daemon(daemon.command()),
        options,
    )
    .run()
    .await
    .unwrap();

    assert_eq!(outcome.stop_reason, StopReason::DurationElapsed);
    assert_eq!(outcome.stats.readings, 3);
    assert!(outcome.final_result.is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn small_window_and_trigger_keep_invariants() {
    let offsets: Vec<i64> = (0..500).map(|i| (i % 7) * 10).collect();
    let daemon = FakeDaemon::new().sync_offsets(&offsets);
    let cfg = AnalyzerConfig {
        window_capacity: 50,
        trigger_count: 5,
        ..AnalyzerConfig::default()
    };

    let outcome = common::pipeline(cfg, InputSource::Daemon(daemon.command()), PipelineOptions::default())
        .run()
        .await
        .unwrap();

    assert_eq!(outcome.stats.readings, 500);
    assert_eq!(outcome.readings.len(), 50);
    assert_eq!(outcome.final_result.unwrap().total_samples, 50);
    assert!(outcome.stats.trigger.max_in_flight <= 1);
    assert!(outcome.stats.passes >= 1);
}
