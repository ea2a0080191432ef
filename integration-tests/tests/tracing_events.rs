use integration_tests::harness::{CapturedEvent, FakeDaemon, init_test_tracing};
use std::sync::{Arc, Mutex};
use syncscope_core::conf::AnalyzerConfig;
use syncscope_core::pipeline::{InputSource, PipelineOptions};
use tracing::Level;

mod common;

#[tokio::test(flavor = "multi_thread")]
async fn logs_lifecycle_and_threshold_warnings() {
    // Arrange
    let events: Arc<Mutex<Vec<CapturedEvent>>> = Arc::default();
    init_test_tracing(events.clone());

    let offsets: Vec<i64> = (0..20).map(|i| if i % 2 == 0 { 5000 } else { -5000 }).collect();
    let daemon = FakeDaemon::new().sync_offsets(&offsets);
    let cfg = AnalyzerConfig {
        jitter_threshold: 100.0,
        ..AnalyzerConfig::default()
    };

    // Act
    common::pipeline(cfg, InputSource::Daemon(daemon.command()), PipelineOptions::default())
        .run()
        .await
        .unwrap();

    // Assert
    let events = events.lock().unwrap();

    let states: Vec<&str> = events
        .iter()
        .filter(|e| e.message() == Some("pipeline state changed"))
        .filter_map(|e| e.field("to"))
        .collect();
    assert_eq!(states, vec!["running", "stopping", "stopped"]);

    assert!(events.iter().any(|e| e.message() == Some("daemon started")));
    assert!(
        events
            .iter()
            .any(|e| e.level == Level::WARN && e.message().is_some_and(|m| m.starts_with("jitter")))
    );
}
