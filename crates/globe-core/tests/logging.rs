//! Subscriber installation. The global subscriber can only be set once per
//! process, so this file holds a single test.

use std::fs;

use globe_core::{LogConfig, LogFormat, LogLevel, init_logging};
use globe_ingest::load_dataset_file;
use globe_model::DatasetKind;
use tempfile::TempDir;

#[test]
fn json_log_file_receives_ingest_warnings() {
    let dir = TempDir::new().expect("tempdir");

    // A directory cannot be opened as a log file; nothing gets installed.
    let unopenable = LogConfig::default().with_log_file(Some(dir.path().to_path_buf()));
    assert!(init_logging(&unopenable).is_err());

    let log_path = dir.path().join("globe.log");
    let config = LogConfig::default()
        .with_level(LogLevel::Info)
        .with_format(LogFormat::Json)
        .with_timestamps(false)
        .with_ansi(false)
        .with_log_file(Some(log_path.clone()));
    init_logging(&config).expect("install subscriber");

    let loaded = load_dataset_file(DatasetKind::SeaLevel, &dir.path().join("missing.csv"));
    assert!(loaded.rows.is_empty());

    let contents = fs::read_to_string(&log_path).expect("read log file");
    let warning = contents
        .lines()
        .map(|line| serde_json::from_str::<serde_json::Value>(line).expect("json line"))
        .find(|event| event["fields"]["message"] == "dataset unavailable, using empty rows")
        .expect("warning in log file");
    assert_eq!(warning["level"], "WARN");
    assert_eq!(warning["fields"]["dataset"], "sea_level");
}
