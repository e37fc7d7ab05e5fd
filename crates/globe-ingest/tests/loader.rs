//! File loading and background ingestion against real files.

use std::fs;
use std::time::Duration;

use globe_ingest::{
    DatasetSource, IngestEvent, IngestWorker, load_dataset_file, read_dataset_file,
};
use globe_model::{DatasetKind, DatasetRows};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

#[test]
fn missing_file_loads_as_empty_rows() {
    let dir = TempDir::new().expect("tempdir");
    let loaded = load_dataset_file(DatasetKind::Temperature, &dir.path().join("absent.csv"));
    assert!(loaded.rows.is_empty());
    assert_eq!(loaded.kind(), DatasetKind::Temperature);
    assert!(loaded.report.is_none());
}

#[test]
fn read_surfaces_io_errors() {
    let dir = TempDir::new().expect("tempdir");
    let err = read_dataset_file(DatasetKind::Co2, &dir.path().join("absent.csv")).unwrap_err();
    assert!(err.to_string().contains("absent.csv"));
}

#[test]
fn malformed_table_loads_as_empty_rows() {
    let dir = TempDir::new().expect("tempdir");
    let path = write(&dir, "co2.csv", "nation,when\nChad,2000\n");
    let loaded = load_dataset_file(DatasetKind::Co2, &path);
    assert_eq!(loaded.rows, DatasetRows::empty(DatasetKind::Co2));
}

#[test]
fn worker_delivers_every_source() {
    let dir = TempDir::new().expect("tempdir");
    let sea = write(
        &dir,
        "sea.csv",
        "year,date,mmfrom1993-2008average\n1993,1993-03-15,-1.0\n",
    );
    let co2 = write(&dir, "co2.csv", "country,year,co2_per_capita\nChad,2000,0.1\n");

    let mut worker = IngestWorker::spawn(vec![
        DatasetSource::new(DatasetKind::SeaLevel, sea),
        DatasetSource::new(DatasetKind::Co2, co2),
        DatasetSource::new(DatasetKind::Temperature, dir.path().join("absent.csv")),
    ]);
    assert_eq!(worker.pending(), 3);

    let mut kinds = Vec::new();
    while !worker.is_finished() {
        if let Some(IngestEvent::Loaded(loaded)) = worker.next_timeout(Duration::from_secs(5)) {
            if loaded.kind() != DatasetKind::Temperature {
                assert_eq!(loaded.rows.len(), 1);
            }
            kinds.push(loaded.kind());
        }
    }
    kinds.sort();
    assert_eq!(
        kinds,
        vec![DatasetKind::Temperature, DatasetKind::Co2, DatasetKind::SeaLevel]
    );
    assert!(worker.try_next().is_none());
}
