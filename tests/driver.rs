use std::fs;
use std::path::Path;
use std::time::Duration;

use decodebench::{BenchConfig, Measurement, Report, Strategy};
use time::OffsetDateTime;

const THREE_RECORDS: &str = r#"[
    {"id": 1, "title": "one", "completed": true},
    {"id": 2, "title": "two", "completed": false},
    {"id": 3, "title": "three", "completed": true}
]"#;

fn write_document(dir: &Path, contents: &str) -> BenchConfig {
    let path = dir.join("document.json");
    fs::write(&path, contents).unwrap();
    BenchConfig::new(path)
}

#[test]
fn default_count_runs_inclusive_range() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_document(dir.path(), THREE_RECORDS);
    assert_eq!(config.count, 100_000);

    for strategy in Strategy::ALL {
        let report = decodebench::run(strategy, &config).expect("benchmark ran");
        assert_eq!(report.strategy, strategy);
        assert_eq!(report.iterations, 100_001);
        assert_eq!(report.records, 300_003);
        assert!(report.finished >= report.started);
    }
}

#[test]
fn zero_count_decodes_once() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_document(dir.path(), THREE_RECORDS).with_count(0);
    let report = decodebench::run(Strategy::GenericObject, &config).unwrap();
    assert_eq!(report.iterations, 1);
    assert_eq!(report.records, 3);
}

#[test]
fn missing_document_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let config = BenchConfig::new(dir.path().join("missing.json")).with_count(10);

    assert!(decodebench::load_document(&config.document).is_none());
    let err = decodebench::read_document(&config.document).unwrap_err();
    assert!(err.is_read());

    for strategy in Strategy::ALL {
        assert!(decodebench::run(strategy, &config).is_none());
    }
    assert!(decodebench::run_all(&config).is_empty());
}

#[test]
fn loaded_document_runs_without_a_file() {
    let config = BenchConfig::new("never-read.json").with_count(4);
    let report =
        decodebench::run_with_document(Strategy::DynamicWrapper, THREE_RECORDS.as_bytes(), &config)
            .unwrap();
    assert_eq!(report.iterations, 5);
    assert_eq!(report.records, 15);

    assert!(decodebench::run_with_document(Strategy::GenericObject, b"{}", &config).is_none());
}

#[test]
fn selected_strategies_share_one_read() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_document(dir.path(), THREE_RECORDS).with_count(1);
    let reports = decodebench::run_strategies(
        &[Strategy::WrapperDictionary, Strategy::GenericObject],
        &config,
    );
    let strategies = reports.iter().map(|r| r.strategy).collect::<Vec<_>>();
    assert_eq!(
        strategies,
        [Strategy::WrapperDictionary, Strategy::GenericObject]
    );

    let missing = BenchConfig::new(dir.path().join("missing.json"));
    assert!(decodebench::run_strategies(&Strategy::ALL, &missing).is_empty());
}

#[test]
fn malformed_document_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_document(dir.path(), r#"[{"id": 1,"#).with_count(10);
    for strategy in Strategy::ALL {
        assert!(decodebench::run(strategy, &config).is_none());
    }
}

#[test]
fn non_array_document_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_document(dir.path(), r#"{"id": 1, "title": "one"}"#).with_count(10);
    for strategy in Strategy::ALL {
        assert!(decodebench::run(strategy, &config).is_none());
    }
}

#[test]
fn run_all_reports_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_document(dir.path(), THREE_RECORDS)
        .with_count(5)
        .with_measurement(Measurement::StartFinish);
    let reports = decodebench::run_all(&config);
    let strategies = reports.iter().map(|r| r.strategy).collect::<Vec<_>>();
    assert_eq!(strategies, Strategy::ALL);
    assert!(reports.iter().all(|r| r.records == 18));
}

fn fixed_report() -> Report {
    let started = OffsetDateTime::from_unix_timestamp(0).unwrap();
    Report {
        strategy: Strategy::WrapperDictionary,
        iterations: 1,
        records: 3,
        elapsed: Duration::from_millis(1500),
        started,
        finished: started + Duration::from_secs(2),
    }
}

#[test]
fn elapsed_output() {
    let mut out = Vec::new();
    fixed_report().write(&mut out, Measurement::Elapsed).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "wrapper-dictionary spent time: 1.5\n"
    );
}

#[test]
fn start_finish_output() {
    let mut out = Vec::new();
    fixed_report()
        .write(&mut out, Measurement::StartFinish)
        .unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "wrapper-dictionary start: 1970-01-01T00:00:00Z\n\
         wrapper-dictionary finish: 1970-01-01T00:00:02Z\n"
    );
}
