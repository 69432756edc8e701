//! Report directory persistence: write, read back, and fail closed on
//! tampering.

use thought_harness::report::{
    batch_report, read_report_dir, report_bytes, report_digest, write_report_dir, ReportReadError,
};
use thought_harness::sample::SAMPLE_HANDS;
use thought_harness::solver::Point24Solver;

fn sample_report(strategy: &str) -> serde_json::Value {
    let solver = Point24Solver::with_strategy_name(strategy).unwrap();
    batch_report(&solver, SAMPLE_HANDS.iter().map(<[i64; 4]>::as_slice))
}

#[test]
fn written_digest_matches_in_memory_digest() {
    let dir = tempfile::tempdir().unwrap();
    let report = sample_report("bfs");
    let digest = write_report_dir(dir.path(), &report).unwrap();
    assert_eq!(digest, report_digest(&report_bytes(&report).unwrap()));

    let (read_back, _) = read_report_dir(dir.path()).unwrap();
    assert_eq!(read_back["solved"], 3);
    assert_eq!(read_back["hands"].as_array().unwrap().len(), SAMPLE_HANDS.len());
}

#[test]
fn strategies_produce_different_reports() {
    let bfs = report_bytes(&sample_report("bfs")).unwrap();
    let dfs = report_bytes(&sample_report("dfs")).unwrap();
    assert_ne!(report_digest(&bfs), report_digest(&dfs));
}

#[test]
fn rewriting_a_digest_by_hand_is_detected() {
    let dir = tempfile::tempdir().unwrap();
    write_report_dir(dir.path(), &sample_report("bfs")).unwrap();
    std::fs::write(
        dir.path().join("report_digest.txt"),
        "sha256:0000000000000000000000000000000000000000000000000000000000000000",
    )
    .unwrap();

    let err = read_report_dir(dir.path()).unwrap_err();
    assert!(
        matches!(err, ReportReadError::DigestMismatch { .. }),
        "expected DigestMismatch, got {err:?}"
    );
}

#[test]
fn missing_directory_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_report_dir(&dir.path().join("absent")).unwrap_err();
    assert!(matches!(err, ReportReadError::MissingFile { .. }));
}
