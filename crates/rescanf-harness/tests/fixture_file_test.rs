//! Runs the shipped fixture file through the full harness pipeline.

use std::path::Path;

use rescanf_harness::{FixtureSet, TestRunner, VerificationSummary};

#[test]
fn shipped_core_fixture_passes() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/scanf_core.v1.json");
    let set = FixtureSet::from_file(&path).expect("fixture file loads");
    assert_eq!(set.version, "v1");
    assert!(!set.cases.is_empty());

    let results = TestRunner::new("shipped").run(&set);
    let summary = VerificationSummary::from_results(results);
    for failure in summary.results.iter().filter(|r| !r.passed) {
        eprintln!(
            "case {} failed:\n{}",
            failure.case_name,
            failure.diff.as_deref().unwrap_or("")
        );
    }
    assert!(summary.all_passed());
}

#[test]
fn fixture_round_trips_through_json() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/scanf_core.v1.json");
    let set = FixtureSet::from_file(&path).expect("fixture file loads");
    let json = set.to_json().expect("serializes");
    let reparsed = FixtureSet::from_json(&json).expect("reparses");
    assert_eq!(reparsed.cases.len(), set.cases.len());
}
