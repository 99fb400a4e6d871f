//! Run configs and report directories on disk.

use tilepath_harness::bundle_dir::{verify_report_dir, write_report_dir, ReportDirError, DIGEST_FILENAME};
use tilepath_harness::config::{ConfigError, RunConfig};
use tilepath_harness::runner::run_eight_puzzle;
use tilepath_search::policy::FrontierDedup;
use tilepath_search::search::TerminationReason;

#[test]
fn config_file_drives_runs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.json");
    std::fs::write(
        &path,
        r#"{
            "puzzles": [
                {"name": "two", "initial": [1, 4, 2, 3, null, 5, 6, 7, 8]},
                {"initial": "724/5_6/831"}
            ],
            "policy": {"max_expansions": 50, "frontier_dedup": "best_cost"}
        }"#,
    )
    .unwrap();

    let config = RunConfig::from_path(&path).unwrap();
    let policy = config.search_policy().unwrap();
    assert_eq!(policy.frontier_dedup, FrontierDedup::BestCost);

    let problems = config.problems().unwrap();
    let quick = run_eight_puzzle(&problems[0], &policy).unwrap();
    assert_eq!(quick.moves.len(), 2);

    let capped = run_eight_puzzle(&problems[1], &policy).unwrap();
    assert_eq!(
        capped.termination_reason(),
        TerminationReason::ExpansionBudgetExceeded { limit: 50 }
    );
}

#[test]
fn malformed_file_is_a_parse_error() {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), "{ not json").unwrap();
    assert!(matches!(RunConfig::from_path(file.path()), Err(ConfigError::Parse(_))));
}

#[test]
fn report_dir_round_trip_per_puzzle() {
    let config = RunConfig::default();
    let policy = config.search_policy().unwrap();
    let root = tempfile::tempdir().unwrap();

    for (i, problem) in config.problems().unwrap().iter().enumerate() {
        let run = run_eight_puzzle(problem, &policy).unwrap();
        let dir = root.path().join(format!("puzzle-{i}"));
        write_report_dir(&run, &dir).unwrap();
        assert_eq!(verify_report_dir(&dir).unwrap(), run.report_digest);
    }
}

#[test]
fn swapped_digest_is_detected() {
    let config = RunConfig::default();
    let policy = config.search_policy().unwrap();
    let problems = config.problems().unwrap();
    let a = run_eight_puzzle(&problems[0], &policy).unwrap();
    let b = run_eight_puzzle(&problems[1], &policy).unwrap();

    let dir = tempfile::tempdir().unwrap();
    write_report_dir(&a, dir.path()).unwrap();
    std::fs::write(dir.path().join(DIGEST_FILENAME), b.report_digest.as_str()).unwrap();

    assert!(matches!(
        verify_report_dir(dir.path()),
        Err(ReportDirError::DigestMismatch { .. })
    ));
}
