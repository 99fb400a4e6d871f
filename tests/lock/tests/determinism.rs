//! Determinism: identical input yields identical moves and report bytes,
//! within one process and across processes.

use std::path::Path;
use std::process::Command;

use tilepath_harness::config::RunConfig;
use tilepath_harness::runner::run_eight_puzzle;
use tilepath_harness::worlds::eight_puzzle::EightPuzzleProblem;
use tilepath_kernel::carrier::board::Board;
use tilepath_search::policy::{FrontierDedup, SearchPolicy};

// ---------------------------------------------------------------------------
// In-process: N=10
// ---------------------------------------------------------------------------

#[test]
fn report_bytes_deterministic_n10() {
    let problem = EightPuzzleProblem::towards_standard_goal(Board::parse("867/254/3_1").unwrap());
    let first = run_eight_puzzle(&problem, &SearchPolicy::default()).unwrap();
    for i in 1..10 {
        let run = run_eight_puzzle(&problem, &SearchPolicy::default()).unwrap();
        assert_eq!(first.moves, run.moves, "moves differed on run {i}");
        assert_eq!(first.report_bytes, run.report_bytes, "report bytes differed on run {i}");
        assert_eq!(first.report_digest, run.report_digest, "digest differed on run {i}");
    }
}

#[test]
fn policy_is_bound_into_report_digest() {
    let problem = EightPuzzleProblem::towards_standard_goal(Board::parse("724/5_6/831").unwrap());
    let plain = run_eight_puzzle(&problem, &SearchPolicy::default()).unwrap();
    let deduped = run_eight_puzzle(
        &problem,
        &SearchPolicy {
            frontier_dedup: FrontierDedup::BestCost,
            ..SearchPolicy::default()
        },
    )
    .unwrap();
    assert_eq!(plain.moves.len(), deduped.moves.len());
    assert_ne!(plain.report.policy_digest, deduped.report.policy_digest);
    assert_ne!(plain.report_digest, deduped.report_digest);
}

// ---------------------------------------------------------------------------
// Cross-process: solve_fixture under environment variants
// ---------------------------------------------------------------------------

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

fn run_variant(work_dir: &str, args: &[&str], env_overrides: &[(&str, &str)]) -> String {
    let bin = env!("CARGO_BIN_EXE_solve_fixture");

    let mut command = Command::new(bin);
    command.current_dir(work_dir).args(args);

    command
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE")
        .env_remove("RUST_LOG");

    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });

    assert!(
        output.status.success(),
        "solve_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_default_puzzles_identical() {
    let root = workspace_root();
    let tmp = std::env::temp_dir();
    let tmp = tmp.to_string_lossy();

    let baseline = run_variant(&root, &[], &[]);
    let variants = [
        run_variant(&tmp, &[], &[]),
        run_variant(&root, &[], &[("LANG", "C"), ("LC_ALL", "C")]),
        run_variant(&root, &[], &[("TZ", "America/Los_Angeles")]),
        run_variant(&root, &[], &[("RUST_LOG", "trace")]),
    ];
    for (i, output) in variants.iter().enumerate() {
        assert_eq!(&baseline, output, "variant {i} differed from baseline");
    }

    assert!(baseline.contains("puzzle.0.moves=left\n"), "{baseline}");
    assert!(baseline.contains("puzzle.1.length=13\n"), "{baseline}");
    assert!(baseline.contains("puzzle.2.length=26\n"), "{baseline}");
    assert!(baseline.contains("puzzle.3.length=27\n"), "{baseline}");
}

#[test]
fn crossproc_matches_in_process_digests() {
    let output = run_variant(&workspace_root(), &[], &[]);
    let config = RunConfig::default();
    let policy = config.search_policy().unwrap();
    for (i, problem) in config.problems().unwrap().iter().enumerate() {
        let run = run_eight_puzzle(problem, &policy).unwrap();
        let line = format!("puzzle.{i}.report_digest={}\n", run.report_digest);
        assert!(output.contains(&line), "missing {line:?} in {output}");
    }
}

#[test]
fn crossproc_config_file_with_replay() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.json");
    std::fs::write(
        &path,
        r#"{"puzzles": [{"initial": "312/_45/678"}, {"initial": "_21/345/678"}],
            "policy": {"frontier_dedup": "best_cost"}}"#,
    )
    .unwrap();
    let path = path.to_string_lossy().to_string();

    let a = run_variant(&workspace_root(), &["--config", &path, "--replay"], &[]);
    let b = run_variant(
        &dir.path().to_string_lossy(),
        &["--config", &path, "--replay"],
        &[("RUST_LOG", "debug")],
    );
    assert_eq!(a, b);

    assert!(a.contains("puzzle.0.moves=up\n"), "{a}");
    assert!(a.contains("puzzle.0.final_state=Board(_12/345/678)\n"), "{a}");
    assert!(a.contains("puzzle.1.termination_reason=frontier_exhausted\n"), "{a}");
    assert!(a.contains("puzzle.1.length=0\n"), "{a}");
    assert!(a.contains("puzzle.1.final_state=Board(_21/345/678)\n"), "{a}");
}
