//! Binary that solves the configured puzzles through the harness runner
//! and prints deterministic output lines for cross-process verification.
//!
//! Usage: `solve_fixture [--config <path>] [--replay]`
//!
//! Output: `puzzle.<i>.<key>=<value>` lines on stdout. Logs go to stderr
//! (`RUST_LOG`, default `warn`).

use std::path::PathBuf;

use clap::Parser;

use tilepath_harness::config::RunConfig;
use tilepath_harness::runner::run_eight_puzzle;

#[derive(Debug, Parser)]
#[command(name = "solve_fixture", about = "Solve eight-puzzle fixtures deterministically")]
struct Args {
    /// JSON run config; the demonstration puzzles when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also print the board reached by replaying each solution
    #[arg(long)]
    replay: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => RunConfig::from_path(path).expect("config loads"),
        None => RunConfig::default(),
    };
    let policy = config.search_policy().expect("policy is valid");
    let problems = config.problems().expect("boards are valid");
    log::info!("solving {} puzzles", problems.len());

    println!("policy_digest={}", policy.digest().expect("policy digests"));
    for (i, problem) in problems.iter().enumerate() {
        let run = run_eight_puzzle(problem, &policy).expect("run succeeds");
        let moves: Vec<&str> = run.moves.iter().map(|mv| mv.name()).collect();

        println!("puzzle.{i}.termination_reason={}", run.termination_reason().as_str());
        println!("puzzle.{i}.length={}", run.moves.len());
        println!("puzzle.{i}.moves={}", moves.join(","));
        println!("puzzle.{i}.expansions={}", run.result.stats.expansions);
        println!("puzzle.{i}.report_digest={}", run.report_digest);
        if args.replay {
            println!("puzzle.{i}.final_state={:?}", run.final_state);
        }
    }
}
