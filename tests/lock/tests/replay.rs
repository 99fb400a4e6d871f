//! Replay: performing the returned moves from the start reaches the goal.

use lock_tests::scramble_helpers::{scramble, seeded_rng};

use tilepath_harness::agent::EightPuzzleAgent;
use tilepath_harness::runner::run_eight_puzzle;
use tilepath_harness::worlds::eight_puzzle::EightPuzzleProblem;
use tilepath_kernel::carrier::board::Board;
use tilepath_kernel::operators::apply::apply;
use tilepath_kernel::operators::transition::SlidingTileModel;
use tilepath_search::policy::SearchPolicy;

#[test]
fn agent_replay_lands_on_goal() {
    let start = Board::parse("123/_45/678").unwrap();
    let moves = EightPuzzleProblem::towards_standard_goal(start).solve();

    let mut agent = EightPuzzleAgent::new(start, SlidingTileModel, moves.clone());
    let mut performed = Vec::new();
    while agent.has_actions() {
        let mv = agent.next_action().unwrap();
        agent.perform(mv).unwrap();
        performed.push(mv);
    }
    assert_eq!(performed, moves);
    assert_eq!(*agent.current_state(), Board::GOAL);
}

#[test]
fn fold_over_apply_matches_agent() {
    let mut rng = seeded_rng(2024);
    for _ in 0..15 {
        let start = scramble(&mut rng, &Board::GOAL, 25);
        let moves = EightPuzzleProblem::towards_standard_goal(start).solve();
        let folded = moves
            .iter()
            .try_fold(start, |board, mv| apply(&board, *mv))
            .unwrap();
        assert_eq!(folded, Board::GOAL);

        let mut agent = EightPuzzleAgent::new(start, SlidingTileModel, moves);
        assert_eq!(agent.run_to_completion().unwrap(), folded);
    }
}

#[test]
fn report_path_ends_at_goal_fingerprint() {
    let problem = EightPuzzleProblem::towards_standard_goal(Board::parse("724/5_6/831").unwrap());
    let run = run_eight_puzzle(&problem, &SearchPolicy::default()).unwrap();
    let last = run.report.path.last().unwrap();
    assert_eq!(last.state_fingerprint, run.report.goal_fingerprint);
    assert_eq!(run.report.path[0].state_fingerprint, run.report.initial_fingerprint);

    let labels: Vec<&str> = run.moves.iter().map(|mv| mv.name()).collect();
    assert_eq!(run.report.action_labels(), labels);
}
