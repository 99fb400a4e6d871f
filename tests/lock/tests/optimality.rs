//! Optimality and admissibility against a breadth-first reference.
//!
//! A* with Manhattan distance must return solutions exactly as short as
//! the BFS optimum, and the heuristic must never exceed that optimum.

use lock_tests::bfs_reference::{bfs_distance, distance_table, REACHABLE_STATES};
use lock_tests::scramble_helpers::{scramble, seeded_rng};

use tilepath_harness::worlds::eight_puzzle::EightPuzzleProblem;
use tilepath_kernel::carrier::board::Board;
use tilepath_kernel::operators::moves::Move;
use tilepath_search::heuristic::{Heuristic, ManhattanDistance, ZeroHeuristic};
use tilepath_search::policy::{FrontierDedup, SearchPolicy};
use tilepath_search::search::{search, solution};

fn board(text: &str) -> Board {
    Board::parse(text).unwrap()
}

fn solve(text: &str) -> Vec<Move> {
    EightPuzzleProblem::towards_standard_goal(board(text)).solve()
}

// ---------------------------------------------------------------------------
// Concrete scenarios, goal = _12/345/678
// ---------------------------------------------------------------------------

#[test]
fn blank_one_right_of_goal_needs_one_left() {
    assert_eq!(solve("1_2/345/678"), vec![Move::Left]);
}

#[test]
fn initial_equals_goal_is_empty() {
    assert!(solve("_12/345/678").is_empty());
}

#[test]
fn row_shift_matches_bfs_optimum() {
    let moves = solve("123/_45/678");
    assert_eq!(Some(moves.len() as u32), bfs_distance(&board("123/_45/678"), &Board::GOAL));
    assert_eq!(moves.len(), 13);
}

#[test]
fn heuristic_at_goal_is_zero() {
    assert_eq!(ManhattanDistance::default().estimate(&Board::GOAL), 0);
}

#[test]
fn heuristic_one_off_matches_goal_table() {
    let h = ManhattanDistance::default();
    let state = board("1_2/345/678");
    // Only tile 1 is displaced: index 0, goal index 1.
    let expected: u32 = (1..=8u8)
        .map(|label| {
            let at = state.position_of(label).unwrap();
            let goal = h.goal_position(label).unwrap();
            u32::try_from((at / 3).abs_diff(goal / 3) + (at % 3).abs_diff(goal % 3)).unwrap()
        })
        .sum();
    assert_eq!(h.estimate(&state), expected);
    assert_eq!(expected, 1);
}

#[test]
fn demonstration_boards_match_bfs() {
    for (text, expected) in [
        ("1_2/345/678", 1),
        ("123/_45/678", 13),
        ("724/5_6/831", 26),
        ("867/254/3_1", 27),
    ] {
        let moves = solve(text);
        assert_eq!(moves.len(), expected, "{text}");
        assert_eq!(bfs_distance(&board(text), &Board::GOAL), Some(expected as u32), "{text}");
    }
}

// ---------------------------------------------------------------------------
// Seeded scrambles
// ---------------------------------------------------------------------------

#[test]
fn scrambles_solve_optimally() {
    let table = distance_table(&Board::GOAL);
    let mut rng = seeded_rng(0x7117_9a7e);
    for round in 0..40 {
        let start = scramble(&mut rng, &Board::GOAL, 10 + round);
        let moves = EightPuzzleProblem::towards_standard_goal(start).solve();
        assert_eq!(
            Some(&(moves.len() as u32)),
            table.get(&start),
            "round {round}: {start:?}"
        );
    }
}

#[test]
fn best_cost_dedup_keeps_optimal_lengths() {
    let policy = SearchPolicy {
        frontier_dedup: FrontierDedup::BestCost,
        ..SearchPolicy::default()
    };
    let mut rng = seeded_rng(42);
    for round in 0..20 {
        let start = scramble(&mut rng, &Board::GOAL, 30);
        let problem = EightPuzzleProblem::towards_standard_goal(start);
        let plain = search(&problem, &problem.heuristic(), &SearchPolicy::default()).unwrap();
        let deduped = search(&problem, &problem.heuristic(), &policy).unwrap();
        assert_eq!(plain.solution_cost(), deduped.solution_cost(), "round {round}");
        assert_eq!(plain.stats.dedup_suppressed, 0);
    }
}

#[test]
fn uniform_cost_agrees_with_a_star() {
    let mut rng = seeded_rng(7);
    for _ in 0..5 {
        let start = scramble(&mut rng, &Board::GOAL, 14);
        let problem = EightPuzzleProblem::towards_standard_goal(start);
        assert_eq!(
            solution(&problem, &ZeroHeuristic).len(),
            problem.solve().len()
        );
    }
}

#[test]
fn manhattan_is_admissible_everywhere() {
    let h = ManhattanDistance::default();
    let table = distance_table(&Board::GOAL);
    assert_eq!(table.len(), REACHABLE_STATES);
    for (state, optimal) in &table {
        assert!(h.estimate(state) <= *optimal, "{state:?}: h={} > {optimal}", h.estimate(state));
    }
}

#[test]
fn custom_goal_solves_optimally() {
    let goal = board("123/456/78_");
    let mut rng = seeded_rng(99);
    for _ in 0..10 {
        let start = scramble(&mut rng, &goal, 20);
        let moves = EightPuzzleProblem::new(start, goal).solve();
        assert_eq!(Some(moves.len() as u32), bfs_distance(&start, &goal));
    }
}
