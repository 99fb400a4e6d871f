//! Seeded random-walk scrambles.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use tilepath_kernel::carrier::board::Board;
use tilepath_kernel::operators::apply::{apply, legal_moves};
use tilepath_kernel::operators::moves::Move;

/// A deterministic RNG for `seed`.
#[must_use]
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Walk `steps` random moves away from `from`, never undoing the previous move.
///
/// The result is solvable towards `from` by construction.
///
/// # Panics
///
/// Panics if the kernel rejects a move reported as legal.
pub fn scramble(rng: &mut StdRng, from: &Board, steps: usize) -> Board {
    let mut board = *from;
    let mut last: Option<Move> = None;
    for _ in 0..steps {
        let candidates: Vec<Move> = legal_moves(&board)
            .into_iter()
            .filter(|mv| Some(mv.inverse()) != last)
            .collect();
        let mv = *candidates.choose(rng).expect("every board has a non-undo move");
        board = apply(&board, mv).expect("legal move applies");
        last = Some(mv);
    }
    board
}
