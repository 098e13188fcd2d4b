use rand::Rng;

use crate::board::Board;

mod carve;
mod synthesize;

pub use carve::carve;
pub use synthesize::{generate_solved, generate_solved_with_rng};

/// Number of cells [generate_puzzle] erases from the solved board, leaving 21 clues.
pub const DEFAULT_REMOVAL_COUNT: usize = 60;

/// A generated sudoku puzzle: the board handed to the player and the fully solved
/// board it was carved from.
///
/// A puzzle never changes after generation. Callers that want to track player input
/// derive their own mutable state from a copy of [Puzzle::board].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Puzzle {
    board: Board,
    solution: Board,
}

impl Puzzle {
    /// The player-visible board. Each cell is either empty or a clue matching the
    /// same cell of [Puzzle::solution].
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The fully solved board the puzzle was carved from.
    pub fn solution(&self) -> &Board {
        &self.solution
    }
}

/// Generates a new puzzle with [DEFAULT_REMOVAL_COUNT] cells erased.
/// Every call produces an independent puzzle from a freshly seeded random source.
pub fn generate_puzzle() -> Puzzle {
    generate_puzzle_with_rng(&mut rand::thread_rng(), DEFAULT_REMOVAL_COUNT)
}

/// Same as [generate_puzzle] but uses the given random number generator and removal
/// quota. See [carve] for the valid range of `removal_count`.
pub fn generate_puzzle_with_rng(rng: &mut impl Rng, removal_count: usize) -> Puzzle {
    let solution = generate_solved_with_rng(rng);
    let board = carve(&solution, removal_count, rng);
    Puzzle { board, solution }
}
