mod board;
mod generator;
mod rules;
mod utils;

pub use board::{Board, ParseBoardError, BOX_SIZE, HEIGHT, MAX_VALUE, NUM_FIELDS, WIDTH};
pub use generator::{
    carve, generate_puzzle, generate_puzzle_with_rng, generate_solved, generate_solved_with_rng,
    Puzzle, DEFAULT_REMOVAL_COUNT,
};
pub use rules::is_safe;
