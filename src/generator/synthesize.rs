use std::num::NonZeroU8;

use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, BOX_SIZE, MAX_VALUE, NUM_FIELDS, WIDTH};
use crate::rules::is_safe;

/// Generates a random fully solved sudoku board.
/// Every row, column and 3x3 box of the returned board contains each value in 1..=9 exactly once.
pub fn generate_solved() -> Board {
    generate_solved_with_rng(&mut rand::thread_rng())
}

/// Same as [generate_solved] but uses the given random number generator.
/// Callers can pass a seeded one to get reproducible boards.
pub fn generate_solved_with_rng(rng: &mut impl Rng) -> Board {
    let mut board = Board::new_empty();
    fill_diagonal_boxes(&mut board, rng);
    let completed = fill_remaining(&mut board, 0, rng);
    // The three diagonal boxes share no row, column or box with each other, so any
    // pre-fill of them admits a completion and the search cannot run out of options.
    assert!(completed, "backtracking search failed to complete the board");
    debug_assert!(board.is_filled());
    debug_assert!(!board.has_conflicts());
    board
}

/// Fills the three boxes on the main diagonal, each with its own random permutation of 1..=9.
/// They are mutually independent, so no constraint checks are needed between them.
fn fill_diagonal_boxes(board: &mut Board, rng: &mut impl Rng) {
    for start in (0..WIDTH).step_by(BOX_SIZE) {
        fill_box(board, start, start, rng);
    }
}

fn fill_box(board: &mut Board, start_x: usize, start_y: usize, rng: &mut impl Rng) {
    let values = shuffled_values(rng);
    let cells = (0..BOX_SIZE).cartesian_product(0..BOX_SIZE);
    for ((dy, dx), value) in cells.zip(values) {
        board.field_mut(start_x + dx, start_y + dy).set(Some(value));
    }
}

/// Whether the 3x3 box containing the cell at column `x`, row `y` lies on the main
/// diagonal, i.e. is one of the boxes starting at (0,0), (3,3) or (6,6).
fn in_diagonal_box(x: usize, y: usize) -> bool {
    x / BOX_SIZE == y / BOX_SIZE
}

fn shuffled_values(rng: &mut impl Rng) -> Vec<NonZeroU8> {
    let mut values: Vec<NonZeroU8> = (1..=MAX_VALUE)
        .map(|value| NonZeroU8::new(value).unwrap())
        .collect();
    values.shuffle(rng);
    values
}

// `index` walks the board in row-major order. Each cell outside the diagonal boxes is
// visited exactly once, cells inside them are skipped because [fill_diagonal_boxes]
// already filled those.
//
// Invariant:
//  - When `fill_remaining` returns false, `board` is unchanged. Any placements made
//    during the search have been undone.
fn fill_remaining(board: &mut Board, index: usize, rng: &mut impl Rng) -> bool {
    if index == NUM_FIELDS {
        // No cells left to fill. The board is fully solved.
        return true;
    }
    let x = index % WIDTH;
    let y = index / WIDTH;

    if in_diagonal_box(x, y) {
        return fill_remaining(board, index + 1, rng);
    }

    // The values are tried in random order so repeated calls produce different
    // completions even from the same diagonal pre-fill.
    for value in shuffled_values(rng) {
        if is_safe(board, x, y, value) {
            board.field_mut(x, y).set(Some(value));
            if fill_remaining(board, index + 1, rng) {
                return true;
            }
            // This value didn't lead to a solution. Undo it and try the next one.
            board.field_mut(x, y).set(None);
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::HEIGHT;
    use rand::{rngs::StdRng, SeedableRng};

    fn assert_is_solved(board: &Board) {
        assert!(board.is_filled());
        assert!(!board.has_conflicts());
        let expected: Vec<u8> = (1..=9).collect();
        for y in 0..HEIGHT {
            let row: Vec<u8> = (0..WIDTH)
                .map(|x| board.field(x, y).get().unwrap().get())
                .sorted()
                .collect();
            assert_eq!(expected, row);
        }
        for x in 0..WIDTH {
            let col: Vec<u8> = (0..HEIGHT)
                .map(|y| board.field(x, y).get().unwrap().get())
                .sorted()
                .collect();
            assert_eq!(expected, col);
        }
        for (box_y, box_x) in (0..BOX_SIZE).cartesian_product(0..BOX_SIZE) {
            let values: Vec<u8> = (0..BOX_SIZE)
                .cartesian_product(0..BOX_SIZE)
                .map(|(dy, dx)| {
                    board
                        .field(BOX_SIZE * box_x + dx, BOX_SIZE * box_y + dy)
                        .get()
                        .unwrap()
                        .get()
                })
                .sorted()
                .collect();
            assert_eq!(expected, values);
        }
    }

    #[test]
    fn generate_10() {
        for _ in 0..10 {
            let board = generate_solved();
            assert_is_solved(&board);
        }
    }

    #[test]
    fn successive_boards_differ() {
        let first = generate_solved();
        let second = generate_solved();
        assert_ne!(first, second);
    }

    #[test]
    fn same_seed_generates_same_board() {
        let first = generate_solved_with_rng(&mut StdRng::seed_from_u64(42));
        let second = generate_solved_with_rng(&mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);

        let other = generate_solved_with_rng(&mut StdRng::seed_from_u64(43));
        assert_ne!(first, other);
    }

    #[test]
    fn diagonal_box_predicate() {
        // Inside the three diagonal boxes.
        assert!(in_diagonal_box(0, 0));
        assert!(in_diagonal_box(2, 2));
        assert!(in_diagonal_box(3, 3));
        assert!(in_diagonal_box(5, 3));
        assert!(in_diagonal_box(6, 6));
        assert!(in_diagonal_box(8, 8));
        // Seam cells right next to them.
        assert!(!in_diagonal_box(3, 0));
        assert!(!in_diagonal_box(0, 3));
        assert!(!in_diagonal_box(2, 3));
        assert!(!in_diagonal_box(6, 5));
        assert!(!in_diagonal_box(0, 8));
        assert!(!in_diagonal_box(5, 8));
    }

    #[test]
    fn prefill_fills_exactly_the_diagonal_boxes() {
        let mut board = Board::new_empty();
        fill_diagonal_boxes(&mut board, &mut StdRng::seed_from_u64(0));

        for x in 0..WIDTH {
            for y in 0..HEIGHT {
                assert_eq!(in_diagonal_box(x, y), !board.field(x, y).is_empty());
            }
        }
        assert_eq!(NUM_FIELDS - 27, board.num_empty());
        assert!(!board.has_conflicts());

        let expected: Vec<u8> = (1..=9).collect();
        for start in (0..WIDTH).step_by(BOX_SIZE) {
            let values: Vec<u8> = (0..BOX_SIZE)
                .cartesian_product(0..BOX_SIZE)
                .map(|(dy, dx)| board.field(start + dx, start + dy).get().unwrap().get())
                .sorted()
                .collect();
            assert_eq!(expected, values);
        }
    }

    #[test]
    fn completion_preserves_the_prefill() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut board = Board::new_empty();
        fill_diagonal_boxes(&mut board, &mut rng);
        let prefilled = board;

        assert!(fill_remaining(&mut board, 0, &mut rng));
        assert_is_solved(&board);
        for x in 0..WIDTH {
            for y in 0..HEIGHT {
                if in_diagonal_box(x, y) {
                    assert_eq!(prefilled.field(x, y).get(), board.field(x, y).get());
                }
            }
        }
    }

    #[test]
    fn completion_fills_the_seam_cells() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut board = Board::new_empty();
        fill_diagonal_boxes(&mut board, &mut rng);
        assert!(board.field(3, 0).is_empty());
        assert!(board.field(0, 8).is_empty());

        assert!(fill_remaining(&mut board, 0, &mut rng));
        // First cell after the top-left diagonal box, first cell of the final row and
        // the last cell of the board are all filled exactly like every other cell.
        assert!(!board.field(3, 0).is_empty());
        assert!(!board.field(0, 8).is_empty());
        assert!(!board.field(8, 8).is_empty());
    }
}
