use rand::Rng;

use crate::board::{Board, HEIGHT, NUM_FIELDS, WIDTH};

/// Takes a fully solved board and returns a copy with exactly `removal_count` cells
/// emptied, chosen uniformly at random. The input board is not modified.
///
/// The returned board makes no promise of having a unique solution, it just erases cells.
///
/// Panics if `removal_count` is larger than the number of cells on the board.
pub fn carve(solution: &Board, removal_count: usize, rng: &mut impl Rng) -> Board {
    assert!(
        removal_count <= NUM_FIELDS,
        "removal_count must be in 0..={} but was {}",
        NUM_FIELDS,
        removal_count,
    );
    debug_assert!(solution.is_filled());
    debug_assert!(!solution.has_conflicts());

    let mut board = *solution;
    let mut removed = 0;
    while removed < removal_count {
        let x = rng.gen_range(0..WIDTH);
        let y = rng.gen_range(0..HEIGHT);
        let mut field = board.field_mut(x, y);
        if !field.is_empty() {
            field.set(None);
            removed += 1;
        }
    }
    board
}
