use std::num::NonZeroU8;

use itertools::Itertools;

use crate::board::{Board, BOX_SIZE, HEIGHT, WIDTH};

/// Checks whether `value` could be placed at column `x`, row `y` without conflicting
/// with a value that is already on the board, i.e. whether `value` occurs nowhere in
/// the same row, column or 3x3 box. The target cell itself counts as well, so placing
/// a value that is already there is reported as unsafe.
///
/// The board can be partially filled, empty cells don't restrict anything.
pub fn is_safe(board: &Board, x: usize, y: usize, value: NonZeroU8) -> bool {
    let in_row = (0..WIDTH).any(|col| board.field(col, y).get() == Some(value));
    if in_row {
        return false;
    }

    let in_col = (0..HEIGHT).any(|row| board.field(x, row).get() == Some(value));
    if in_col {
        return false;
    }

    let box_x = x - x % BOX_SIZE;
    let box_y = y - y % BOX_SIZE;
    let in_box = (0..BOX_SIZE)
        .cartesian_product(0..BOX_SIZE)
        .any(|(dy, dx)| board.field(box_x + dx, box_y + dy).get() == Some(value));
    !in_box
}
