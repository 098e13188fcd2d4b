use std::fmt;
use std::num::NonZeroU8;
use std::str::FromStr;

use bitvec::prelude::*;
use itertools::Itertools;
use thiserror::Error;

use crate::utils::div_ceil;

pub const WIDTH: usize = 9;
pub const HEIGHT: usize = 9;
pub const NUM_FIELDS: usize = WIDTH * HEIGHT;
pub const MAX_VALUE: u8 = 9;
pub const BOX_SIZE: usize = 3;

const NUM_BYTES: usize = div_ceil(NUM_FIELDS, 2);

/// A [Board] is a 9x9 sudoku board.
/// Each cell either contains a value in 1..=9 or is empty.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    // Every byte stores two cells. The first 4 bits the first cell, the second 4 bits the second cell.
    // An empty cell is stored as 0. Cells are ordered by rows, first left-to-right, then top-to-bottom.
    compressed_board: [u8; NUM_BYTES],
}

#[derive(Clone, Copy)]
enum FieldSubindex {
    FirstHalfByte,
    SecondHalfByte,
}

pub struct FieldRef<T> {
    field: T,
    subindex: FieldSubindex,
}

impl FieldRef<&u8> {
    #[inline]
    pub fn get(&self) -> Option<NonZeroU8> {
        let value = match self.subindex {
            FieldSubindex::FirstHalfByte => self.field & 0x0F,
            FieldSubindex::SecondHalfByte => self.field >> 4,
        };
        assert!(value <= MAX_VALUE);
        NonZeroU8::new(value)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.get().is_none()
    }
}

impl FieldRef<&mut u8> {
    #[inline]
    pub fn get(&self) -> Option<NonZeroU8> {
        FieldRef::<&u8> {
            field: self.field,
            subindex: self.subindex,
        }
        .get()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.get().is_none()
    }

    #[inline]
    pub fn set(&mut self, value: Option<NonZeroU8>) {
        let value = value.map_or(0, NonZeroU8::get);
        assert!(value <= MAX_VALUE);
        match self.subindex {
            FieldSubindex::FirstHalfByte => *self.field = (*self.field & 0xF0) | value,
            FieldSubindex::SecondHalfByte => *self.field = (*self.field & 0x0F) | (value << 4),
        }
    }
}

impl Board {
    #[inline]
    pub fn new_empty() -> Self {
        Board {
            compressed_board: [0; NUM_BYTES],
        }
    }

    fn index(x: usize, y: usize) -> (usize, FieldSubindex) {
        assert!(x < WIDTH && y < HEIGHT);
        let index = y * WIDTH + x;
        let subindex = if index % 2 == 0 {
            FieldSubindex::FirstHalfByte
        } else {
            FieldSubindex::SecondHalfByte
        };
        (index, subindex)
    }

    #[inline]
    pub fn field(&self, x: usize, y: usize) -> FieldRef<&'_ u8> {
        let (index, subindex) = Self::index(x, y);
        let field = &self.compressed_board[index / 2];
        FieldRef { field, subindex }
    }

    #[inline]
    pub fn field_mut(&mut self, x: usize, y: usize) -> FieldRef<&'_ mut u8> {
        let (index, subindex) = Self::index(x, y);
        let field = &mut self.compressed_board[index / 2];
        FieldRef { field, subindex }
    }

    /// Iterates over all cells in row-major order, i.e. first left-to-right, then top-to-bottom.
    pub fn fields(&self) -> impl Iterator<Item = Option<NonZeroU8>> + '_ {
        (0..HEIGHT)
            .cartesian_product(0..WIDTH)
            .map(|(y, x)| self.field(x, y).get())
    }

    pub fn num_empty(&self) -> usize {
        self.fields().filter(Option::is_none).count()
    }

    pub fn is_filled(&self) -> bool {
        self.num_empty() == 0
    }

    /// Returns true if any row, column or 3x3 box contains the same value more than once.
    /// Empty cells never count as a conflict.
    pub fn has_conflicts(&self) -> bool {
        let any_row =
            (0..HEIGHT).any(|y| has_duplicates((0..WIDTH).map(|x| self.field(x, y).get())));
        let any_col =
            (0..WIDTH).any(|x| has_duplicates((0..HEIGHT).map(|y| self.field(x, y).get())));
        let any_box = (0..BOX_SIZE)
            .cartesian_product(0..BOX_SIZE)
            .any(|(box_y, box_x)| {
                has_duplicates((0..BOX_SIZE).cartesian_product(0..BOX_SIZE).map(|(dy, dx)| {
                    self.field(BOX_SIZE * box_x + dx, BOX_SIZE * box_y + dy).get()
                }))
            });
        any_row || any_col || any_box
    }
}

fn has_duplicates(values: impl Iterator<Item = Option<NonZeroU8>>) -> bool {
    // One bit per value in 1..=9, set once that value was seen.
    let mut seen: BitArr!(for MAX_VALUE as usize) = BitArray::ZERO;
    for value in values.flatten() {
        let index = usize::from(value.get()) - 1;
        if seen[index] {
            return true;
        }
        seen.set(index, true);
    }
    false
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseBoardError {
    #[error("invalid character {0:?} in board string")]
    InvalidCharacter(char),

    #[error("board string has {found} cells but a board needs {NUM_FIELDS}")]
    WrongNumberOfCells { found: usize },
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses a board from a string with one character per cell in row-major order,
    /// `1`-`9` for values and `_` for empty cells. Whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<Option<NonZeroU8>> = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                '_' => Ok(None),
                '1'..='9' => Ok(NonZeroU8::new(c as u8 - b'0')),
                _ => Err(ParseBoardError::InvalidCharacter(c)),
            })
            .collect::<Result<_, _>>()?;
        if cells.len() != NUM_FIELDS {
            return Err(ParseBoardError::WrongNumberOfCells { found: cells.len() });
        }
        let mut board = Board::new_empty();
        for (index, value) in cells.into_iter().enumerate() {
            board.field_mut(index % WIDTH, index / WIDTH).set(value);
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..HEIGHT {
            if y > 0 && y % BOX_SIZE == 0 {
                writeln!(f)?;
            }
            for x in 0..WIDTH {
                if x > 0 && x % BOX_SIZE == 0 {
                    write!(f, " ")?;
                }
                match self.field(x, y).get() {
                    Some(value) => write!(f, "{}", value)?,
                    None => write!(f, "_")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
