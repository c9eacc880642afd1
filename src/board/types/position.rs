//! Board coordinates.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A board coordinate as 1-indexed (row, column), matching algebraic rank
/// and file: row 1 = rank 1, column 1 = the a-file.
///
/// Construction is deliberately permissive: stepping off the edge with
/// [`Position::offset`] yields a coordinate that [`Position::is_on_board`]
/// rejects, and every consumer must bounds-check before a board lookup.
/// [`crate::board::Board::get`] answers `None` for off-board coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    #[inline]
    #[must_use]
    pub const fn new(row: i8, col: i8) -> Self {
        Position { row, col }
    }

    /// Step by (Δrow, Δcol). No wraparound: stepping off the board yields an
    /// off-board coordinate the caller must reject before use.
    #[inline]
    #[must_use]
    pub const fn offset(self, drow: i8, dcol: i8) -> Self {
        Position {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// Returns true if both row and column are within [1, 8].
    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        1 <= self.row && self.row <= 8 && 1 <= self.col && self.col <= 8
    }

    /// Row-major index into the 64-square array. Only valid on-board.
    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        (self.row as usize - 1) * 8 + (self.col as usize - 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            write!(f, "{}{}", (b'a' + self.col as u8 - 1) as char, self.row)
        } else {
            write!(f, "({},{})", self.row, self.col)
        }
    }
}
