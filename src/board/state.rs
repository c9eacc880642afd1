//! Board state: an 8×8 grid of optional pieces with cheap mutate/revert.

use std::fmt;

use super::types::{Color, Move, Piece, Position};

/// Everything needed to revert a single applied move.
///
/// Captured during [`Board::make`] and consumed by [`Board::unmake`]; the
/// legality filter relies on this pair to trial every candidate without
/// copying the board.
#[derive(Clone, Copy, Debug)]
pub(crate) struct UnmakeInfo {
    moved: (Color, Piece),
    captured: Option<(Color, Piece)>,
}

/// An 8×8 chess board: a total mapping from on-board [`Position`]s to
/// optional pieces.
///
/// The board owns no game state beyond piece placement - side to move and
/// the terminal flag live on [`crate::board::Game`]. Equality and hashing
/// are structural (square by square).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    // Row-major from (1,1): index = (row-1)*8 + (col-1)
    squares: [Option<(Color, Piece)>; 64],
}

impl Board {
    /// Create a board with the standard 32-piece opening layout: White on
    /// rows 1-2, Black on rows 7-8, back ranks ordered
    /// Rook-Knight-Bishop-Queen-King-Bishop-Knight-Rook.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.reset_to_standard_setup();
        board
    }

    /// Create an empty board.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// Clear the board and place the standard opening layout.
    pub fn reset_to_standard_setup(&mut self) {
        self.squares = [None; 64];
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (i, &piece) in back_rank.iter().enumerate() {
            let col = i as i8 + 1;
            self.place(Position::new(1, col), Some((Color::White, piece)));
            self.place(Position::new(2, col), Some((Color::White, Piece::Pawn)));
            self.place(Position::new(7, col), Some((Color::Black, Piece::Pawn)));
            self.place(Position::new(8, col), Some((Color::Black, piece)));
        }
    }

    /// Unconditionally overwrite the square at `pos`. Placing `None` removes
    /// a piece. Off-board positions are a programming error.
    pub fn place(&mut self, pos: Position, piece: Option<(Color, Piece)>) {
        debug_assert!(pos.is_on_board(), "place at off-board position {pos}");
        self.squares[pos.index()] = piece;
    }

    /// Look up the square at `pos`. Returns `None` for empty squares and,
    /// defensively, for off-board positions.
    #[inline]
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<(Color, Piece)> {
        if pos.is_on_board() {
            self.squares[pos.index()]
        } else {
            None
        }
    }

    /// Returns true if the on-board square at `pos` holds no piece.
    /// Callers bounds-check `pos` first.
    #[inline]
    pub(crate) fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Square of the king of `color`, if any.
    pub(crate) fn king_square(&self, color: Color) -> Option<Position> {
        for row in 1..=8 {
            for col in 1..=8 {
                let pos = Position::new(row, col);
                if self.get(pos) == Some((color, Piece::King)) {
                    return Some(pos);
                }
            }
        }
        None
    }

    /// Apply `mv` with single-square overwrites, returning what is needed to
    /// revert it. Promotion replaces the mover's kind before placement.
    /// Returns `None` when no piece occupies `mv.from`.
    pub(crate) fn make(&mut self, mv: Move) -> Option<UnmakeInfo> {
        let moved = self.get(mv.from)?;
        let captured = self.get(mv.to);
        let placed = match mv.promotion {
            Some(kind) => (moved.0, kind),
            None => moved,
        };
        self.place(mv.from, None);
        self.place(mv.to, Some(placed));
        Some(UnmakeInfo { moved, captured })
    }

    /// Revert a move applied by [`Board::make`].
    pub(crate) fn unmake(&mut self, mv: Move, info: UnmakeInfo) {
        self.place(mv.from, Some(info.moved));
        self.place(mv.to, info.captured);
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (1..=8).rev() {
            write!(f, "{row} ")?;
            for col in 1..=8 {
                let c = match self.get(Position::new(row, col)) {
                    Some((color, piece)) => piece.to_char_for(color),
                    None => '.',
                };
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        fmt::Display::fmt(self, f)?;
        write!(f, "\n}}")
    }
}
