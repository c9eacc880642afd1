//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than starting from the
//! standard setup; used by the test suite and by hosts running variants.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, Piece, Position};
//!
//! let game = BoardBuilder::new()
//!     .piece(Position::new(1, 5), Color::White, Piece::King)
//!     .piece(Position::new(8, 5), Color::Black, Piece::King)
//!     .piece(Position::new(2, 1), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build_game();
//! ```

use super::game::Game;
use super::state::Board;
use super::types::{Color, Piece, Position};

/// A fluent builder for constructing positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Position, Color, Piece)>,
    side_to_move: Color,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
        }
    }

    /// Place a piece, replacing whatever the square held before.
    #[must_use]
    pub fn piece(mut self, pos: Position, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(p, _, _)| *p != pos);
        self.pieces.push((pos, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, pos: Position) -> Self {
        self.pieces.retain(|(p, _, _)| *p != pos);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Build just the board.
    #[must_use]
    pub fn build_board(&self) -> Board {
        let mut board = Board::empty();
        for &(pos, color, piece) in &self.pieces {
            board.place(pos, Some((color, piece)));
        }
        board
    }

    /// Build a game from the position and side to move.
    #[must_use]
    pub fn build_game(&self) -> Game {
        Game::with_board(self.build_board(), self.side_to_move)
    }
}
