//! Chess board representation and game rules.
//!
//! Owns the 8×8 board, per-piece pseudo-legal move generation, the legality
//! filter (no move may leave the mover's own king attacked), and
//! check/checkmate/stalemate evaluation. Castling, en passant, draw counters,
//! and any wire format are out of scope.
//!
//! # Example
//! ```
//! use chess_rules::board::{Game, Move, Position};
//!
//! let mut game = Game::new();
//! let e2e4 = Move::new(Position::new(2, 5), Position::new(4, 5));
//! let status = game.apply_move(e2e4).unwrap();
//! println!("after 1. e4: {status:?}");
//! ```

mod builder;
mod error;
mod game;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{BoardStateError, MoveError};
pub use game::{Game, GameStatus};
pub use state::Board;
pub use types::{Color, Move, MoveList, MoveListIntoIter, Piece, Position};

pub(crate) use types::PROMOTION_PIECES;
