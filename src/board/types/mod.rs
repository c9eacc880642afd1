//! Core value types: coordinates, pieces, colors, and moves.

mod moves;
mod piece;
mod position;

pub use moves::{Move, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece};
pub use position::Position;

pub(crate) use piece::PROMOTION_PIECES;
