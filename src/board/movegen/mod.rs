//! Pseudo-legal move generation.
//!
//! Pseudo-legal moves obey piece movement and occupancy rules but are blind
//! to self-check; the legality filter in [`crate::board::Game`] handles that.
//! Shared rules for every kind: a same-side destination is never a
//! candidate, an opposite-side destination is a capture, and off-board
//! squares end a sliding scan.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::types::{Color, MoveList, Piece, Position};
use super::Board;

pub(crate) const ORTHOGONAL_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const DIAGONAL_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

impl Board {
    /// Pseudo-legal candidates for the piece on `from`. Empty when the
    /// square is empty; the piece's own color is the moving side.
    ///
    /// The strategy set is fixed and closed, so dispatch is a flat match
    /// rather than a trait per kind.
    pub(crate) fn pseudo_moves_from(&self, from: Position) -> MoveList {
        let mut moves = MoveList::new();
        if let Some((color, piece)) = self.get(from) {
            match piece {
                Piece::Pawn => self.pawn_moves(from, color, &mut moves),
                Piece::Knight => self.knight_moves(from, color, &mut moves),
                Piece::Bishop => self.sliding_moves(from, color, &DIAGONAL_DIRS, &mut moves),
                Piece::Rook => self.sliding_moves(from, color, &ORTHOGONAL_DIRS, &mut moves),
                Piece::Queen => {
                    self.sliding_moves(from, color, &ORTHOGONAL_DIRS, &mut moves);
                    self.sliding_moves(from, color, &DIAGONAL_DIRS, &mut moves);
                }
                Piece::King => self.king_moves(from, color, &mut moves),
            }
        }
        moves
    }

    /// Returns true if any `by`-colored piece has a pseudo-legal candidate
    /// landing on `target`. This is the check predicate: the king's square
    /// is occupied, so pawn capture candidates cover it correctly.
    pub(crate) fn is_square_attacked(&self, target: Position, by: Color) -> bool {
        for row in 1..=8 {
            for col in 1..=8 {
                let from = Position::new(row, col);
                match self.get(from) {
                    Some((color, _)) if color == by => {
                        if self.pseudo_moves_from(from).iter().any(|m| m.to == target) {
                            return true;
                        }
                    }
                    _ => {}
                }
            }
        }
        false
    }
}
