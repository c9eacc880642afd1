use super::super::types::{Color, Move, MoveList, Position};
use super::super::{Board, PROMOTION_PIECES};

/// Push `from -> to`, expanded into the four promotion choices when the
/// destination is the pawn's promotion row.
fn push_pawn_move(moves: &mut MoveList, from: Position, to: Position, promotion_row: i8) {
    if to.row == promotion_row {
        for promo in PROMOTION_PIECES {
            moves.push(Move::promoting(from, to, promo));
        }
    } else {
        moves.push(Move::new(from, to));
    }
}

impl Board {
    /// Pawn candidates: single advance onto an empty square, double advance
    /// from the start row with both squares empty, diagonal steps only as
    /// captures. No en passant.
    pub(crate) fn pawn_moves(&self, from: Position, color: Color, moves: &mut MoveList) {
        let dir = color.pawn_direction();
        let promotion_row = color.promotion_row();

        let forward = from.offset(dir, 0);
        if forward.is_on_board() && self.is_empty(forward) {
            push_pawn_move(moves, from, forward, promotion_row);

            if from.row == color.pawn_start_row() {
                let double_forward = forward.offset(dir, 0);
                if double_forward.is_on_board() && self.is_empty(double_forward) {
                    moves.push(Move::new(from, double_forward));
                }
            }
        }

        for dcol in [-1, 1] {
            let target = from.offset(dir, dcol);
            if !target.is_on_board() {
                continue;
            }
            if let Some((occupant, _)) = self.get(target) {
                if occupant != color {
                    push_pawn_move(moves, from, target, promotion_row);
                }
            }
        }
    }
}
