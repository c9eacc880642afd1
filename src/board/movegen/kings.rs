use super::super::types::{Color, Move, MoveList, Position};
use super::super::Board;

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl Board {
    // Single-step only; castling is not modeled.
    pub(crate) fn king_moves(&self, from: Position, color: Color, moves: &mut MoveList) {
        for &(drow, dcol) in &KING_OFFSETS {
            let to = from.offset(drow, dcol);
            if !to.is_on_board() {
                continue;
            }
            match self.get(to) {
                Some((occupant, _)) if occupant == color => {}
                _ => moves.push(Move::new(from, to)),
            }
        }
    }
}
