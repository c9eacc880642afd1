use super::super::types::{Color, Move, MoveList, Position};
use super::super::Board;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

impl Board {
    pub(crate) fn knight_moves(&self, from: Position, color: Color, moves: &mut MoveList) {
        for &(drow, dcol) in &KNIGHT_OFFSETS {
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
