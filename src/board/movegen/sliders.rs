use super::super::types::{Color, Move, MoveList, Position};
use super::super::Board;

impl Board {
    /// Slide from `from` along each direction in `dirs` until blocked or
    /// off-board. The first opposite-side piece in a direction is a capture
    /// and ends the scan; a same-side piece ends the scan without a
    /// candidate.
    pub(crate) fn sliding_moves(
        &self,
        from: Position,
        color: Color,
        dirs: &[(i8, i8)],
        moves: &mut MoveList,
    ) {
        for &(drow, dcol) in dirs {
            let mut to = from.offset(drow, dcol);
            while to.is_on_board() {
                match self.get(to) {
                    None => moves.push(Move::new(from, to)),
                    Some((occupant, _)) => {
                        if occupant != color {
                            moves.push(Move::new(from, to));
                        }
                        break;
                    }
                }
                to = to.offset(drow, dcol);
            }
        }
    }
}
