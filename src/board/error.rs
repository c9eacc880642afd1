//! Error types for game operations.

use std::fmt;

use super::types::{Color, Move, Position};

/// Error type for rejected move applications.
///
/// Every variant leaves the game untouched: a failed `apply_move` is atomic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The game already ended in checkmate or stalemate
    GameOver,
    /// No piece occupies the move's origin square
    EmptySquare { at: Position },
    /// The piece at the origin belongs to the side not on move
    WrongSide { at: Position, side_to_move: Color },
    /// The move is not in the current legal set
    NotLegal { mv: Move },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameOver => write!(f, "Game is already over"),
            MoveError::EmptySquare { at } => {
                write!(f, "No piece at {at}")
            }
            MoveError::WrongSide { at, side_to_move } => {
                write!(f, "Piece at {at} does not belong to {side_to_move}")
            }
            MoveError::NotLegal { mv } => {
                write!(f, "Illegal move '{mv}'")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for check/checkmate/stalemate queries against a corrupted
/// board.
///
/// A missing king is a data error, never a normal game outcome; queries fail
/// loudly instead of answering false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardStateError {
    /// The queried side has no king on the board
    MissingKing { color: Color },
}

impl fmt::Display for BoardStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardStateError::MissingKing { color } => {
                write!(f, "No {color} king on the board")
            }
        }
    }
}

impl std::error::Error for BoardStateError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_game_over() {
        let err = MoveError::GameOver;
        assert!(err.to_string().contains("over"));
    }

    #[test]
    fn test_move_error_empty_square() {
        let err = MoveError::EmptySquare {
            at: Position::new(4, 5),
        };
        assert!(err.to_string().contains("e4"));
    }

    #[test]
    fn test_move_error_wrong_side() {
        let err = MoveError::WrongSide {
            at: Position::new(7, 1),
            side_to_move: Color::White,
        };
        assert!(err.to_string().contains("a7"));
        assert!(err.to_string().contains("White"));
    }

    #[test]
    fn test_move_error_not_legal() {
        let err = MoveError::NotLegal {
            mv: Move::new(Position::new(2, 5), Position::new(5, 5)),
        };
        assert!(err.to_string().contains("e2e5"));
    }

    #[test]
    fn test_board_state_error_missing_king() {
        let err = BoardStateError::MissingKing {
            color: Color::Black,
        };
        assert!(err.to_string().contains("Black"));
    }

    #[test]
    fn test_error_equality() {
        let err1 = MoveError::GameOver;
        let err2 = MoveError::GameOver;
        assert_eq!(err1, err2);
    }
}
