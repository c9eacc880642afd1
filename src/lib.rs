pub mod board;

pub use board::{
    Board, BoardBuilder, BoardStateError, Color, Game, GameStatus, Move, MoveError, MoveList,
    Piece, Position,
};
