//! Game orchestration: turn order, legality filtering, move application,
//! and terminal detection.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "logging")]
use log::debug;

use super::error::{BoardStateError, MoveError};
use super::state::Board;
use super::types::{Color, Move, MoveList, Position};

/// Snapshot of a side's standing after a move.
///
/// `Check` is informational; only `Checkmate` and `Stalemate` end the game.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    InProgress,
    Check(Color),
    Checkmate(Color),
    Stalemate(Color),
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Check(color) => write!(f, "{color} is in check"),
            GameStatus::Checkmate(color) => write!(f, "{color} is checkmated"),
            GameStatus::Stalemate(color) => write!(f, "{color} is stalemated"),
        }
    }
}

fn is_terminal(status: Option<GameStatus>) -> bool {
    matches!(
        status,
        Some(GameStatus::Checkmate(_) | GameStatus::Stalemate(_))
    )
}

/// One game of chess: a board, the side to move, and the terminal latch.
///
/// All mutation goes through [`Game::apply_move`]. The engine provides no
/// internal locking; a host serving many games serializes access per
/// instance.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    game_over: bool,
}

impl Game {
    /// Start a game from the standard setup with White to move.
    #[must_use]
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            side_to_move: Color::White,
            game_over: false,
        }
    }

    /// Start a game from an arbitrary position. The terminal latch is
    /// evaluated immediately, so a position that is already checkmate or
    /// stalemate accepts no moves.
    #[must_use]
    pub fn with_board(board: Board, side_to_move: Color) -> Self {
        let mut game = Game {
            board,
            side_to_move,
            game_over: false,
        };
        game.game_over = game.detect_game_over();
        game
    }

    /// Read access for renderers and hosts. The board is never mutated
    /// except through [`Game::apply_move`].
    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Legal moves for the piece on `from`, or `None` when the square is
    /// empty.
    ///
    /// Every pseudo-legal candidate is trialed on a scratch board with a
    /// single-square make/unmake pair and kept only if the mover's own king
    /// is not attacked afterwards. The board is restored on every path, so
    /// the result is independent of trial order; it is deterministic for a
    /// fixed input but callers should compare as sets.
    #[must_use]
    pub fn legal_moves(&self, from: Position) -> Option<MoveList> {
        let (color, _) = self.board.get(from)?;
        let candidates = self.board.pseudo_moves_from(from);
        if self.board.king_square(color).is_none() {
            // Kingless side: nothing to expose, nothing to filter. The
            // check queries are where a missing king fails loudly.
            return Some(candidates);
        }

        let mut scratch = self.board.clone();
        let mut legal = MoveList::new();
        for &mv in candidates.iter() {
            let Some(info) = scratch.make(mv) else {
                continue;
            };
            let exposed = scratch
                .king_square(color)
                .is_some_and(|king| scratch.is_square_attacked(king, color.opponent()));
            scratch.unmake(mv, info);
            if !exposed {
                legal.push(mv);
            }
        }
        Some(legal)
    }

    /// Apply `mv` if it is legal for the side to move.
    ///
    /// Preconditions are checked in order: the game is not over, a piece
    /// occupies `mv.from`, it belongs to the side to move, and `mv` is in
    /// the current legal set. Any violation rejects the move and leaves the
    /// game unchanged. On success the side to move flips, terminal
    /// conditions are re-evaluated for both sides, and the status from the
    /// new mover's perspective is returned.
    pub fn apply_move(&mut self, mv: Move) -> Result<GameStatus, MoveError> {
        if self.game_over {
            return Err(MoveError::GameOver);
        }
        let Some((color, _)) = self.board.get(mv.from) else {
            return Err(MoveError::EmptySquare { at: mv.from });
        };
        if color != self.side_to_move {
            return Err(MoveError::WrongSide {
                at: mv.from,
                side_to_move: self.side_to_move,
            });
        }
        let is_legal = self
            .legal_moves(mv.from)
            .is_some_and(|legal| legal.contains(mv));
        if !is_legal {
            return Err(MoveError::NotLegal { mv });
        }

        let _ = self.board.make(mv);
        self.side_to_move = self.side_to_move.opponent();

        let white = self.status_of(Color::White);
        let black = self.status_of(Color::Black);
        self.game_over = is_terminal(white) || is_terminal(black);

        let status = match self.side_to_move {
            Color::White => white,
            Color::Black => black,
        }
        .unwrap_or(GameStatus::InProgress);

        #[cfg(feature = "logging")]
        {
            debug!("applied {mv}: {status}");
            if self.game_over {
                debug!("game over");
            }
        }

        Ok(status)
    }

    /// True iff the king of `color` is attacked by an opposing piece's
    /// pseudo-legal moves. Fails when that king is missing: a kingless
    /// board is corrupted data, not a game outcome.
    pub fn is_in_check(&self, color: Color) -> Result<bool, BoardStateError> {
        self.check_state(color)
            .ok_or(BoardStateError::MissingKing { color })
    }

    /// In check with zero legal moves across all of the side's pieces.
    pub fn is_in_checkmate(&self, color: Color) -> Result<bool, BoardStateError> {
        Ok(self.is_in_check(color)? && !self.has_any_legal_move(color))
    }

    /// Not in check, with zero legal moves across all of the side's pieces.
    pub fn is_in_stalemate(&self, color: Color) -> Result<bool, BoardStateError> {
        Ok(!self.is_in_check(color)? && !self.has_any_legal_move(color))
    }

    /// Standing of the side to move.
    pub fn status(&self) -> Result<GameStatus, BoardStateError> {
        self.status_of(self.side_to_move)
            .ok_or(BoardStateError::MissingKing {
                color: self.side_to_move,
            })
    }

    fn check_state(&self, color: Color) -> Option<bool> {
        let king = self.board.king_square(color)?;
        Some(self.board.is_square_attacked(king, color.opponent()))
    }

    fn status_of(&self, color: Color) -> Option<GameStatus> {
        let in_check = self.check_state(color)?;
        let has_moves = self.has_any_legal_move(color);
        Some(match (in_check, has_moves) {
            (true, false) => GameStatus::Checkmate(color),
            (false, false) => GameStatus::Stalemate(color),
            (true, true) => GameStatus::Check(color),
            (false, true) => GameStatus::InProgress,
        })
    }

    fn has_any_legal_move(&self, color: Color) -> bool {
        for row in 1..=8 {
            for col in 1..=8 {
                let pos = Position::new(row, col);
                match self.board.get(pos) {
                    Some((occupant, _)) if occupant == color => {
                        if self.legal_moves(pos).is_some_and(|m| !m.is_empty()) {
                            return true;
                        }
                    }
                    _ => {}
                }
            }
        }
        false
    }

    fn detect_game_over(&self) -> bool {
        Color::BOTH
            .iter()
            .any(|&color| is_terminal(self.status_of(color)))
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
