//! Property-based tests using proptest.

use crate::board::{Game, Move, Position};
use proptest::prelude::*;

/// Strategy to generate a random playout length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Every legal move of the side to move, gathered square by square.
fn all_legal_moves(game: &Game) -> Vec<Move> {
    let mut moves = Vec::new();
    for row in 1..=8 {
        for col in 1..=8 {
            let pos = Position::new(row, col);
            if let Some((color, _)) = game.board().get(pos) {
                if color == game.side_to_move() {
                    if let Some(legal) = game.legal_moves(pos) {
                        moves.extend(legal.iter().copied());
                    }
                }
            }
        }
    }
    moves
}

proptest! {
    /// Property: a random playout only ever applies accepted moves, never
    /// leaves the mover in check, and never produces an off-board move.
    #[test]
    fn prop_random_playout_stays_consistent(seed in seed_strategy(), num_moves in move_count_strategy()) {
        use rand::prelude::*;

        let mut game = Game::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            if game.is_game_over() {
                break;
            }
            let mover = game.side_to_move();
            let moves = all_legal_moves(&game);
            if moves.is_empty() {
                break;
            }
            for mv in &moves {
                prop_assert!(mv.from.is_on_board() && mv.to.is_on_board(),
                    "off-board move {mv} generated");
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            prop_assert!(game.apply_move(mv).is_ok(), "legal move {mv} was rejected");
            prop_assert_eq!(game.is_in_check(mover), Ok(false),
                "move {} left {} in check", mv, mover);
        }
    }

    /// Property: trialing a candidate with make followed by unmake restores
    /// the board exactly.
    #[test]
    fn prop_make_unmake_restores_board(seed in seed_strategy(), num_moves in move_count_strategy()) {
        use rand::prelude::*;

        let mut game = Game::new();
        let mut rng = StdRng::seed_from_u64(seed);

        // Walk to a random reachable position.
        for _ in 0..num_moves {
            let moves = all_legal_moves(&game);
            if game.is_game_over() || moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            game.apply_move(mv).unwrap();
        }

        let reference = game.board().clone();
        let mut scratch = game.board().clone();
        for mv in all_legal_moves(&game) {
            let info = scratch.make(mv).unwrap();
            scratch.unmake(mv, info);
            prop_assert_eq!(&scratch, &reference, "board not restored after {}", mv);
        }
    }

    /// Property: legal move generation is deterministic for a fixed input.
    #[test]
    fn prop_legal_moves_deterministic(seed in seed_strategy(), num_moves in move_count_strategy()) {
        use rand::prelude::*;

        let mut game = Game::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let moves = all_legal_moves(&game);
            if game.is_game_over() || moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            game.apply_move(mv).unwrap();
        }

        prop_assert_eq!(all_legal_moves(&game), all_legal_moves(&game));
    }

    /// Property: a rejected move never mutates the game.
    #[test]
    fn prop_rejected_moves_are_atomic(
        from_row in 0..10i8,
        from_col in 0..10i8,
        to_row in 0..10i8,
        to_col in 0..10i8
    ) {
        let mut game = Game::new();
        let before = game.clone();
        let mv = Move::new(
            Position::new(from_row, from_col),
            Position::new(to_row, to_col),
        );

        let own_piece = game
            .board()
            .get(mv.from)
            .is_some_and(|(color, _)| color == game.side_to_move());
        let is_legal = own_piece
            && game
                .legal_moves(mv.from)
                .is_some_and(|legal| legal.contains(mv));
        let result = game.apply_move(mv);

        if is_legal {
            prop_assert!(result.is_ok());
        } else {
            prop_assert!(result.is_err());
            prop_assert_eq!(&game, &before);
        }
    }
}
