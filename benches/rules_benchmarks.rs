//! Benchmarks for the legality filter and terminal detection.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chess_rules::board::{Game, Move, Position};

fn mv(from_row: i8, from_col: i8, to_row: i8, to_col: i8) -> Move {
    Move::new(
        Position::new(from_row, from_col),
        Position::new(to_row, to_col),
    )
}

/// An open middlegame-ish position reached by a fixed move sequence.
fn open_position() -> Game {
    let mut game = Game::new();
    for m in [
        mv(2, 5, 4, 5), // e4
        mv(7, 5, 5, 5), // e5
        mv(1, 7, 3, 6), // Nf3
        mv(8, 2, 6, 3), // Nc6
        mv(1, 6, 4, 3), // Bc4
        mv(8, 7, 6, 6), // Nf6
    ] {
        game.apply_move(m).expect("scripted move should be legal");
    }
    game
}

fn bench_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_moves");

    let startpos = Game::new();
    group.bench_function("startpos_all_pieces", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for row in 1..=8 {
                for col in 1..=8 {
                    let pos = Position::new(row, col);
                    if let Some(moves) = startpos.legal_moves(black_box(pos)) {
                        total += moves.len();
                    }
                }
            }
            total
        })
    });

    let open = open_position();
    group.bench_function("open_position_all_pieces", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for row in 1..=8 {
                for col in 1..=8 {
                    let pos = Position::new(row, col);
                    if let Some(moves) = open.legal_moves(black_box(pos)) {
                        total += moves.len();
                    }
                }
            }
            total
        })
    });

    group.finish();
}

fn bench_apply_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_move");

    group.bench_function("e2e4", |b| {
        b.iter(|| {
            let mut game = Game::new();
            game.apply_move(black_box(mv(2, 5, 4, 5)))
        })
    });

    group.finish();
}

fn bench_terminal_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("status");

    let open = open_position();
    group.bench_function("open_position", |b| b.iter(|| black_box(&open).status()));

    group.finish();
}

criterion_group!(
    benches,
    bench_legal_moves,
    bench_apply_move,
    bench_terminal_detection
);
criterion_main!(benches);
