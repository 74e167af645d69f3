use blocky::core::{Board, Piece};
use blocky::types::{Direction, PieceKind, Position};
use blocky::Engine;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_step(c: &mut Criterion) {
    let mut engine = Engine::with_seed(12345);

    c.bench_function("engine_step", |b| {
        b.iter(|| {
            if engine.is_game_over() {
                engine.restart();
            }
            black_box(engine.step().unwrap());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("delete_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for row in 16..20 {
                for col in 0..10 {
                    board.set(row, col, true);
                }
            }
            let rows = board.completed_rows();
            board.delete_rows(black_box(&rows));
        })
    });
}

fn bench_collides(c: &mut Criterion) {
    let board = Board::from_rows(&["##.#######", "#.########", "##########"]);
    let piece = Piece::new(PieceKind::T, Position::new(15, 3));

    c.bench_function("collides", |b| {
        b.iter(|| board.collides(black_box(&piece.layout()), black_box(piece.position())))
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut engine = Engine::with_seed(12345);
    engine.set_direction(Direction::None);
    engine.step().unwrap();

    c.bench_function("rotate_piece", |b| {
        b.iter(|| {
            engine.rotate_piece(black_box(true));
        })
    });
}

criterion_group!(
    benches,
    bench_step,
    bench_line_clear,
    bench_collides,
    bench_rotate
);
criterion_main!(benches);
