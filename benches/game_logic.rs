use blockfall::core::{Board, BoardPos, EngineConfig, GameEngine, GameSnapshot};
use blockfall::term::{FrameBuffer, GameView, Viewport};
use blockfall::types::{ColorIndex, Direction};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_drop_one_step(c: &mut Criterion) {
    let mut game = GameEngine::with_seed(EngineConfig::default(), 12345);

    c.bench_function("drop_one_step", |b| {
        b.iter(|| {
            if game.is_game_over() {
                game.reset();
            }
            black_box(game.drop_one_step());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let rows: Vec<BoardPos> = (16..20)
        .flat_map(|y| (0..10).map(move |x| (x, y)))
        .collect();

    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new(10, 20);
            board.settle(&rows, ColorIndex(2));
            black_box(board.clear_full_rows_from_bottom());
        })
    });
}

fn bench_move_horizontal(c: &mut Criterion) {
    let mut game = GameEngine::with_seed(EngineConfig::default(), 12345);
    let mut direction = Direction::Left;

    c.bench_function("move_horizontal", |b| {
        b.iter(|| {
            if !game.move_horizontal(black_box(direction)) {
                direction = match direction {
                    Direction::Left => Direction::Right,
                    Direction::Right => Direction::Left,
                };
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut game = GameEngine::with_seed(EngineConfig::default(), 12345);
    game.drop_one_step();
    game.drop_one_step();

    c.bench_function("rotate", |b| {
        b.iter(|| {
            black_box(game.rotate());
        })
    });
}

fn bench_snapshot_and_render(c: &mut Criterion) {
    let game = GameEngine::with_seed(EngineConfig::default(), 12345);
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            game.snapshot_into(black_box(&mut snap));
        })
    });

    c.bench_function("render_into", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), Viewport::new(80, 24), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_drop_one_step,
    bench_line_clear,
    bench_move_horizontal,
    bench_rotate,
    bench_snapshot_and_render
);
criterion_main!(benches);
