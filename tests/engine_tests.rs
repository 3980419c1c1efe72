//! Engine integration tests
//!
//! Pieces are chosen through a scripted [`RandomSource`] so every test knows
//! exactly which kind spawns next.

use blockfall::core::{Board, BoardPos, EngineConfig, GameEngine, Piece, RandomSource};
use blockfall::types::{ColorIndex, Direction, GameAction, GameStatus, PieceKind};

/// Replays fixed values, then zeros.
struct Scripted {
    values: Vec<u32>,
    next: usize,
}

impl RandomSource for Scripted {
    fn next_u32(&mut self) -> u32 {
        let value = self.values.get(self.next).copied().unwrap_or(0);
        self.next += 1;
        value
    }
}

/// Each spawn draws a kind and then a color; the color is always the first one.
fn script(kinds: &[PieceKind]) -> Scripted {
    let values = kinds
        .iter()
        .flat_map(|&kind| {
            let index = PieceKind::ALL.iter().position(|&k| k == kind).unwrap();
            [index as u32, 0]
        })
        .collect();
    Scripted { values, next: 0 }
}

fn engine(kinds: &[PieceKind]) -> GameEngine<Scripted> {
    GameEngine::new(EngineConfig::new(10, 20), script(kinds))
}

fn engine_on(board: Board, kinds: &[PieceKind]) -> GameEngine<Scripted> {
    GameEngine::with_board(board, 2, script(kinds))
}

/// Fill rows `20 - n ..= 19` of a 10x20 board except column 9.
fn well_with_gap(n: i32) -> Board {
    let mut board = Board::new(10, 20);
    for y in 20 - n..20 {
        let cells: Vec<BoardPos> = (0..9).map(|x| (x, y)).collect();
        board.settle(&cells, ColorIndex(3));
    }
    board
}

/// Slide the vertical bar into column 9 and let it fall until it freezes.
fn drop_bar_into_gap<R: RandomSource>(game: &mut GameEngine<R>) {
    assert_eq!(game.active().kind(), PieceKind::I);
    while game.move_horizontal(Direction::Right) {}
    assert!(game.active().occupied_cells().iter().all(|&(x, _)| x == 9));
    while game.drop_one_step() {}
}

#[test]
fn test_collision_at_boundaries() {
    let game = engine(&[PieceKind::O]);
    let at = |x, y| Piece::new(PieceKind::O, x, y, ColorIndex(2));

    assert!(game.would_collide(&at(-1, 5)));
    assert!(game.would_collide(&at(9, 5)));
    assert!(game.would_collide(&at(4, 19)));
    assert!(!game.would_collide(&at(0, 0)));
    assert!(!game.would_collide(&at(8, 18)));
}

#[test]
fn test_pieces_inside_empty_board_never_collide() {
    let game = engine(&[PieceKind::O]);
    for kind in PieceKind::ALL {
        let mut piece = Piece::new(kind, 0, 0, ColorIndex(2));
        for _ in 0..piece.rotation_count() {
            for x in -3..10 {
                for y in -3..20 {
                    let candidate = piece.translated(x, y);
                    let inside = candidate
                        .occupied_cells()
                        .iter()
                        .all(|&(cx, cy)| (0..10).contains(&cx) && (0..20).contains(&cy));
                    assert_eq!(game.would_collide(&candidate), !inside);
                }
            }
            piece.rotate();
        }
    }
}

#[test]
fn test_square_settles_after_nineteen_drops() {
    let mut game = engine(&[PieceKind::O]);
    assert_eq!((game.active().x, game.active().y), (4, 0));

    for _ in 0..18 {
        assert!(game.drop_one_step());
    }
    assert!(!game.drop_one_step());

    assert_eq!(game.status(), GameStatus::Running);
    assert_eq!(game.board().filled_count(), 4);
    for (x, y) in [(4, 18), (5, 18), (4, 19), (5, 19)] {
        assert!(game.board().is_occupied(x, y), "({}, {}) should be settled", x, y);
    }
    assert_eq!(game.score(), 0);
}

#[test]
fn test_filling_single_gap_clears_row() {
    let mut game = engine_on(well_with_gap(1), &[PieceKind::I]);
    drop_bar_into_gap(&mut game);

    assert_eq!(game.score(), 10);
    // The bar's other three cells remain, shifted down by the cleared row.
    assert_eq!(game.board().filled_count(), 3);
    for y in 17..20 {
        assert!(game.board().is_occupied(9, y));
    }
    assert!(!game.board().is_row_full(19));
}

#[test]
fn test_score_grows_with_square_of_rows_cleared() {
    for (rows, points) in [(1, 10), (2, 40), (3, 90), (4, 160)] {
        let mut game = engine_on(well_with_gap(rows), &[PieceKind::I]);
        drop_bar_into_gap(&mut game);
        assert_eq!(game.score(), points, "{} row(s)", rows);
        assert_eq!(game.board().filled_count(), 4 - rows as usize);
    }
}

#[test]
fn test_freeze_without_clear_scores_nothing() {
    let mut game = engine(&[PieceKind::T, PieceKind::O]);
    while game.drop_one_step() {}
    assert_eq!(game.score(), 0);
    assert_eq!(game.active().kind(), PieceKind::O);
}

#[test]
fn test_blocked_spawn_ends_game_and_freezes_state() {
    // Two cells under the spawn point stop the first square immediately; the
    // next square then has nowhere to go.
    let mut board = Board::new(10, 20);
    board.settle(&[(4, 2), (5, 2)], ColorIndex(4));
    let mut game = engine_on(board, &[PieceKind::O, PieceKind::O]);
    assert_eq!(game.status(), GameStatus::Running);

    assert!(!game.drop_one_step());
    assert_eq!(game.status(), GameStatus::GameOver);
    assert!(game.is_game_over());

    let board_before = game.board().clone();
    let piece_before = *game.active();
    assert!(!game.move_horizontal(Direction::Left));
    assert!(!game.move_horizontal(Direction::Right));
    assert!(!game.rotate());
    assert!(!game.drop_one_step());
    assert_eq!(game.board(), &board_before);
    assert_eq!(*game.active(), piece_before);
    assert_eq!(game.score(), 0);
}

#[test]
fn test_reset_after_game_over_starts_fresh() {
    let mut board = Board::new(10, 20);
    board.settle(&[(4, 2), (5, 2)], ColorIndex(4));
    let mut game = engine_on(board, &[PieceKind::O, PieceKind::O, PieceKind::T]);
    game.drop_one_step();
    assert!(game.is_game_over());

    assert!(game.apply_action(GameAction::Reset));
    assert_eq!(game.status(), GameStatus::Running);
    assert_eq!(game.board().filled_count(), 0);
    assert_eq!((game.board().width(), game.board().height()), (10, 20));
    assert_eq!(game.score(), 0);
    assert_eq!(game.level(), 2);
    assert_eq!(game.active().kind(), PieceKind::T);
}

#[test]
fn test_actions_map_to_operations() {
    let mut game = engine(&[PieceKind::T]);
    assert!(game.apply_action(GameAction::MoveLeft));
    assert_eq!(game.active().x, 3);
    assert!(game.apply_action(GameAction::MoveRight));
    assert_eq!(game.active().x, 4);
    assert!(game.apply_action(GameAction::Rotate));
    assert_eq!(game.active().rotation(), 1);
    assert!(game.apply_action(GameAction::SoftDrop));
    assert_eq!(game.active().y, 1);
}

#[test]
fn test_same_seed_same_game() {
    let mut a = GameEngine::with_seed(EngineConfig::new(10, 20), 99);
    let mut b = GameEngine::with_seed(EngineConfig::new(10, 20), 99);
    for _ in 0..200 {
        a.drop_one_step();
        b.drop_one_step();
    }
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_snapshot_reflects_engine() {
    let game = engine(&[PieceKind::O]);
    let snap = game.snapshot();
    assert_eq!((snap.width, snap.height), (10, 20));
    assert_eq!(snap.board.len(), 200);
    assert_eq!(snap.level, 2);
    let active = snap.active.unwrap();
    assert_eq!(active.kind, PieceKind::O);
    assert_eq!(active.cells, game.active().occupied_cells());
    assert_eq!(active.color, ColorIndex(2));
}
