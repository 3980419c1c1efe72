//! Game engine - the state machine tying board, piece and score together
//!
//! Every gameplay operation follows the same pattern: build the tentative
//! piece, test it with [`GameEngine::would_collide`], and commit only if it
//! fits. A rejected move leaves the engine exactly as it was, so callers never
//! observe a half-applied step.
//!
//! Gravity is not driven from in here. The frontend's clock calls
//! [`GameEngine::drop_one_step`] at whatever cadence the level asks for.

use log::{debug, info, trace};

use crate::board::Board;
use crate::pieces::{random_kind, Piece};
use crate::rng::{RandomSource, SimpleRng};
use crate::scoring::line_clear_score;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{
    Direction, GameAction, GameStatus, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_LEVEL,
};

/// Board dimensions and starting level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub width: usize,
    pub height: usize,
    pub level: u32,
}

impl EngineConfig {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            level: DEFAULT_LEVEL,
        }
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_WIDTH as usize, DEFAULT_BOARD_HEIGHT as usize)
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameEngine<R = SimpleRng> {
    config: EngineConfig,
    board: Board,
    active: Piece,
    score: u32,
    status: GameStatus,
    rng: R,
}

impl GameEngine<SimpleRng> {
    /// Engine driven by the built-in LCG
    pub fn with_seed(config: EngineConfig, seed: u32) -> Self {
        Self::new(config, SimpleRng::new(seed))
    }
}

impl<R: RandomSource> GameEngine<R> {
    /// Create an engine on an empty board and spawn the first piece
    ///
    /// Panics on a zero dimension or a zero level.
    pub fn new(config: EngineConfig, rng: R) -> Self {
        let board = Board::new(config.width, config.height);
        Self::start(config, board, rng)
    }

    /// Start a game on a board that already has settled cells
    ///
    /// `reset` still returns to an empty board of the same size.
    pub fn with_board(board: Board, level: u32, rng: R) -> Self {
        let config = EngineConfig::new(board.width(), board.height()).with_level(level);
        Self::start(config, board, rng)
    }

    fn start(config: EngineConfig, board: Board, mut rng: R) -> Self {
        assert!(config.level > 0, "level must be positive");
        let active = roll_piece(board.width(), &mut rng);
        let mut engine = Self {
            config,
            board,
            active,
            score: 0,
            status: GameStatus::Running,
            rng,
        };
        engine.install_piece(active);
        engine
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.config.level
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// Whether `piece` would leave the board or overlap a settled cell
    pub fn would_collide(&self, piece: &Piece) -> bool {
        piece
            .occupied_cells()
            .iter()
            .any(|&(x, y)| !self.board.is_free(x, y))
    }

    /// Whether the active piece currently collides
    pub fn collides(&self) -> bool {
        self.would_collide(&self.active)
    }

    /// Replace the active piece with a fresh random one at the spawn point
    ///
    /// Only a freeze or a reset spawns. Returns false (and ends the game) if
    /// the new piece does not fit; does nothing once the game is over.
    fn spawn_piece(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }
        let piece = roll_piece(self.board.width(), &mut self.rng);
        self.install_piece(piece)
    }

    fn install_piece(&mut self, piece: Piece) -> bool {
        self.active = piece;
        if self.collides() {
            self.status = GameStatus::GameOver;
            info!(
                "game over: {:?} cannot spawn at ({}, {}), final score {}",
                piece.kind(),
                piece.x,
                piece.y,
                self.score
            );
            return false;
        }
        debug!("spawned {:?} at ({}, {})", piece.kind(), piece.x, piece.y);
        true
    }

    fn try_commit(&mut self, tentative: Piece) -> bool {
        if self.would_collide(&tentative) {
            trace!(
                "rejected {:?} rotation {} at ({}, {})",
                tentative.kind(),
                tentative.rotation(),
                tentative.x,
                tentative.y
            );
            return false;
        }
        self.active = tentative;
        true
    }

    /// Move the active piece down one row
    ///
    /// If it cannot move, it freezes in place and false is returned.
    pub fn drop_one_step(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }
        if self.try_commit(self.active.translated(0, 1)) {
            return true;
        }
        self.freeze();
        false
    }

    /// Shift the active piece one column; walls and settled cells just block it
    pub fn move_horizontal(&mut self, direction: Direction) -> bool {
        if self.is_game_over() {
            return false;
        }
        self.try_commit(self.active.translated(direction.dx(), 0))
    }

    /// Advance the active piece to its next rotation state if it fits
    pub fn rotate(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }
        self.try_commit(self.active.rotated())
    }

    /// Settle the active piece, clear rows, score, and spawn the next piece
    fn freeze(&mut self) -> usize {
        let piece = self.active;
        self.board.settle(&piece.occupied_cells(), piece.color());

        let cleared = self.board.clear_full_rows_from_bottom();
        let points = line_clear_score(cleared);
        self.score = self.score.saturating_add(points);
        if cleared > 0 {
            info!(
                "cleared {} row(s) for {} points, score {}",
                cleared, points, self.score
            );
        }

        self.spawn_piece();
        cleared
    }

    /// Start over with an empty board of the same size and level
    pub fn reset(&mut self) {
        self.board = Board::new(self.config.width, self.config.height);
        self.score = 0;
        self.status = GameStatus::Running;
        info!(
            "reset {}x{} board at level {}",
            self.config.width, self.config.height, self.config.level
        );
        self.spawn_piece();
    }

    /// Apply a frontend action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_horizontal(Direction::Left),
            GameAction::MoveRight => self.move_horizontal(Direction::Right),
            GameAction::Rotate => self.rotate(),
            GameAction::SoftDrop => self.drop_one_step(),
            GameAction::Reset => {
                self.reset();
                true
            }
        }
    }

    /// Copy the renderable state into `out`, reusing its board allocation
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());
        out.active = Some(ActiveSnapshot::from(self.active));
        out.score = self.score;
        out.level = self.config.level;
        out.status = self.status;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameEngine<SimpleRng> {
    fn default() -> Self {
        Self::with_seed(EngineConfig::default(), 1)
    }
}

/// A random piece at the spawn point: centered box, top row
fn roll_piece(width: usize, rng: &mut impl RandomSource) -> Piece {
    let kind = random_kind(rng);
    Piece::create(kind, width as i32 / 2 - 1, 0, rng)
}
