//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the whole rule set of the falling-block game and nothing
//! else: no terminal, no clock, no global randomness.
//!
//! - **Deterministic**: the same [`RandomSource`] sequence produces the same game
//! - **Synchronous**: every operation completes immediately and is either fully
//!   applied or not applied at all
//! - **Portable**: renderers read a [`GameSnapshot`], input layers call
//!   [`GameEngine`] operations
//!
//! # Module Structure
//!
//! - [`pieces`]: shape catalog and the falling [`Piece`]
//! - [`board`]: settled cells, occupancy tests, row elimination
//! - [`engine`]: spawn/drop/move/rotate/freeze/reset state machine
//! - [`scoring`]: points per freeze
//! - [`rng`]: injectable randomness
//! - [`snapshot`]: per-frame read model for renderers
//!
//! # Example
//!
//! ```
//! use blockfall_core::{EngineConfig, GameEngine};
//! use blockfall_core::types::{Direction, GameStatus};
//!
//! let mut game = GameEngine::with_seed(EngineConfig::new(10, 20), 12345);
//!
//! game.move_horizontal(Direction::Left);
//! game.rotate();
//! while game.drop_one_step() {}
//!
//! // The first piece has settled and a new one is falling.
//! assert_eq!(game.board().filled_count(), 4);
//! assert_eq!(game.status(), GameStatus::Running);
//! ```

pub mod board;
pub mod engine;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

pub use board::Board;
pub use engine::{EngineConfig, GameEngine};
pub use pieces::{get_shape, rotation_states, BoardPos, Piece, RotationState};
pub use rng::{RandomSource, SimpleRng};
pub use scoring::line_clear_score;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
