//! Shared types and constants
//!
//! Everything in here is plain data with no behavior beyond small
//! conversions, so it can be used by the core, the input layer and the
//! terminal renderer alike.
//!
//! # Board Dimensions
//!
//! The default playfield is 10 columns by 20 rows. Row 0 is the top row and
//! pieces spawn with the top-left corner of their 4x4 box at
//! `(width / 2 - 1, 0)`.
//!
//! # Timing
//!
//! All durations are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frontend fixed timestep (~60 FPS) |
//! | `GRAVITY_BASE_MS` | 500 | Divided by the level to get the gravity interval |
//! | `SOFT_DROP_INTERVAL_MS` | 32 | Drop cadence while the down key is held |
//! | `DEFAULT_DAS_MS` | 150 | Delay before horizontal auto-repeat starts |
//! | `DEFAULT_ARR_MS` | 50 | Interval between horizontal auto-repeats |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{gravity_interval_ms, Direction, DEFAULT_LEVEL};
//!
//! assert_eq!(gravity_interval_ms(DEFAULT_LEVEL), 250);
//! assert_eq!(Direction::Left.dx(), -1);
//! ```

#[cfg(feature = "serde")]
use serde::Serialize;

/// Default board width in cells
pub const DEFAULT_BOARD_WIDTH: u16 = 10;

/// Default board height in cells
pub const DEFAULT_BOARD_HEIGHT: u16 = 20;

/// Starting level; only the gravity cadence depends on it
pub const DEFAULT_LEVEL: u32 = 2;

/// Side length of the box every rotation state fits into
pub const PIECE_BOX_SIZE: i32 = 4;

/// Points for a freeze are `LINE_CLEAR_BASE * cleared^2`
pub const LINE_CLEAR_BASE: u32 = 10;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 1; higher levels divide it
pub const GRAVITY_BASE_MS: u32 = 500;

/// Gravity never fires more often than once per tick
pub const GRAVITY_MIN_MS: u32 = TICK_MS;

/// Drop cadence while the soft-drop key is held
pub const SOFT_DROP_INTERVAL_MS: u32 = 2 * TICK_MS;

/// DAS (Delayed Auto Shift) delay in milliseconds
pub const DEFAULT_DAS_MS: u32 = 150;

/// ARR (Auto Repeat Rate) in milliseconds
pub const DEFAULT_ARR_MS: u32 = 50;

/// Held keys are considered released after this long without a repeat event
pub const KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Milliseconds between gravity drops at `level`.
///
/// Level 0 is treated as level 1.
///
/// ```
/// use blockfall_types::{gravity_interval_ms, GRAVITY_MIN_MS};
///
/// assert_eq!(gravity_interval_ms(1), 500);
/// assert_eq!(gravity_interval_ms(4), 125);
/// assert_eq!(gravity_interval_ms(1000), GRAVITY_MIN_MS);
/// ```
pub fn gravity_interval_ms(level: u32) -> u32 {
    (GRAVITY_BASE_MS / level.max(1)).max(GRAVITY_MIN_MS)
}

/// Opaque color identifier stored in settled cells.
///
/// Indices 0 and 1 are reserved for the background colors of the renderer's
/// palette; pieces only ever carry indices in `FIRST_PIECE..PALETTE_LEN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct ColorIndex(pub u8);

impl ColorIndex {
    /// Number of entries in a palette
    pub const PALETTE_LEN: u8 = 9;

    /// First index usable by pieces
    pub const FIRST_PIECE: u8 = 2;

    /// Number of piece colors
    pub const PIECE_COLORS: u8 = Self::PALETTE_LEN - Self::FIRST_PIECE;

    /// The `n`-th piece color, wrapping around the piece range.
    pub fn piece(n: u32) -> Self {
        Self(Self::FIRST_PIECE + (n % Self::PIECE_COLORS as u32) as u8)
    }

    /// Whether this index may appear in a settled cell
    pub fn is_piece_color(self) -> bool {
        (Self::FIRST_PIECE..Self::PALETTE_LEN).contains(&self.0)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A board cell: empty, or settled with a piece color
pub type Cell = Option<ColorIndex>;

/// The seven tetromino kinds
///
/// - **I**: straight bar
/// - **O**: 2x2 square
/// - **T**: T-shaped
/// - **L** / **J**: L-shaped and its mirror
/// - **S** / **Z**: skew pieces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "lowercase"))]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in the order random selection indexes them
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::L,
        PieceKind::O,
        PieceKind::T,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];
}

/// Horizontal movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "lowercase"))]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Column delta for one step in this direction
    pub fn dx(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Engine lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "camelCase"))]
pub enum GameStatus {
    #[default]
    Running,
    /// Terminal until the engine is reset
    GameOver,
}

/// Player commands the frontend can issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "camelCase"))]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Advance to the next rotation state
    Rotate,
    /// Drop piece one cell down (no score)
    SoftDrop,
    /// Discard the game and start over
    Reset,
}
