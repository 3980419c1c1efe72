//! Read-only copy of everything a renderer needs for one frame.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::pieces::{BoardPos, Piece};
use crate::types::{Cell, ColorIndex, GameStatus, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "camelCase"))]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: usize,
    pub x: i32,
    pub y: i32,
    pub cells: [BoardPos; 4],
    pub color: ColorIndex,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind(),
            rotation: value.rotation(),
            x: value.x,
            y: value.y,
            cells: value.occupied_cells(),
            color: value.color(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "camelCase"))]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    /// Row-major settled cells
    pub board: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub level: u32,
    pub status: GameStatus,
}

impl GameSnapshot {
    /// Settled cell at `(x, y)`; `None` for empty or outside the board
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.board.get(y * self.width + x).copied().flatten()
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }
}
