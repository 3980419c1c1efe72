//! Pieces module - shape catalog and the falling piece
//!
//! Each kind owns an ordered list of rotation states. A rotation state is four
//! `(col, row)` offsets inside a 4x4 box whose top-left corner is the piece
//! origin. Rotation simply steps to the next state in the list; there is no
//! kick search, so a rotation that does not fit is rejected by the engine.

use crate::rng::RandomSource;
use crate::types::{ColorIndex, PieceKind};

/// Offset of a single cell relative to the piece origin
pub type CellOffset = (i8, i8);

/// One orientation of a piece - 4 cell offsets from the origin
pub type RotationState = [CellOffset; 4];

/// Absolute board coordinate `(col, row)`
pub type BoardPos = (i32, i32);

const I_STATES: [RotationState; 2] = [
    [(1, 0), (1, 1), (1, 2), (1, 3)],
    [(0, 1), (1, 1), (2, 1), (3, 1)],
];

const L_STATES: [RotationState; 4] = [
    [(1, 0), (1, 1), (1, 2), (2, 2)],
    [(2, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (2, 0), (2, 1), (2, 2)],
    [(0, 1), (1, 1), (2, 1), (0, 2)],
];

const J_STATES: [RotationState; 4] = [
    [(1, 0), (1, 1), (0, 2), (1, 2)],
    [(0, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (2, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (2, 2)],
];

// Anchored at the box corner so a spawned square sits on columns
// `width/2 - 1` and `width/2`.
const O_STATES: [RotationState; 1] = [[(0, 0), (1, 0), (0, 1), (1, 1)]];

const T_STATES: [RotationState; 4] = [
    [(0, 1), (1, 1), (2, 1), (1, 2)],
    [(1, 0), (1, 1), (1, 2), (2, 1)],
    [(1, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (0, 1), (1, 1), (1, 2)],
];

const S_STATES: [RotationState; 2] = [
    [(1, 0), (2, 0), (0, 1), (1, 1)],
    [(0, 0), (0, 1), (1, 1), (1, 2)],
];

const Z_STATES: [RotationState; 2] = [
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    [(1, 0), (0, 1), (1, 1), (0, 2)],
];

/// Rotation states of `kind`, in rotation order
pub fn rotation_states(kind: PieceKind) -> &'static [RotationState] {
    match kind {
        PieceKind::I => &I_STATES,
        PieceKind::O => &O_STATES,
        PieceKind::T => &T_STATES,
        PieceKind::S => &S_STATES,
        PieceKind::Z => &Z_STATES,
        PieceKind::J => &J_STATES,
        PieceKind::L => &L_STATES,
    }
}

/// Get the shape (cell offsets) for a piece kind and rotation index
///
/// Panics if `rotation` is not a valid index for `kind`.
pub fn get_shape(kind: PieceKind, rotation: usize) -> RotationState {
    let states = rotation_states(kind);
    assert!(
        rotation < states.len(),
        "rotation {} out of range for {:?} ({} states)",
        rotation,
        kind,
        states.len()
    );
    states[rotation]
}

/// Pick a kind uniformly from the catalog
pub fn random_kind(rng: &mut impl RandomSource) -> PieceKind {
    PieceKind::ALL[rng.next_range(PieceKind::ALL.len() as u32) as usize]
}

/// Pick a non-background palette color
pub fn random_color(rng: &mut impl RandomSource) -> ColorIndex {
    ColorIndex::piece(rng.next_range(ColorIndex::PIECE_COLORS as u32))
}

/// The falling piece
///
/// Movement methods are unconditional; whoever owns the piece validates the
/// result against the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    rotation: usize,
    pub x: i32,
    pub y: i32,
    color: ColorIndex,
}

impl Piece {
    /// Create a piece in its first rotation state
    ///
    /// Panics if `color` is a background index.
    pub fn new(kind: PieceKind, x: i32, y: i32, color: ColorIndex) -> Self {
        assert!(color.is_piece_color(), "{:?} is not a piece color", color);
        Self {
            kind,
            rotation: 0,
            x,
            y,
            color,
        }
    }

    /// Create a piece with a random color
    pub fn create(kind: PieceKind, x: i32, y: i32, rng: &mut impl RandomSource) -> Self {
        Self::new(kind, x, y, random_color(rng))
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn rotation(&self) -> usize {
        self.rotation
    }

    pub fn color(&self) -> ColorIndex {
        self.color
    }

    /// Number of rotation states this piece cycles through
    pub fn rotation_count(&self) -> usize {
        rotation_states(self.kind).len()
    }

    /// Offsets for the current rotation
    pub fn shape(&self) -> RotationState {
        get_shape(self.kind, self.rotation)
    }

    /// The four absolute cells covered by the piece
    pub fn occupied_cells(&self) -> [BoardPos; 4] {
        self.shape()
            .map(|(dx, dy)| (self.x + dx as i32, self.y + dy as i32))
    }

    /// Advance to the next rotation state
    pub fn rotate(&mut self) {
        self.rotation = (self.rotation + 1) % self.rotation_count();
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Copy of this piece advanced one rotation state
    pub fn rotated(&self) -> Self {
        let mut next = *self;
        next.rotate();
        next
    }

    /// Copy of this piece moved by `(dx, dy)`
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        let mut next = *self;
        next.translate(dx, dy);
        next
    }
}
