//! Piece module - tetromino shapes and rotation policies
//!
//! A [`Piece`] is a fixed kind plus a mutable placement: a base shape (the four cells relative to
//! the piece's local origin in its current rotation state) and a shift that places it on the grid.
//!
//! Movement and rotation follow a two-phase protocol. `test_*` computes the cells the piece
//! *would* occupy without touching it; the board validates those cells and only then calls the
//! matching `confirm_*`.
//!
//! Rotation depends on the kind:
//! - **Pivot** (L, J, T): every cell `(x, y)` becomes `(-y, x)`, a quarter turn about the origin
//! - **Toggle** (I, S, Z): alternates between two precomputed states
//! - **Fixed** (O): never changes

use crate::types::{PieceKind, Pos, Rgb, Shape, SPAWN_SHIFT};

/// How a piece kind rotates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationPolicy {
    Pivot,
    Toggle(&'static [Shape; 2]),
    Fixed,
}

const L_SHAPE: Shape = [(-1, 0), (0, 0), (1, 0), (-1, 1)];
const J_SHAPE: Shape = [(-1, 0), (0, 0), (1, 0), (1, 1)];
const T_SHAPE: Shape = [(-1, 0), (0, 0), (1, 0), (0, 1)];
const O_SHAPE: Shape = [(0, 0), (0, 1), (1, 0), (1, 1)];

const I_STATES: [Shape; 2] = [
    [(-1, 0), (0, 0), (1, 0), (2, 0)],
    [(0, -1), (0, 0), (0, 1), (0, 2)],
];
const S_STATES: [Shape; 2] = [
    [(0, 0), (1, 0), (-1, 1), (0, 1)],
    [(0, -1), (0, 0), (1, 0), (1, 1)],
];
const Z_STATES: [Shape; 2] = [
    [(-1, 0), (0, 0), (0, 1), (1, 1)],
    [(1, -1), (0, 0), (1, 0), (0, 1)],
];

/// Rotation policy for a piece kind
pub fn rotation_policy(kind: PieceKind) -> RotationPolicy {
    match kind {
        PieceKind::L | PieceKind::J | PieceKind::T => RotationPolicy::Pivot,
        PieceKind::I => RotationPolicy::Toggle(&I_STATES),
        PieceKind::S => RotationPolicy::Toggle(&S_STATES),
        PieceKind::Z => RotationPolicy::Toggle(&Z_STATES),
        PieceKind::O => RotationPolicy::Fixed,
    }
}

/// Base shape of a freshly spawned piece
pub fn spawn_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::L => L_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::I => I_STATES[0],
        PieceKind::S => S_STATES[0],
        PieceKind::Z => Z_STATES[0],
        PieceKind::O => O_SHAPE,
    }
}

#[inline(always)]
fn translate(shape: &Shape, (dx, dy): Pos) -> Shape {
    shape.map(|(x, y)| (x + dx, y + dy))
}

#[inline(always)]
fn checked_offset((x, y): Pos, (dx, dy): Pos) -> Option<Pos> {
    Some((x.checked_add(dx)?, y.checked_add(dy)?))
}

#[inline(always)]
fn quarter_turn(shape: &Shape) -> Shape {
    shape.map(|(x, y)| (-y, x))
}

/// A falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    base: Shape,
    shift: Pos,
    /// Index into the two stored states of a toggle piece; unused otherwise.
    parity: u8,
}

impl Piece {
    /// Create a piece in its spawn state and position
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            base: spawn_shape(kind),
            shift: SPAWN_SHIFT,
            parity: 0,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> Rgb {
        self.kind.color()
    }

    /// Cells relative to the piece origin in the current rotation state
    pub fn base(&self) -> Shape {
        self.base
    }

    pub fn shift(&self) -> Pos {
        self.shift
    }

    /// Absolute cells the piece occupies
    pub fn occupying(&self) -> Shape {
        translate(&self.base, self.shift)
    }

    /// Cells the piece would occupy after moving by `delta`.
    ///
    /// `None` when a coordinate would leave the `i8` range; such a move can never be legal.
    pub fn test_move(&self, delta: Pos) -> Option<Shape> {
        let shift = checked_offset(self.shift, delta)?;
        let mut cells = self.base;
        for cell in cells.iter_mut() {
            *cell = checked_offset(*cell, shift)?;
        }
        Some(cells)
    }

    /// Commit a move previously checked with [`Piece::test_move`]. An overflowing delta is ignored.
    pub fn confirm_move(&mut self, delta: Pos) {
        if let Some(shift) = checked_offset(self.shift, delta) {
            self.shift = shift;
        }
    }

    /// Cells the piece would occupy after one rotation step
    pub fn test_rotate(&self) -> Shape {
        translate(&self.rotated_base(), self.shift)
    }

    /// Commit a rotation previously checked with [`Piece::test_rotate`]
    pub fn confirm_rotate(&mut self) {
        self.base = self.rotated_base();
        if let RotationPolicy::Toggle(_) = rotation_policy(self.kind) {
            self.parity ^= 1;
        }
    }

    fn rotated_base(&self) -> Shape {
        match rotation_policy(self.kind) {
            RotationPolicy::Pivot => quarter_turn(&self.base),
            RotationPolicy::Toggle(states) => states[usize::from(self.parity ^ 1)],
            RotationPolicy::Fixed => self.base,
        }
    }
}
