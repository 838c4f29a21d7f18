//! Plain-data view of a board for renderers.

use crate::piece::Piece;
use crate::types::{Cell, PieceKind, Shape, BOARD_HEIGHT, BOARD_WIDTH};

/// A piece as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    /// Cells relative to the piece origin
    pub base: Shape,
    /// Absolute cells on the grid
    pub cells: Shape,
}

impl From<&Piece> for PieceSnapshot {
    fn from(value: &Piece) -> Self {
        Self {
            kind: value.kind(),
            base: value.base(),
            cells: value.occupying(),
        }
    }
}

impl Default for PieceSnapshot {
    fn default() -> Self {
        Self::from(&Piece::new(PieceKind::O))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Locked cells, indexed `[row][column]`
    pub grid: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub current: PieceSnapshot,
    /// Rows the current piece can still fall (ghost piece offset)
    pub ghost_drop: u8,
    pub next: PieceSnapshot,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            current: PieceSnapshot::default(),
            ghost_drop: 0,
            next: PieceSnapshot::default(),
            score: 0,
            lines: 0,
            level: 1,
            game_over: false,
        }
    }
}
