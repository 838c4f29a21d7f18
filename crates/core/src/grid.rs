//! Grid module - the locked cells of the playfield
//!
//! The grid is a 10x18 map from `(column, row)` to the kind of the piece that locked there.
//! It uses a flat row-major array so lookups and clears never allocate.
//! Coordinates: column 0..9 (left to right), row 0..17 (top to bottom).

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, Pos, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the grid
const GRID_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices of full rows, top to bottom
pub type FullRows = ArrayVec<i8, { BOARD_HEIGHT as usize }>;

/// Locked cells, keyed by position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockedCells {
    /// Row-major (row * WIDTH + column)
    cells: [Cell; GRID_SIZE],
}

impl LockedCells {
    /// Create an empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    #[inline(always)]
    fn index((x, y): Pos) -> Option<usize> {
        if !Self::in_bounds((x, y)) {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Whether a position lies on the grid
    #[inline(always)]
    pub fn in_bounds((x, y): Pos) -> bool {
        x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8
    }

    /// Kind locked at a position; `None` for empty or off-grid positions
    pub fn get(&self, pos: Pos) -> Cell {
        Self::index(pos).and_then(|idx| self.cells[idx])
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.get(pos).is_some()
    }

    /// Lock a single cell. Returns false (and changes nothing) if the position is off-grid.
    pub fn insert(&mut self, pos: Pos, kind: PieceKind) -> bool {
        match Self::index(pos) {
            Some(idx) => {
                self.cells[idx] = Some(kind);
                true
            }
            None => false,
        }
    }

    /// A position a piece may occupy: on the grid and not locked
    pub fn is_free(&self, pos: Pos) -> bool {
        matches!(Self::index(pos), Some(idx) if self.cells[idx].is_none())
    }

    /// Whether every one of `cells` is free
    pub fn fits(&self, cells: &[Pos]) -> bool {
        cells.iter().all(|&pos| self.is_free(pos))
    }

    /// Whether any of `cells` is already locked
    pub fn overlaps(&self, cells: &[Pos]) -> bool {
        cells.iter().any(|&pos| self.contains(pos))
    }

    pub fn len(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Iterate `(position, kind)` over every locked cell
    pub fn iter(&self) -> impl Iterator<Item = (Pos, PieceKind)> + '_ {
        self.cells.iter().enumerate().filter_map(|(idx, cell)| {
            let kind = (*cell)?;
            let x = (idx % BOARD_WIDTH as usize) as i8;
            let y = (idx / BOARD_WIDTH as usize) as i8;
            Some(((x, y), kind))
        })
    }

    /// Cells of one row
    pub fn row(&self, y: i8) -> &[Cell] {
        if y < 0 || y >= BOARD_HEIGHT as i8 {
            return &[];
        }
        let start = (y as usize) * (BOARD_WIDTH as usize);
        &self.cells[start..start + BOARD_WIDTH as usize]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: i8) -> bool {
        let row = self.row(y);
        !row.is_empty() && row.iter().all(|cell| cell.is_some())
    }

    /// Indices of every full row, top to bottom
    pub fn full_rows(&self) -> FullRows {
        (0..BOARD_HEIGHT as i8)
            .filter(|&y| self.is_row_full(y))
            .collect()
    }

    /// Remove every full row and compact the rows above it.
    ///
    /// Full rows need not be adjacent. Each surviving row `j` moves down by the number of full
    /// rows strictly below it. Returns the rows that were removed, top to bottom.
    pub fn clear_full_rows(&mut self) -> FullRows {
        let full = self.full_rows();
        if full.is_empty() {
            return full;
        }

        let width = BOARD_WIDTH as usize;
        let mut next = [None; GRID_SIZE];
        for y in 0..BOARD_HEIGHT as i8 {
            if full.contains(&y) {
                continue;
            }
            let drop = full.iter().filter(|&&k| k > y).count();
            let src = (y as usize) * width;
            let dst = (y as usize + drop) * width;
            next[dst..dst + width].copy_from_slice(&self.cells[src..src + width]);
        }
        self.cells = next;

        full
    }
}

impl Default for LockedCells {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<(Pos, PieceKind)> for LockedCells {
    /// Off-grid positions are skipped.
    fn from_iter<I: IntoIterator<Item = (Pos, PieceKind)>>(iter: I) -> Self {
        let mut grid = Self::new();
        for (pos, kind) in iter {
            grid.insert(pos, kind);
        }
        grid
    }
}
