//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used by the
//! rules engine, the terminal renderer and the input mapping alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 18 rows (indexed 0-17, row 0 is the top)
//! - **Spawn shift**: (4, 0) for every piece
//!
//! # Gravity
//!
//! The tick interval for a level is `GRAVITY_BASE_MS / (level + GRAVITY_LEVEL_OFFSET)`:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 500ms |
//! | 2 | 400ms |
//! | 3 | 333ms |
//! | 7 | 200ms |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//!
//! let action = GameAction::from_str("hardDrop").unwrap();
//! assert_eq!(action, GameAction::HardDrop);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 18);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (18 rows)
pub const BOARD_HEIGHT: u8 = 18;

/// Translation applied to a freshly spawned piece's base shape.
pub const SPAWN_SHIFT: Pos = (4, 0);

/// Base duration divided by `level + offset` to get the gravity interval.
pub const GRAVITY_BASE_MS: u64 = 2000;

/// Offset added to the level before dividing the gravity base duration.
pub const GRAVITY_LEVEL_OFFSET: u32 = 3;

/// Lines needed to advance one level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear scoring table.
///
/// Base points for clearing N rows with one lock, multiplied by the current level:
/// - 1 row: 40
/// - 2 rows: 100
/// - 3 rows: 300
/// - 4 rows: 1200
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// An absolute or relative grid position as `(column, row)`.
pub type Pos = (i8, i8);

/// The four cells of a piece.
pub type Shape = [Pos; 4];

/// A cell on the game board: `None` when empty, otherwise the kind of the piece that locked there.
pub type Cell = Option<PieceKind>;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The seven tetromino piece kinds
///
/// Each kind carries a fixed display color:
/// - **L**: blue
/// - **J**: magenta
/// - **T**: yellow
/// - **I**: orange
/// - **S**: cyan
/// - **Z**: green
/// - **O**: red
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    L,
    J,
    T,
    I,
    S,
    Z,
    O,
}

impl PieceKind {
    /// Every kind, in the order the random source indexes them.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::L,
        PieceKind::J,
        PieceKind::T,
        PieceKind::I,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::O,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "t" => Some(PieceKind::T),
            "i" => Some(PieceKind::I),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "o" => Some(PieceKind::O),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::T => "t",
            PieceKind::I => "i",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::O => "o",
        }
    }

    /// Display color of the kind.
    pub fn color(&self) -> Rgb {
        match self {
            PieceKind::L => Rgb::new(0, 0, 255),
            PieceKind::J => Rgb::new(230, 0, 255),
            PieceKind::T => Rgb::new(255, 255, 0),
            PieceKind::I => Rgb::new(255, 77, 0),
            PieceKind::S => Rgb::new(0, 255, 255),
            PieceKind::Z => Rgb::new(0, 255, 0),
            PieceKind::O => Rgb::new(255, 0, 0),
        }
    }
}

/// Player actions understood by the board
///
/// Gravity is not an action: it arrives through gravity tickets, see the core crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, scoring one point on success
    SoftDrop,
    /// Rotate piece one step
    Rotate,
    /// Drop piece to the lowest legal position and lock it
    HardDrop,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("ROTATE"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotate" => Some(GameAction::Rotate),
            "harddrop" => Some(GameAction::HardDrop),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
            GameAction::HardDrop => "hardDrop",
        }
    }
}
