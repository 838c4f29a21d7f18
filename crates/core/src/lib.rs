//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every rule of the game and nothing else. It has **no dependencies** on
//! rendering, terminals, timers or input devices:
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//! - **Total**: illegal moves are ignored, never reported as errors
//! - **Timer-free**: gravity is a policy; the driver owns the actual timer
//!
//! # Module Structure
//!
//! - [`piece`]: tetromino shapes, the test/confirm move protocol and rotation policies
//! - [`grid`]: the 10x18 map of locked cells and line clearing
//! - [`rng`]: single-slot look-ahead piece source
//! - [`scoring`]: points, levels and gravity intervals
//! - [`gravity`]: level-tagged gravity tickets and staleness
//! - [`board`]: the complete game state machine
//! - [`snapshot`]: read-only view consumed by renderers
//!
//! # Game Rules
//!
//! - **Rotation**: L/J/T turn a quarter about their origin, I/S/Z toggle between two states,
//!   O never rotates. There are no wall kicks.
//! - **Locking**: a piece locks only when a downward move is blocked.
//! - **Clearing**: any set of full rows is removed at once, adjacent or not.
//! - **Scoring**: `level * [40, 100, 300, 1200][rows - 1]` per clear, one point per soft drop
//!   step, one point per hard-dropped row.
//! - **Level**: `lines / 10 + 1`.
//! - **Game over**: the freshly spawned piece overlaps a locked cell.
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Board, TickOutcome};
//! use blockfall_types::GameAction;
//!
//! let mut board = Board::new(12345);
//! let gravity = board.take_scheduled().unwrap();
//!
//! board.apply_action(GameAction::MoveLeft);
//! board.apply_action(GameAction::Rotate);
//! assert_eq!(board.tick(gravity), TickOutcome::Rearm);
//!
//! board.apply_action(GameAction::HardDrop);
//! assert!(board.score() > 0); // Hard drop awards points
//! ```

pub mod board;
pub mod gravity;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, LockEvent, DOWN};
pub use gravity::{GravityConfig, GravityScheduler, GravityTicket, TickOutcome};
pub use grid::LockedCells;
pub use piece::{rotation_policy, spawn_shape, Piece, RotationPolicy};
pub use rng::NextPieceSource;
pub use scoring::{
    drop_score, gravity_interval, level_for_lines, line_clear_score, MIN_GRAVITY_INTERVAL,
};
pub use snapshot::{GameSnapshot, PieceSnapshot};
