//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. Terminal key repeat drives
//! held keys; there is no separate auto-shift timing.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
