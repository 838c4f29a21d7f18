//! Terminal rendering for blockfall.
//!
//! A board snapshot is drawn into a plain framebuffer ([`GameView`]), which a
//! [`TerminalRenderer`] then flushes to the terminal by diffing against the last frame.
//! Board cells are two columns wide to keep them roughly square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
