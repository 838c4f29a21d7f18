//! blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates under `blockfall::{core,input,term,types}` and adds the
//! pieces that belong to the running program: the gravity [`timer`] and the CLI [`config`].

pub mod config;
pub mod timer;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
