//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and forwards
//! them to the game only when its current phase accepts them.

pub mod adapter;
pub mod map;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use adapter::{Dispatch, InputAdapter};
pub use map::{handle_key_event, should_quit};
