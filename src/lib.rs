//! Blockfall (workspace facade crate).
//!
//! Re-exports the engine, input, and terminal crates under one name so the
//! binary, benches, and integration tests share a single import path
//! (`blockfall::core`, `blockfall::input`, ...). Runtime configuration and log
//! setup for the binary live here too.

pub mod config;
pub mod logging;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub use config::Config;
