//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state management. It has
//! **zero dependencies** on UI or terminal I/O, which makes it:
//!
//! - **Deterministic**: Same seed (or piece sequence) produces identical games
//! - **Testable**: Every rule is reachable without a terminal
//! - **Portable**: Any front end can drive it through [`GameState`] and read it
//!   back through [`GameSnapshot`]
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid, line detection and compaction
//! - [`pieces`]: shape matrices, spawn positions, naive clockwise rotation
//! - [`collision`]: the legality check used before every commit
//! - [`rng`]: seeded uniform piece generation and fixed sequences
//! - [`scoring`]: fixed 0/100/300/500/800 line-clear table
//! - [`game_state`]: the Active / Paused / GameOver state machine
//! - [`snapshot`]: read-only copy for renderers
//! - [`timer`]: fixed-interval tick timer that only runs while Active
//!
//! # Game Rules
//!
//! - Pieces are drawn uniformly at random from the seven shapes
//! - Rotation transposes the shape matrix; illegal rotations are rejected (no wall kicks)
//! - A piece that cannot fall on a tick locks immediately (no lock delay)
//! - Hard drop falls as far as possible and locks at once
//! - The game ends when a freshly spawned piece collides
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! // Nothing was completed on an empty board.
//! assert_eq!(game.score(), 0);
//! assert!(game.board().filled_count() > 0);
//! ```

pub mod board;
pub mod collision;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod timer;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, BoardGrid};
pub use collision::{check_collision, drop_distance};
pub use game_state::{GamePhase, GameState, LockEvent};
pub use pieces::{canonical_shape, ShapeMatrix, Tetromino};
pub use rng::{PieceSource, RandomPieces, SequencePieces, SimpleRng};
pub use scoring::{calculate_score, line_clear_points};
pub use snapshot::GameSnapshot;
pub use timer::TickTimer;
