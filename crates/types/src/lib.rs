//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! Everything here is plain data, usable from the engine, the terminal
//! renderer and the input adapter alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//!
//! Both are compile-time constants; the board never changes size.
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, ShapeType, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! // Parse from string (case-insensitive)
//! let parsed = ShapeType::from_str("t").unwrap();
//! assert_eq!(parsed, ShapeType::T);
//!
//! // Movement actions carry their board delta
//! assert_eq!(GameAction::MoveLeft.delta(), Some((-1, 0)));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Reference gravity period: one row per second.
pub const DEFAULT_TICK_MS: u64 = 1000;

/// Line clear scoring table, indexed by lines cleared in a single lock
/// (clamped to 4).
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
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

/// The seven tetromino shapes
///
/// Each shape has a fixed display color:
/// - **I**: Cyan
/// - **J**: Blue
/// - **L**: Orange
/// - **O**: Yellow
/// - **S**: Green
/// - **T**: Purple
/// - **Z**: Red
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeType {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl ShapeType {
    /// All shapes, in canonical order.
    pub const ALL: [ShapeType; 7] = [
        ShapeType::I,
        ShapeType::J,
        ShapeType::L,
        ShapeType::O,
        ShapeType::S,
        ShapeType::T,
        ShapeType::Z,
    ];

    /// Parse shape type from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::ShapeType;
    ///
    /// assert_eq!(ShapeType::from_str("i"), Some(ShapeType::I));
    /// assert_eq!(ShapeType::from_str("O"), Some(ShapeType::O));
    /// assert_eq!(ShapeType::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeType::I),
            "j" => Some(ShapeType::J),
            "l" => Some(ShapeType::L),
            "o" => Some(ShapeType::O),
            "s" => Some(ShapeType::S),
            "t" => Some(ShapeType::T),
            "z" => Some(ShapeType::Z),
            _ => None,
        }
    }

    /// Single uppercase letter name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeType::I => "I",
            ShapeType::J => "J",
            ShapeType::L => "L",
            ShapeType::O => "O",
            ShapeType::S => "S",
            ShapeType::T => "T",
            ShapeType::Z => "Z",
        }
    }

    /// Fixed display color of this shape.
    pub fn color(&self) -> Rgb {
        match self {
            ShapeType::I => Rgb::new(0x00, 0xF0, 0xF0),
            ShapeType::J => Rgb::new(0x00, 0x00, 0xF0),
            ShapeType::L => Rgb::new(0xF0, 0xA0, 0x00),
            ShapeType::O => Rgb::new(0xF0, 0xF0, 0x00),
            ShapeType::S => Rgb::new(0x00, 0xF0, 0x00),
            ShapeType::T => Rgb::new(0xA0, 0x00, 0xF0),
            ShapeType::Z => Rgb::new(0xF0, 0x00, 0x00),
        }
    }
}

/// Commands the game state machine accepts from the input adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    MoveDown,
    /// Rotate piece 90° clockwise (no wall kicks)
    Rotate,
    /// Instantly drop piece to lowest legal row and lock it
    HardDrop,
    /// Toggle pause state
    TogglePause,
    /// Start a fresh game (from any state)
    Restart,
}

impl GameAction {
    /// Board delta `(dx, dy)` for the movement actions.
    pub fn delta(&self) -> Option<(i8, i8)> {
        match self {
            GameAction::MoveLeft => Some((-1, 0)),
            GameAction::MoveRight => Some((1, 0)),
            GameAction::MoveDown => Some((0, 1)),
            _ => None,
        }
    }

    /// Whether this action is still accepted while the game is paused.
    pub fn allowed_while_paused(&self) -> bool {
        matches!(self, GameAction::TogglePause | GameAction::Restart)
    }

    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "movedown" => Some(GameAction::MoveDown),
            "rotate" => Some(GameAction::Rotate),
            "harddrop" => Some(GameAction::HardDrop),
            "togglepause" | "pause" => Some(GameAction::TogglePause),
            "restart" | "start" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string (used in log fields)
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveDown => "moveDown",
            GameAction::Rotate => "rotate",
            GameAction::HardDrop => "hardDrop",
            GameAction::TogglePause => "togglePause",
            GameAction::Restart => "restart",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Rgb)`: Locked block, tagged with the color of the piece that left it
pub type Cell = Option<Rgb>;
