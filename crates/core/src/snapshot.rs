//! Render-facing snapshot of a game.
//!
//! Renderers only ever see this copy, never the live `GameState`.

use serde::Serialize;

use crate::board::BoardGrid;
use crate::game_state::GamePhase;
use crate::pieces::Tetromino;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub board: BoardGrid,
    pub current: Option<Tetromino>,
    pub next: Tetromino,
    pub score: u32,
    pub lines: u32,
    pub paused: bool,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn phase(&self) -> GamePhase {
        GamePhase::from_flags(self.game_over, self.paused)
    }

    pub fn playable(&self) -> bool {
        self.phase() == GamePhase::Active
    }

    /// Locked cells with the current piece painted on top.
    ///
    /// Piece cells outside the visible board are skipped.
    pub fn display_board(&self) -> BoardGrid {
        let mut grid = self.board;
        if let Some(piece) = &self.current {
            for (x, y) in piece.cells() {
                if (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y) {
                    grid[y as usize][x as usize] = Some(piece.color);
                }
            }
        }
        grid
    }
}
