//! Game state module - the game loop state machine
//!
//! This module ties together the board, pieces, collision checks, piece
//! generation and scoring. It owns the only mutable game state; every command
//! runs to completion before the next one is accepted, so a renderer never
//! sees a half-applied transition.

use tracing::{debug, info};

use crate::board::Board;
use crate::collision::{check_collision, drop_distance};
use crate::pieces::Tetromino;
use crate::rng::{PieceSource, RandomPieces};
use crate::scoring::calculate_score;
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, ShapeType};

/// Which commands the state machine currently accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    /// A piece is falling and every command is accepted.
    Active,
    /// Ticks and movement are suspended; only pause toggling and restart apply.
    Paused,
    /// Terminal state; only restart applies.
    GameOver,
}

impl GamePhase {
    pub fn from_flags(game_over: bool, paused: bool) -> Self {
        if game_over {
            GamePhase::GameOver
        } else if paused {
            GamePhase::Paused
        } else {
            GamePhase::Active
        }
    }
}

/// Outcome of the most recent lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    /// Shape of the piece that locked.
    pub kind: ShapeType,
    pub lines_cleared: u32,
    pub score_delta: u32,
    /// The piece that spawned after this lock collided immediately.
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = RandomPieces> {
    board: Board,
    /// `None` only once the game is over.
    current: Option<Tetromino>,
    next: Tetromino,
    score: u32,
    lines: u32,
    paused: bool,
    game_over: bool,
    last_lock: Option<LockEvent>,
    source: S,
}

impl GameState<RandomPieces> {
    /// Create a new game with uniformly random pieces from the given seed
    pub fn new(seed: u32) -> Self {
        Self::with_source(RandomPieces::new(seed))
    }
}

impl Default for GameState<RandomPieces> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<S: PieceSource> GameState<S> {
    /// Create a fresh game drawing pieces from `source`.
    pub fn with_source(source: S) -> Self {
        Self::with_board(Board::new(), source)
    }

    /// Create a game on a pre-filled board.
    ///
    /// If the first piece already collides at spawn the game begins in
    /// [`GamePhase::GameOver`].
    pub fn with_board(board: Board, mut source: S) -> Self {
        let current = Tetromino::new(source.next_kind());
        let next = Tetromino::new(source.next_kind());
        let game_over = check_collision(&board, &current, 0, 0);

        Self {
            board,
            current: if game_over { None } else { Some(current) },
            next,
            score: 0,
            lines: 0,
            paused: false,
            game_over,
            last_lock: None,
            source,
        }
    }

    /// Create a piece at its spawn position, random unless `kind` is given.
    pub fn create_tetromino(&mut self, kind: Option<ShapeType>) -> Tetromino {
        let kind = kind.unwrap_or_else(|| self.source.next_kind());
        Tetromino::new(kind)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> Option<&Tetromino> {
        self.current.as_ref()
    }

    pub fn next(&self) -> &Tetromino {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn phase(&self) -> GamePhase {
        GamePhase::from_flags(self.game_over, self.paused)
    }

    /// Take and clear the last lock event.
    pub fn take_last_lock(&mut self) -> Option<LockEvent> {
        self.last_lock.take()
    }

    /// Read-only view handed to renderers.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.to_grid(),
            current: self.current.clone(),
            next: self.next.clone(),
            score: self.score,
            lines: self.lines,
            paused: self.paused,
            game_over: self.game_over,
        }
    }

    /// Throw the current game away and start a fresh one.
    ///
    /// Accepted in every phase. The piece source carries on, so a restart
    /// does not replay the previous game's pieces.
    pub fn restart(&mut self) {
        let current = self.create_tetromino(None);
        let next = self.create_tetromino(None);
        self.board = Board::new();
        self.current = Some(current);
        self.next = next;
        self.score = 0;
        self.lines = 0;
        self.paused = false;
        self.game_over = false;
        self.last_lock = None;
        info!("game restarted");
    }

    /// The falling piece, but only while gameplay is running.
    fn active_piece(&self) -> Option<&Tetromino> {
        match self.phase() {
            GamePhase::Active => self.current.as_ref(),
            GamePhase::Paused | GamePhase::GameOver => None,
        }
    }

    /// Try to move the active piece
    ///
    /// Returns false, leaving everything untouched, when the move would
    /// collide or the game is not active.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active_piece() else {
            return false;
        };

        if check_collision(&self.board, active, dx, dy) {
            return false;
        }

        self.current = Some(active.translated(dx, dy));
        true
    }

    /// Try to rotate the active piece clockwise (no wall kicks)
    pub fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active_piece() else {
            return false;
        };

        let rotated = active.rotated();
        if check_collision(&self.board, &rotated, 0, 0) {
            return false;
        }

        self.current = Some(rotated);
        true
    }

    /// Gravity step: move down one row, or lock if the piece cannot fall.
    ///
    /// Returns false (and does nothing) unless the game is active.
    pub fn tick(&mut self) -> bool {
        if self.phase() != GamePhase::Active {
            return false;
        }

        if !self.try_move(0, 1) {
            self.lock_piece();
        }
        true
    }

    /// Drop the active piece as far as it goes and lock it immediately.
    ///
    /// Returns the number of rows dropped, or `None` when the game is not active.
    pub fn hard_drop(&mut self) -> Option<u8> {
        let active = self.active_piece()?;

        let distance = drop_distance(&self.board, active);
        self.current = Some(active.translated(0, distance));
        self.lock_piece();

        Some(distance as u8)
    }

    /// Flip between Active and Paused. Has no effect once the game is over.
    pub fn toggle_pause(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.paused = !self.paused;
        debug!(paused = self.paused, "pause toggled");
        true
    }

    /// Apply a game action
    ///
    /// Returns whether the state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft | GameAction::MoveRight | GameAction::MoveDown => {
                let (dx, dy) = action.delta().unwrap_or((0, 0));
                self.try_move(dx, dy)
            }
            GameAction::Rotate => self.try_rotate(),
            GameAction::HardDrop => self.hard_drop().is_some(),
            GameAction::TogglePause => self.toggle_pause(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Lock the current piece, clear lines, score, and spawn the next piece.
    ///
    /// Ends the game when the promoted piece collides at its spawn position.
    fn lock_piece(&mut self) {
        let Some(piece) = self.current.take() else {
            return;
        };

        self.board.lock_piece(&piece);
        let lines_cleared = self.board.clear_full_rows().len();

        let previous = self.score;
        self.score = calculate_score(lines_cleared, previous);
        self.lines = self.lines.saturating_add(lines_cleared as u32);

        let fresh = self.create_tetromino(None);
        let promoted = std::mem::replace(&mut self.next, fresh);
        let spawn_blocked = check_collision(&self.board, &promoted, 0, 0);

        if spawn_blocked {
            self.game_over = true;
            info!(score = self.score, lines = self.lines, "game over");
        } else {
            self.current = Some(promoted);
        }

        self.last_lock = Some(LockEvent {
            kind: piece.kind,
            lines_cleared: lines_cleared as u32,
            score_delta: self.score - previous,
            game_over: spawn_blocked,
        });
    }
}
