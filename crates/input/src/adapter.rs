//! Gated dispatch of key presses into the game state machine.

use crossterm::event::{KeyEvent, KeyEventKind};
use tracing::trace;

use crate::core::{GamePhase, GameState, PieceSource};
use crate::map::handle_key_event;
use crate::types::GameAction;

/// What happened to a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Not a game key (or not a press).
    Unmapped,
    /// A game key the current phase does not accept.
    Suppressed(GameAction),
    /// Delivered to the engine; `changed` reports whether state moved.
    Applied { action: GameAction, changed: bool },
}

/// Maps key presses to actions and only forwards the ones the current
/// phase accepts: everything while Active, pause toggling and restart while
/// Paused, restart alone once the game is over.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputAdapter;

impl InputAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Whether `action` may reach the engine in `phase`.
    pub fn accepts(phase: GamePhase, action: GameAction) -> bool {
        match phase {
            GamePhase::Active => true,
            GamePhase::Paused => action.allowed_while_paused(),
            GamePhase::GameOver => action == GameAction::Restart,
        }
    }

    pub fn dispatch<S: PieceSource>(&self, key: KeyEvent, game: &mut GameState<S>) -> Dispatch {
        if key.kind != KeyEventKind::Press {
            return Dispatch::Unmapped;
        }
        let Some(action) = handle_key_event(key) else {
            return Dispatch::Unmapped;
        };

        if !Self::accepts(game.phase(), action) {
            trace!(action = action.as_str(), "input suppressed");
            return Dispatch::Suppressed(action);
        }

        let changed = game.apply_action(action);
        trace!(action = action.as_str(), changed, "input applied");
        Dispatch::Applied { action, changed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SequencePieces;
    use crate::types::ShapeType;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn game() -> GameState<SequencePieces> {
        GameState::with_source(SequencePieces::repeat(ShapeType::O))
    }

    #[test]
    fn test_active_game_receives_moves() {
        let mut game = game();
        let adapter = InputAdapter::new();

        let result = adapter.dispatch(press(KeyCode::Left), &mut game);
        assert_eq!(
            result,
            Dispatch::Applied {
                action: GameAction::MoveLeft,
                changed: true
            }
        );
        assert_eq!(game.current().unwrap().x, 3);
    }

    #[test]
    fn test_paused_game_only_accepts_toggle() {
        let mut game = game();
        let adapter = InputAdapter::new();
        adapter.dispatch(press(KeyCode::Esc), &mut game);
        assert!(game.paused());

        assert_eq!(
            adapter.dispatch(press(KeyCode::Char(' ')), &mut game),
            Dispatch::Suppressed(GameAction::HardDrop)
        );
        assert_eq!(game.board().filled_count(), 0);

        adapter.dispatch(press(KeyCode::Esc), &mut game);
        assert!(!game.paused());
    }

    #[test]
    fn test_game_over_only_accepts_restart() {
        let mut game = game();
        let adapter = InputAdapter::new();
        while !game.game_over() {
            adapter.dispatch(press(KeyCode::Char(' ')), &mut game);
        }

        assert_eq!(
            adapter.dispatch(press(KeyCode::Esc), &mut game),
            Dispatch::Suppressed(GameAction::TogglePause)
        );
        assert!(!game.paused());

        assert_eq!(
            adapter.dispatch(press(KeyCode::Char('r')), &mut game),
            Dispatch::Applied {
                action: GameAction::Restart,
                changed: true
            }
        );
        assert!(!game.game_over());
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut game = game();
        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(
            InputAdapter::new().dispatch(release, &mut game),
            Dispatch::Unmapped
        );
        assert_eq!(game.current().unwrap().x, 4);
    }
}
