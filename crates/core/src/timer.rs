//! Fixed-interval tick timer.
//!
//! The timer only runs while the game is [`GamePhase::Active`]. It is torn
//! down on entering Paused or GameOver and armed again with a full period on
//! returning to Active, so a paused or finished game never sees a tick.
//! Time is passed in by the caller; nothing here reads the clock.

use std::time::{Duration, Instant};

use crate::game_state::GamePhase;

#[derive(Debug, Clone)]
pub struct TickTimer {
    period: Duration,
    deadline: Option<Instant>,
}

impl TickTimer {
    /// New, disarmed timer. `period` must be non-zero.
    pub fn new(period: Duration) -> Self {
        debug_assert!(!period.is_zero(), "tick period must be non-zero");
        Self {
            period,
            deadline: None,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Arm or disarm according to the game phase.
    ///
    /// Arming only happens when crossing into Active; an already armed timer
    /// keeps its deadline.
    pub fn sync(&mut self, phase: GamePhase, now: Instant) {
        match phase {
            GamePhase::Active => {
                if self.deadline.is_none() {
                    self.deadline = Some(now + self.period);
                }
            }
            GamePhase::Paused | GamePhase::GameOver => self.deadline = None,
        }
    }

    /// Drop any pending deadline and start a full period from `now`.
    pub fn reset(&mut self, now: Instant) {
        self.deadline = Some(now + self.period);
    }

    /// Time left until the next tick, or `None` while disarmed.
    pub fn timeout(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Report whether a tick is due and, if so, schedule the next one.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = Some(now + self.period);
                true
            }
            _ => false,
        }
    }

    /// Sync to `phase`, then report whether a tick is due.
    ///
    /// Call this after applying input so a command that just paused or ended
    /// the game tears the timer down before it can fire.
    pub fn due(&mut self, phase: GamePhase, now: Instant) -> bool {
        self.sync(phase, now);
        self.fire(now)
    }
}
