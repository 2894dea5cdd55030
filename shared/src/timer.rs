use serde::{Deserialize, Serialize};

/// Identifies one scheduled transition. Tokens from an earlier schedule are
/// stale and fire nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerToken(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduledTransition {
    /// One tick of the game-over countdown. `seconds_left == 0` ends the
    /// countdown and starts a new game.
    GameOverCountdown { seconds_left: u32 },
    /// Move on after a won round.
    NextRound,
}

/// What the shell has to arm: fire `token` after `delay_millis`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerRequest {
    pub token: TimerToken,
    pub delay_millis: u32,
}

/// Holds at most one outstanding one-shot transition.
#[derive(Debug, Default, Clone)]
pub struct TimerSlot {
    generation: u64,
    pending: Option<(TimerToken, ScheduledTransition)>,
}

impl TimerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces whatever was pending.
    pub fn schedule(&mut self, transition: ScheduledTransition, delay_millis: u32) -> TimerRequest {
        self.generation += 1;
        let token = TimerToken(self.generation);
        self.pending = Some((token, transition));
        TimerRequest { token, delay_millis }
    }

    /// Returns true if something was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Claims the pending transition if `token` is the current one.
    pub fn take(&mut self, token: TimerToken) -> Option<ScheduledTransition> {
        match self.pending {
            Some((current, transition)) if current == token => {
                self.pending = None;
                Some(transition)
            }
            _ => None,
        }
    }

    pub fn pending(&self) -> Option<ScheduledTransition> {
        self.pending.map(|(_, transition)| transition)
    }
}
