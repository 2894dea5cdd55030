use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::clue_source::{ClueOutcome, ClueSource};
use crate::constants::{
    COUNTDOWN_TICK_MILLIS, DEFAULT_MAX_STRIKES, GAME_OVER_COUNTDOWN_SECONDS,
    NEXT_ROUND_DELAY_MILLIS, NO_MORE_CLUES_MESSAGE, WIN_MESSAGE,
};
use crate::difficulty::Difficulty;
use crate::display::{game_over_text, high_score_text, score_text, strikes_text};
use crate::error::NoCluesAvailable;
use crate::round::{GuessOutcome, IgnoreReason, RoundState};
use crate::shared_hangman_game::ClueRequest;
use crate::timer::{ScheduledTransition, TimerRequest, TimerSlot, TimerToken};

/// What the persistence layer remembers per difficulty.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredProgress {
    pub seen_answers: Vec<String>,
    pub high_score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlashTarget {
    Score,
    HighScore,
    Strikes,
}

/// Side effects the shell must carry out after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SaveSeenAnswers(Vec<String>),
    SaveHighScore(u32),
    RequestClue(ClueRequest),
    Schedule(TimerRequest),
    CancelTimer,
    Flash(FlashTarget),
}

/// Everything the display needs, already formatted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderFrame {
    pub clue: String,
    pub answer_display: String,
    pub status: String,
    pub score_text: String,
    pub strikes_text: String,
    pub high_score_text: String,
    pub used_letters: Vec<char>,
    pub input_locked: bool,
    pub show_scoreboard: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    pub outcome: Option<GuessOutcome>,
    pub effects: Vec<Effect>,
    pub frame: RenderFrame,
}

/// Game state for one difficulty across many rounds.
#[derive(Debug, Clone)]
pub struct Session {
    difficulty: Difficulty,
    seen_answers: Vec<String>,
    score: u32,
    high_score: u32,
    max_strikes: u32,
    round: Option<RoundState>,
    awaiting_clue: bool,
    exhausted: bool,
    countdown: Option<u32>,
    notice: Option<String>,
    timer: TimerSlot,
}

impl Session {
    pub fn new(difficulty: Difficulty, stored: StoredProgress) -> Self {
        Self::with_max_strikes(difficulty, stored, DEFAULT_MAX_STRIKES)
    }

    pub fn with_max_strikes(difficulty: Difficulty, stored: StoredProgress, max_strikes: u32) -> Self {
        Self {
            difficulty,
            seen_answers: stored.seen_answers,
            score: 0,
            high_score: stored.high_score,
            max_strikes,
            round: None,
            awaiting_clue: false,
            exhausted: false,
            countdown: None,
            notice: None,
            timer: TimerSlot::new(),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn seen_answers(&self) -> &[String] {
        &self.seen_answers
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn max_strikes(&self) -> u32 {
        self.max_strikes
    }

    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    pub fn is_awaiting_clue(&self) -> bool {
        self.awaiting_clue
    }

    pub fn pending_timer(&self) -> Option<ScheduledTransition> {
        self.timer.pending()
    }

    /// Begins fetching the next clue. Any pending timer is cancelled and
    /// guesses are ignored until [`Session::receive_clue`] runs.
    pub fn request_clue(&mut self) -> Update {
        let effects = self.request_clue_effects();
        self.update(None, effects)
    }

    fn request_clue_effects(&mut self) -> Vec<Effect> {
        self.awaiting_clue = true;
        self.exhausted = false;
        self.notice = None;
        self.timer.cancel();

        vec![
            Effect::CancelTimer,
            Effect::RequestClue(ClueRequest {
                difficulty: self.difficulty,
                seen: self.seen_answers.clone(),
            }),
        ]
    }

    /// Installs the round for a fetched clue, or reports exhaustion.
    pub fn receive_clue(&mut self, outcome: ClueOutcome) -> Result<Update, NoCluesAvailable> {
        if !self.awaiting_clue {
            debug!("dropping clue that arrived without a pending request");
            return Ok(self.update(None, Vec::new()));
        }
        self.awaiting_clue = false;

        let clue = match outcome {
            ClueOutcome::Served(clue) => clue,
            ClueOutcome::Exhausted => {
                info!("no clues left for {} difficulty", self.difficulty);
                self.exhausted = true;
                return Err(NoCluesAvailable { difficulty: self.difficulty });
            }
        };

        self.seen_answers.push(clue.answer.clone());
        self.round = Some(RoundState::from_clue(clue));
        self.countdown = None;
        self.timer.cancel();

        let effects = vec![Effect::CancelTimer, Effect::SaveSeenAnswers(self.seen_answers.clone())];
        Ok(self.update(None, effects))
    }

    /// Records a transport failure while fetching a clue.
    pub fn clue_failed(&mut self, message: impl Into<String>) -> Update {
        self.awaiting_clue = false;
        self.notice = Some(message.into());
        self.update(None, Vec::new())
    }

    /// Synchronous round start against a local clue source.
    pub fn next_round<S>(&mut self, source: &S) -> Result<Update, NoCluesAvailable>
    where
        S: ClueSource + ?Sized,
    {
        let mut effects = self.request_clue_effects();
        effects.retain(|effect| !matches!(effect, Effect::RequestClue(_)));

        let outcome = source.next_clue(self.difficulty, &self.seen_answers).into();
        let mut update = self.receive_clue(outcome)?;
        effects.append(&mut update.effects);
        update.effects = effects;
        Ok(update)
    }

    /// Evaluates one letter. `letter` must already be upper case.
    pub fn apply_guess(&mut self, letter: char) -> Update {
        let max_strikes = self.max_strikes;
        let round = match self.round.as_mut() {
            Some(round) if !self.awaiting_clue => round,
            _ => return self.update(Some(GuessOutcome::Ignored(IgnoreReason::Locked)), Vec::new()),
        };

        let outcome = round.guess(letter, max_strikes);
        let mut effects = Vec::new();

        match outcome {
            GuessOutcome::Ignored(_) => {}
            GuessOutcome::Wrong { .. } => effects.push(Effect::Flash(FlashTarget::Strikes)),
            GuessOutcome::GameOver { .. } => {
                effects.push(Effect::Flash(FlashTarget::Strikes));
                self.countdown = Some(GAME_OVER_COUNTDOWN_SECONDS);
                let request = self.timer.schedule(
                    ScheduledTransition::GameOverCountdown {
                        seconds_left: GAME_OVER_COUNTDOWN_SECONDS.saturating_sub(1),
                    },
                    COUNTDOWN_TICK_MILLIS,
                );
                effects.push(Effect::Schedule(request));
            }
            GuessOutcome::Correct { .. } => {
                effects.extend(self.update_score(outcome.points()));
            }
            GuessOutcome::Won { .. } => {
                effects.extend(self.update_score(outcome.points()));
                let request = self.timer.schedule(ScheduledTransition::NextRound, NEXT_ROUND_DELAY_MILLIS);
                effects.push(Effect::Schedule(request));
            }
        }

        self.update(Some(outcome), effects)
    }

    /// Adds `delta` to the score, raising the high score when it is beaten.
    pub fn update_score(&mut self, delta: u32) -> Vec<Effect> {
        let mut effects = vec![Effect::Flash(FlashTarget::Score)];
        self.score += delta;

        if self.score > self.high_score {
            self.high_score = self.score;
            effects.push(Effect::Flash(FlashTarget::HighScore));
            effects.push(Effect::SaveHighScore(self.high_score));
        }

        effects
    }

    /// Runs the transition scheduled under `token`. Stale tokens do nothing.
    pub fn fire(&mut self, token: TimerToken) -> Update {
        let transition = match self.timer.take(token) {
            Some(transition) => transition,
            None => return self.update(None, Vec::new()),
        };

        let effects = match transition {
            ScheduledTransition::NextRound => self.request_clue_effects(),
            ScheduledTransition::GameOverCountdown { seconds_left } => {
                self.countdown = Some(seconds_left);
                if seconds_left == 0 {
                    self.score = 0;
                    if let Some(round) = self.round.as_mut() {
                        round.reset_strikes();
                    }
                    self.request_clue_effects()
                } else {
                    let request = self.timer.schedule(
                        ScheduledTransition::GameOverCountdown { seconds_left: seconds_left - 1 },
                        COUNTDOWN_TICK_MILLIS,
                    );
                    vec![Effect::Schedule(request)]
                }
            }
        };

        self.update(None, effects)
    }

    pub fn render(&self) -> RenderFrame {
        let round = self.round.as_ref();

        let status = if let Some(notice) = &self.notice {
            notice.clone()
        } else if self.exhausted {
            NO_MORE_CLUES_MESSAGE.to_string()
        } else if let Some(seconds_left) = self.countdown {
            game_over_text(seconds_left)
        } else {
            match round {
                Some(round) if round.is_solved() && round.is_locked() => WIN_MESSAGE.to_string(),
                Some(round) => round.wrong_guesses_display(),
                None => String::new(),
            }
        };

        let mut used_letters: Vec<char> = round
            .map(|round| {
                round
                    .revealed()
                    .iter()
                    .chain(round.wrong_guesses())
                    .copied()
                    .filter(|c| c.is_ascii_uppercase())
                    .collect()
            })
            .unwrap_or_default();
        used_letters.sort_unstable();
        used_letters.dedup();

        RenderFrame {
            clue: round.map(|round| round.clue().to_string()).unwrap_or_default(),
            answer_display: round.map(RoundState::answer_display).unwrap_or_default(),
            status,
            score_text: score_text(self.score),
            strikes_text: strikes_text(round.map_or(0, RoundState::strike_count), self.max_strikes),
            high_score_text: high_score_text(self.high_score),
            used_letters,
            input_locked: self.awaiting_clue || round.map_or(true, RoundState::is_locked),
            show_scoreboard: round.is_some(),
        }
    }

    fn update(&self, outcome: Option<GuessOutcome>, effects: Vec<Effect>) -> Update {
        Update { outcome, effects, frame: self.render() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clue_source::Clue;

    fn session_with(answer: &str) -> Session {
        let mut session = Session::new(Difficulty::Normal, StoredProgress::default());
        session.request_clue();
        session.receive_clue(ClueOutcome::Served(Clue::new("clue", answer))).unwrap();
        session
    }

    fn scheduled(update: &Update) -> Option<TimerRequest> {
        update.effects.iter().find_map(|effect| match effect {
            Effect::Schedule(request) => Some(*request),
            _ => None,
        })
    }

    #[test]
    fn test_request_clue_carries_seen_answers() {
        let stored = StoredProgress { seen_answers: vec!["KRYPTON".into()], high_score: 3 };
        let mut session = Session::new(Difficulty::Hard, stored);
        let update = session.request_clue();
        assert!(update.effects.contains(&Effect::RequestClue(ClueRequest {
            difficulty: Difficulty::Hard,
            seen: vec!["KRYPTON".into()],
        })));
        assert!(update.frame.input_locked);
        assert_eq!(update.frame.high_score_text, "High Score: 3");
    }

    #[test]
    fn test_receive_clue_appends_and_persists_answer() {
        let mut session = Session::new(Difficulty::Normal, StoredProgress::default());
        session.request_clue();
        let update = session.receive_clue(ClueOutcome::Served(Clue::new("Feline", "CAT"))).unwrap();
        assert_eq!(session.seen_answers(), &["CAT".to_string()]);
        assert!(update.effects.contains(&Effect::SaveSeenAnswers(vec!["CAT".into()])));
        assert_eq!(update.frame.clue, "Feline");
        assert_eq!(update.frame.answer_display, "_\u{a0}\u{a0}_\u{a0}\u{a0}_");
        assert!(!update.frame.input_locked);
        assert!(update.frame.show_scoreboard);
    }

    #[test]
    fn test_guesses_ignored_while_fetching() {
        let mut session = session_with("CAT");
        session.request_clue();
        let update = session.apply_guess('C');
        assert_eq!(update.outcome, Some(GuessOutcome::Ignored(IgnoreReason::Locked)));
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_high_score_only_written_when_beaten() {
        let stored = StoredProgress { seen_answers: vec![], high_score: 1 };
        let mut session = Session::new(Difficulty::Normal, stored);
        assert!(!session.update_score(1).contains(&Effect::SaveHighScore(1)));
        assert!(session.update_score(1).contains(&Effect::SaveHighScore(2)));
        assert_eq!(session.high_score(), 2);
    }

    #[test]
    fn test_win_schedules_next_round() {
        let mut session = session_with("AB");
        session.apply_guess('A');
        let update = session.apply_guess('B');
        assert_eq!(update.frame.status, WIN_MESSAGE);
        assert!(update.frame.input_locked);

        let request = scheduled(&update).expect("next round scheduled");
        assert_eq!(request.delay_millis, NEXT_ROUND_DELAY_MILLIS);
        let fired = session.fire(request.token);
        assert!(fired.effects.iter().any(|e| matches!(e, Effect::RequestClue(_))));
        assert!(session.is_awaiting_clue());
    }

    #[test]
    fn test_game_over_countdown_resets_score() {
        let mut session = Session::with_max_strikes(Difficulty::Normal, StoredProgress::default(), 2);
        session.request_clue();
        session.receive_clue(ClueOutcome::Served(Clue::new("", "DOG"))).unwrap();
        session.apply_guess('D');
        assert_eq!(session.score(), 1);
        session.apply_guess('X');
        let mut update = session.apply_guess('Y');
        assert_eq!(update.frame.status, "Game over! Starting new game in 3 seconds");

        for expected in [2, 1] {
            let request = scheduled(&update).unwrap();
            update = session.fire(request.token);
            assert_eq!(update.frame.status, game_over_text(expected));
            assert_eq!(session.score(), 1);
        }

        let request = scheduled(&update).unwrap();
        update = session.fire(request.token);
        assert_eq!(session.score(), 0);
        assert_eq!(update.frame.strikes_text, "Strikes: 0 of 2");
        assert!(update.effects.iter().any(|e| matches!(e, Effect::RequestClue(_))));
    }

    #[test]
    fn test_exhaustion_is_reported() {
        let mut session = Session::new(Difficulty::Drunk, StoredProgress::default());
        session.request_clue();
        let err = session.receive_clue(ClueOutcome::Exhausted).unwrap_err();
        assert_eq!(err.difficulty, Difficulty::Drunk);
        assert_eq!(session.render().status, NO_MORE_CLUES_MESSAGE);
        assert!(session.render().input_locked);
    }

    #[test]
    fn test_transport_failure_shows_notice() {
        let mut session = Session::new(Difficulty::Normal, StoredProgress::default());
        session.request_clue();
        let update = session.clue_failed("Network error");
        assert_eq!(update.frame.status, "Network error");
        assert!(!session.is_awaiting_clue());
    }
}
