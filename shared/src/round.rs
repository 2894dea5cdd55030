use log::debug;
use serde::{Deserialize, Serialize};

use crate::clue_source::{Clue, ClueSource};
use crate::constants::{
    ANSWER_SEPARATOR_WIDTH, CORRECT_GUESS_POINTS, PLACEHOLDER, WRONG_GUESS_SEPARATOR_WIDTH,
};
use crate::difficulty::Difficulty;
use crate::display::construct_with_spaces;
use crate::error::NoCluesAvailable;
use crate::scoring::bonus_for_length;

/// Only upper-case ASCII letters are guessable; everything else in an answer
/// is shown from the start.
pub fn is_upper_case_alpha(c: char) -> bool {
    c.is_ascii_uppercase()
}

/// Why a guess left the round untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    Locked,
    NotALetter,
    AlreadyRevealed,
    AlreadyWrong,
    NothingToGuess,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessOutcome {
    Ignored(IgnoreReason),
    /// The letter filled `revealed` blanks and the answer is still incomplete.
    Correct { revealed: usize },
    /// The letter filled the last blanks. Carries both the correct-guess point
    /// and the length bonus.
    Won { revealed: usize, bonus: u32 },
    Wrong { strikes: u32 },
    /// The strike limit was reached and the answer is now fully shown.
    GameOver { strikes: u32 },
}

impl GuessOutcome {
    /// Points earned by this guess.
    pub fn points(&self) -> u32 {
        match self {
            Self::Correct { .. } => CORRECT_GUESS_POINTS,
            Self::Won { bonus, .. } => CORRECT_GUESS_POINTS + bonus,
            _ => 0,
        }
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored(_))
    }

    pub fn locks_round(&self) -> bool {
        matches!(self, Self::Won { .. } | Self::GameOver { .. })
    }
}

/// State of one clue/answer cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    clue: String,
    answer: String,
    revealed: Vec<char>,
    wrong_guesses: Vec<char>,
    strike_count: u32,
    locked: bool,
}

impl RoundState {
    /// Builds a fresh round. Letters become placeholders, anything else
    /// (digits, punctuation, spaces) is revealed immediately.
    pub fn new(clue: impl Into<String>, answer: impl Into<String>) -> Self {
        let answer = answer.into();
        let revealed = answer
            .chars()
            .map(|c| if is_upper_case_alpha(c) { PLACEHOLDER } else { c })
            .collect();

        Self {
            clue: clue.into(),
            answer,
            revealed,
            wrong_guesses: Vec::new(),
            strike_count: 0,
            locked: false,
        }
    }

    pub fn from_clue(clue: Clue) -> Self {
        Self::new(clue.clue, clue.answer)
    }

    pub fn clue(&self) -> &str {
        &self.clue
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn revealed(&self) -> &[char] {
        &self.revealed
    }

    pub fn wrong_guesses(&self) -> &[char] {
        &self.wrong_guesses
    }

    pub fn strike_count(&self) -> u32 {
        self.strike_count
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn is_solved(&self) -> bool {
        !self.revealed.is_empty() && !self.revealed.contains(&PLACEHOLDER)
    }

    pub(crate) fn reset_strikes(&mut self) {
        self.strike_count = 0;
    }

    /// Letters guessed so far, correct and wrong.
    pub fn is_used(&self, letter: char) -> bool {
        self.revealed.contains(&letter) || self.wrong_guesses.contains(&letter)
    }

    /// Transition function: consumes the round and returns the next one
    /// together with what happened.
    pub fn apply_guess(mut self, letter: char, max_strikes: u32) -> (Self, GuessOutcome) {
        let outcome = self.guess(letter, max_strikes);
        (self, outcome)
    }

    /// In-place form of [`RoundState::apply_guess`].
    pub fn guess(&mut self, letter: char, max_strikes: u32) -> GuessOutcome {
        if self.locked {
            return GuessOutcome::Ignored(IgnoreReason::Locked);
        }
        if !is_upper_case_alpha(letter) {
            return GuessOutcome::Ignored(IgnoreReason::NotALetter);
        }
        if !self.revealed.contains(&PLACEHOLDER) {
            return GuessOutcome::Ignored(IgnoreReason::NothingToGuess);
        }
        if self.revealed.contains(&letter) {
            return GuessOutcome::Ignored(IgnoreReason::AlreadyRevealed);
        }
        if self.wrong_guesses.contains(&letter) {
            return GuessOutcome::Ignored(IgnoreReason::AlreadyWrong);
        }

        let mut filled = 0;
        for (slot, c) in self.revealed.iter_mut().zip(self.answer.chars()) {
            if c == letter {
                *slot = letter;
                filled += 1;
            }
        }

        let outcome = if filled == 0 {
            self.wrong_guesses.push(letter);
            self.strike_count += 1;

            if self.strike_count >= max_strikes {
                self.locked = true;
                self.revealed = self.answer.chars().collect();
                GuessOutcome::GameOver { strikes: self.strike_count }
            } else {
                GuessOutcome::Wrong { strikes: self.strike_count }
            }
        } else if self.is_solved() {
            self.locked = true;
            GuessOutcome::Won {
                revealed: filled,
                bonus: bonus_for_length(self.answer.chars().count()),
            }
        } else {
            GuessOutcome::Correct { revealed: filled }
        };

        debug!("guess {:?} on {:?}: {:?}", letter, self.clue, outcome);
        outcome
    }

    /// The obfuscated (or, once lost, fully revealed) answer.
    pub fn answer_display(&self) -> String {
        construct_with_spaces(&self.revealed, ANSWER_SEPARATOR_WIDTH, |c, _| *c)
    }

    pub fn wrong_guesses_display(&self) -> String {
        construct_with_spaces(&self.wrong_guesses, WRONG_GUESS_SEPARATOR_WIDTH, |c, _| *c)
    }
}

/// Asks `source` for an unseen clue and builds the round for it.
///
/// The caller must append the answer of the returned round to `seen_answers`
/// before asking again, otherwise the same clue may come back.
pub fn start_round<S>(
    difficulty: Difficulty,
    seen_answers: &[String],
    source: &S,
) -> Result<RoundState, NoCluesAvailable>
where
    S: ClueSource + ?Sized,
{
    match source.next_clue(difficulty, seen_answers) {
        Some(clue) => {
            debug!("starting {} round for answer of length {}", difficulty, clue.answer.len());
            Ok(RoundState::from_clue(clue))
        }
        None => Err(NoCluesAvailable { difficulty }),
    }
}
