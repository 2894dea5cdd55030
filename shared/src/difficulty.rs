use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::HangmanError;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Normal,
    Hard,
    Drunk,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Normal, Difficulty::Hard, Difficulty::Drunk];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Hard => "hard",
            Self::Drunk => "drunk",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Hard => "Hard",
            Self::Drunk => "Drunk",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Normal => "To test your trivia knowledge. One clue - one possible answer",
            Self::Hard => "For those who seek a greater challenge. Trivia-style: one clue - one possible answer",
            Self::Drunk => "More akin to classic Hangman",
        }
    }

    /// localStorage key holding the JSON array of answers already served.
    pub fn seen_answers_key(&self) -> &'static str {
        match self {
            Self::Normal => "seenAnswersNormal",
            Self::Hard => "seenAnswersHard",
            Self::Drunk => "seenAnswersDrunk",
        }
    }

    /// localStorage key holding the high score.
    pub fn high_score_key(&self) -> &'static str {
        match self {
            Self::Normal => "highScoreNormal",
            Self::Hard => "highScoreHard",
            Self::Drunk => "highScoreDrunk",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = HangmanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "hard" => Ok(Self::Hard),
            "drunk" => Ok(Self::Drunk),
            other => Err(HangmanError::UnknownDifficulty(other.to_string())),
        }
    }
}
