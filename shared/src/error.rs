use thiserror::Error;

use crate::difficulty::Difficulty;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("No more clues available for {difficulty} difficulty")]
pub struct NoCluesAvailable {
    pub difficulty: Difficulty,
}

#[derive(Debug, Error)]
pub enum HangmanError {
    #[error(transparent)]
    NoCluesAvailable(#[from] NoCluesAvailable),
    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),
    #[error("Invalid word bank entry {answer:?}: {reason}")]
    InvalidBankEntry { answer: String, reason: &'static str },
    #[error("Duplicate answer {0:?} in word bank")]
    DuplicateAnswer(String),
    #[error("Failed to parse word bank: {0}")]
    BankParse(#[from] serde_json::Error),
    #[error("Failed to read word bank: {0}")]
    Io(#[from] std::io::Error),
}
