use serde::{Deserialize, Serialize};

use crate::difficulty::Difficulty;

/// A clue and the answer the player has to spell out.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Clue {
    pub clue: String,
    pub answer: String,
}

impl Clue {
    pub fn new(clue: impl Into<String>, answer: impl Into<String>) -> Self {
        Self { clue: clue.into(), answer: answer.into() }
    }
}

/// Result of asking a clue source for the next round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClueOutcome {
    Served(Clue),
    Exhausted,
}

impl From<Option<Clue>> for ClueOutcome {
    fn from(clue: Option<Clue>) -> Self {
        match clue {
            Some(clue) => Self::Served(clue),
            None => Self::Exhausted,
        }
    }
}

/// Anything that can hand out clues not yet in `seen`.
pub trait ClueSource {
    /// Returns `None` once every clue for `difficulty` has been seen.
    fn next_clue(&self, difficulty: Difficulty, seen: &[String]) -> Option<Clue>;
}

/// A fixed list serves its clues in order, whatever the difficulty.
impl ClueSource for [Clue] {
    fn next_clue(&self, _difficulty: Difficulty, seen: &[String]) -> Option<Clue> {
        self.iter().find(|c| !seen.contains(&c.answer)).cloned()
    }
}

impl ClueSource for Vec<Clue> {
    fn next_clue(&self, difficulty: Difficulty, seen: &[String]) -> Option<Clue> {
        self.as_slice().next_clue(difficulty, seen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_list_skips_seen_answers() {
        let clues = vec![Clue::new("Feline", "CAT"), Clue::new("Canine", "DOG")];
        let seen = vec!["CAT".to_string()];
        assert_eq!(clues.next_clue(Difficulty::Normal, &seen), Some(Clue::new("Canine", "DOG")));

        let seen = vec!["CAT".to_string(), "DOG".to_string()];
        assert_eq!(clues.next_clue(Difficulty::Normal, &seen), None);
        assert_eq!(ClueOutcome::from(clues.next_clue(Difficulty::Normal, &seen)), ClueOutcome::Exhausted);
    }
}
