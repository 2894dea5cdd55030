use once_cell::sync::Lazy;
use rand::seq::IteratorRandom;
use rand::Rng;
use std::collections::HashSet;

use crate::clue_source::{Clue, ClueSource};
use crate::difficulty::Difficulty;
use crate::error::HangmanError;
use crate::validation::validate_answer;

const NORMAL_BANK: &str = include_str!("banks/normal.json");
const HARD_BANK: &str = include_str!("banks/hard.json");
const DRUNK_BANK: &str = include_str!("banks/drunk.json");

// The banks compiled into the binary
static BUILTIN: Lazy<WordBanks> = Lazy::new(|| {
    WordBanks::from_json(NORMAL_BANK, HARD_BANK, DRUNK_BANK)
        .expect("Embedded word banks are invalid")
});

/// All clues for one difficulty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    difficulty: Difficulty,
    entries: Vec<Clue>,
}

impl WordBank {
    /// Parses a `[{"answer": .., "clue": ..}]` document and validates every entry.
    pub fn from_json(difficulty: Difficulty, json: &str) -> Result<Self, HangmanError> {
        let entries: Vec<Clue> = serde_json::from_str(json)?;
        Self::new(difficulty, entries)
    }

    pub fn new(difficulty: Difficulty, entries: Vec<Clue>) -> Result<Self, HangmanError> {
        let mut answers = HashSet::new();
        for entry in &entries {
            if validate_answer(&entry.answer).is_err() {
                return Err(HangmanError::InvalidBankEntry {
                    answer: entry.answer.clone(),
                    reason: "answer must be upper case and contain a letter",
                });
            }
            if entry.clue.trim().is_empty() {
                return Err(HangmanError::InvalidBankEntry {
                    answer: entry.answer.clone(),
                    reason: "clue is empty",
                });
            }
            if !answers.insert(entry.answer.as_str()) {
                return Err(HangmanError::DuplicateAnswer(entry.answer.clone()));
            }
        }

        Ok(Self { difficulty, entries })
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn entries(&self) -> &[Clue] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Picks uniformly among the clues whose answer is not in `seen`.
    pub fn pick<R: Rng + ?Sized>(&self, seen: &[String], rng: &mut R) -> Option<Clue> {
        let seen: HashSet<&str> = seen.iter().map(String::as_str).collect();
        self.entries
            .iter()
            .filter(|entry| !seen.contains(entry.answer.as_str()))
            .choose(rng)
            .cloned()
    }

    pub fn remaining(&self, seen: &[String]) -> usize {
        self.entries.iter().filter(|entry| !seen.contains(&entry.answer)).count()
    }
}

/// One bank per difficulty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBanks {
    normal: WordBank,
    hard: WordBank,
    drunk: WordBank,
}

impl WordBanks {
    pub fn from_json(normal: &str, hard: &str, drunk: &str) -> Result<Self, HangmanError> {
        Ok(Self {
            normal: WordBank::from_json(Difficulty::Normal, normal)?,
            hard: WordBank::from_json(Difficulty::Hard, hard)?,
            drunk: WordBank::from_json(Difficulty::Drunk, drunk)?,
        })
    }

    pub fn from_banks(normal: WordBank, hard: WordBank, drunk: WordBank) -> Self {
        Self { normal, hard, drunk }
    }

    pub fn builtin() -> &'static WordBanks {
        &BUILTIN
    }

    /// Loads `normal.json`, `hard.json` and `drunk.json` from `dir`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_dir(dir: &std::path::Path) -> Result<Self, HangmanError> {
        let read = |difficulty: Difficulty| {
            std::fs::read_to_string(dir.join(format!("{}.json", difficulty.as_str())))
        };
        Self::from_json(
            &read(Difficulty::Normal)?,
            &read(Difficulty::Hard)?,
            &read(Difficulty::Drunk)?,
        )
    }

    pub fn get(&self, difficulty: Difficulty) -> &WordBank {
        match difficulty {
            Difficulty::Normal => &self.normal,
            Difficulty::Hard => &self.hard,
            Difficulty::Drunk => &self.drunk,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ClueSource for WordBanks {
    fn next_clue(&self, difficulty: Difficulty, seen: &[String]) -> Option<Clue> {
        let mut rng = rand::thread_rng();
        self.get(difficulty).pick(seen, &mut rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_builtin_banks_load() {
        let banks = WordBanks::builtin();
        assert_eq!(banks.get(Difficulty::Normal).len(), 87);
        assert_eq!(banks.get(Difficulty::Hard).len(), 84);
        assert_eq!(banks.get(Difficulty::Drunk).len(), 43);
        assert_eq!(banks.get(Difficulty::Drunk).difficulty(), Difficulty::Drunk);
    }

    #[test]
    fn test_pick_never_returns_seen_answers() {
        let bank = WordBanks::builtin().get(Difficulty::Drunk);
        let mut rng = SmallRng::seed_from_u64(7);
        let mut seen = Vec::new();
        while let Some(clue) = bank.pick(&seen, &mut rng) {
            assert!(!seen.contains(&clue.answer));
            seen.push(clue.answer);
        }
        assert_eq!(seen.len(), bank.len());
        assert_eq!(bank.remaining(&seen), 0);
    }

    #[test]
    fn test_rejects_bad_entries() {
        let lower = r#"[{"answer": "paris", "clue": "Capital of France"}]"#;
        assert!(matches!(
            WordBank::from_json(Difficulty::Normal, lower),
            Err(HangmanError::InvalidBankEntry { .. })
        ));

        let duplicate = r#"[{"answer": "PARIS", "clue": "a"}, {"answer": "PARIS", "clue": "b"}]"#;
        assert!(matches!(
            WordBank::from_json(Difficulty::Normal, duplicate),
            Err(HangmanError::DuplicateAnswer(_))
        ));

        assert!(matches!(
            WordBank::from_json(Difficulty::Normal, "{"),
            Err(HangmanError::BankParse(_))
        ));
    }
}
