pub mod clue_source;
pub mod constants;
pub mod difficulty;
pub mod display;
pub mod error;
pub mod round;
pub mod scoring;
pub mod session;
pub mod shared_hangman_game;
pub mod timer;
pub mod validation;
pub mod word_bank;

pub use clue_source::{Clue, ClueOutcome, ClueSource};
pub use difficulty::Difficulty;
pub use error::{HangmanError, NoCluesAvailable};
pub use round::{start_round, GuessOutcome, IgnoreReason, RoundState};
pub use session::{Effect, FlashTarget, RenderFrame, Session, StoredProgress, Update};
pub use timer::{ScheduledTransition, TimerRequest, TimerToken};
pub use word_bank::{WordBank, WordBanks};
