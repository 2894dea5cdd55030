pub const CLUE_ENDPOINT: &str = "/api/clue";
pub const HEALTH_CHECK_ENDPOINT: &str = "/api/health_check";

pub const DEFAULT_MAX_STRIKES: u32 = 7;
pub const CORRECT_GUESS_POINTS: u32 = 1;

pub const GAME_OVER_COUNTDOWN_SECONDS: u32 = 3;
pub const COUNTDOWN_TICK_MILLIS: u32 = 1000;
pub const NEXT_ROUND_DELAY_MILLIS: u32 = 1000;
pub const FLASH_REMOVAL_MILLIS: u32 = 500;

pub const ANSWER_SEPARATOR_WIDTH: usize = 2;
pub const WRONG_GUESS_SEPARATOR_WIDTH: usize = 3;
pub const PLACEHOLDER: char = '_';
pub const SEPARATOR: char = '\u{a0}';

// Upper bound on the `seen` list a client may send with a clue request
pub const MAX_SEEN_ANSWERS: usize = 1000;
pub const MAX_ANSWER_LENGTH: usize = 100;

pub const NO_MORE_CLUES_MESSAGE: &str = "No more clues available for this difficulty level!";
pub const WIN_MESSAGE: &str = "Well done!";
pub const WAKE_UP_MESSAGE: &str = "Hello from Hangman Trivia!";
pub const NETWORK_ERROR: &str = "Network error. Please check your connection.";
pub const SERVER_ERROR: &str = "Server error. Please try again.";
