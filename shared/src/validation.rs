use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use crate::constants::{MAX_ANSWER_LENGTH, MAX_SEEN_ANSWERS};

// Upper-case letters, digits, spaces and the punctuation found in trivia answers
static ANSWER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9 .,'!?&:\-]+$").expect("answer pattern is valid"));

pub fn validate_answer(answer: &str) -> Result<(), ValidationError> {
    if answer.is_empty() || answer.chars().count() > MAX_ANSWER_LENGTH {
        return Err(ValidationError::new("invalid_answer_length"));
    }
    if !ANSWER_PATTERN.is_match(answer) {
        return Err(ValidationError::new("invalid_answer_characters"));
    }
    if !answer.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(ValidationError::new("answer_without_letters"));
    }
    Ok(())
}

pub fn validate_seen_answers(seen: &[String]) -> Result<(), ValidationError> {
    if seen.len() > MAX_SEEN_ANSWERS {
        return Err(ValidationError::new("too_many_seen_answers"));
    }
    if seen.iter().any(|answer| answer.chars().count() > MAX_ANSWER_LENGTH) {
        return Err(ValidationError::new("seen_answer_too_long"));
    }
    Ok(())
}
