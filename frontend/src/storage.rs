use hangman_shared::{Difficulty, StoredProgress};
use log::{error, warn};
use web_sys::{window, Storage};

fn local_storage() -> Option<Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}

fn get_item(key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok().flatten())
}

fn set_item(key: &str, value: &str) {
    match local_storage() {
        Some(storage) => {
            if storage.set_item(key, value).is_err() {
                error!("Failed to write {} to localStorage", key);
            }
        }
        None => warn!("localStorage unavailable, {} not saved", key),
    }
}

pub(crate) fn parse_seen_answers(raw: Option<&str>) -> Vec<String> {
    raw.and_then(|raw| serde_json::from_str(raw).ok()).unwrap_or_default()
}

pub(crate) fn parse_high_score(raw: Option<&str>) -> u32 {
    raw.and_then(|raw| raw.trim().parse().ok()).unwrap_or(0)
}

/// Reads what earlier visits left behind. Missing or corrupt values start fresh.
pub fn load_progress(difficulty: Difficulty) -> StoredProgress {
    StoredProgress {
        seen_answers: parse_seen_answers(get_item(difficulty.seen_answers_key()).as_deref()),
        high_score: parse_high_score(get_item(difficulty.high_score_key()).as_deref()),
    }
}

pub fn save_seen_answers(difficulty: Difficulty, seen: &[String]) {
    match serde_json::to_string(seen) {
        Ok(json) => set_item(difficulty.seen_answers_key(), &json),
        Err(e) => error!("Failed to serialise seen answers: {}", e),
    }
}

pub fn save_high_score(difficulty: Difficulty, high_score: u32) {
    set_item(difficulty.high_score_key(), &high_score.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seen_answers() {
        assert_eq!(parse_seen_answers(Some(r#"["CAT","DOG"]"#)), vec!["CAT", "DOG"]);
        assert!(parse_seen_answers(Some("not json")).is_empty());
        assert!(parse_seen_answers(None).is_empty());
    }

    #[test]
    fn test_parse_high_score() {
        assert_eq!(parse_high_score(Some("42")), 42);
        assert_eq!(parse_high_score(Some("-1")), 0);
        assert_eq!(parse_high_score(None), 0);
    }

    #[test]
    fn test_keys_are_per_difficulty() {
        assert_eq!(Difficulty::Normal.seen_answers_key(), "seenAnswersNormal");
        assert_eq!(Difficulty::Drunk.high_score_key(), "highScoreDrunk");
    }
}
