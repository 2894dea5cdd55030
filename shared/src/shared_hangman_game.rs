use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::clue_source::Clue;
use crate::constants::{NO_MORE_CLUES_MESSAGE, WAKE_UP_MESSAGE};
use crate::difficulty::Difficulty;
use crate::validation::validate_seen_answers;

// Request and response bodies of the clue API, shared by backend and frontend.

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Validate)]
pub struct ClueRequest {
    pub difficulty: Difficulty,
    // Answers already served for this difficulty
    #[serde(default)]
    #[validate(custom = "validate_seen_answers")]
    pub seen: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WakeUpRequest {
    #[serde(rename = "wakeUp")]
    pub wake_up: serde_json::Value,
}

impl WakeUpRequest {
    pub fn new() -> Self {
        Self { wake_up: serde_json::Value::String(WAKE_UP_MESSAGE.to_string()) }
    }
}

impl Default for WakeUpRequest {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the clue endpoint accepts. A body carrying `wakeUp` is a
/// warm-up ping regardless of other fields.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum ClueApiRequest {
    WakeUp(WakeUpRequest),
    Clue(ClueRequest),
}

impl ClueApiRequest {
    /// Parses a request body. Unlike the untagged derive, a body that is not a
    /// wake-up ping reports why it is not a valid clue request.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_slice(body)?;
        if let Some(wake_up) = value.get("wakeUp") {
            return Ok(Self::WakeUp(WakeUpRequest { wake_up: wake_up.clone() }));
        }
        serde_json::from_value(value).map(Self::Clue)
    }
}

pub type ClueResponse = Clue;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NoCluesResponse {
    pub message: String,
}

impl Default for NoCluesResponse {
    fn default() -> Self {
        Self { message: NO_MORE_CLUES_MESSAGE.to_string() }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}
