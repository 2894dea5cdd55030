use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use hangman_shared::constants::WAKE_UP_MESSAGE;
use hangman_shared::shared_hangman_game::{ClueApiRequest, NoCluesResponse};
use hangman_shared::{ClueSource, Difficulty, WordBanks};
use tracing::{info, warn};
use validator::Validate;

use crate::config::Config;
use crate::error::Error;

pub struct HangmanGameState {
    banks: WordBanks,
}

impl HangmanGameState {
    pub fn new(banks: WordBanks) -> Self {
        Self { banks }
    }

    /// Loads banks from `HANGMAN_WORD_BANK_DIR` when configured, otherwise
    /// the ones compiled in.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        let banks = match &config.word_bank_dir {
            Some(dir) => {
                info!("Loading word banks from {}", dir.display());
                WordBanks::load_dir(dir)?
            }
            None => WordBanks::builtin().clone(),
        };

        for difficulty in Difficulty::ALL {
            info!("{} bank holds {} clues", difficulty, banks.get(difficulty).len());
        }

        Ok(Self::new(banks))
    }
}

async fn get_clue(
    State(state): State<Arc<HangmanGameState>>,
    body: Bytes,
) -> Result<Response, Error> {
    let request = match ClueApiRequest::from_slice(&body) {
        Ok(ClueApiRequest::WakeUp(_)) => {
            info!("Wake-up ping received");
            return Ok((StatusCode::OK, Json(WAKE_UP_MESSAGE)).into_response());
        }
        Ok(ClueApiRequest::Clue(request)) => request,
        Err(e) => {
            warn!("Rejected clue request: {}", e);
            return Err(e.into());
        }
    };
    request.validate()?;

    match state.banks.next_clue(request.difficulty, &request.seen) {
        Some(clue) => {
            info!("Serving {} clue ({} already seen)", request.difficulty, request.seen.len());
            Ok((StatusCode::OK, Json(clue)).into_response())
        }
        None => {
            info!("No clues left for {} difficulty", request.difficulty);
            Ok((StatusCode::NO_CONTENT, Json(NoCluesResponse::default())).into_response())
        }
    }
}

pub fn create_router() -> Router<Arc<HangmanGameState>> {
    Router::new().route("/clue", post(get_clue))
}
