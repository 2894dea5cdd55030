use gloo_net::http::Request;
use hangman_shared::constants::{CLUE_ENDPOINT, NETWORK_ERROR, SERVER_ERROR};
use hangman_shared::shared_hangman_game::{ClueRequest, ClueResponse, WakeUpRequest};
use hangman_shared::ClueOutcome;
use log::{info, warn};
use wasm_bindgen_futures::spawn_local;

use crate::config::get_api_base_url;

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    Network(String),
    Server(u16),
}

impl ApiError {
    /// Text for the status line.
    pub fn message(&self) -> &'static str {
        match self {
            ApiError::Network(_) => NETWORK_ERROR,
            ApiError::Server(_) => SERVER_ERROR,
        }
    }
}

fn clue_url() -> String {
    format!("{}{}", get_api_base_url(), CLUE_ENDPOINT)
}

pub async fn fetch_clue(request: &ClueRequest) -> Result<ClueOutcome, ApiError> {
    let response = Request::post(&clue_url())
        .json(request)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| {
            warn!("Network error: {:?}", e);
            ApiError::Network(e.to_string())
        })?;

    match response.status() {
        200 => response
            .json::<ClueResponse>()
            .await
            .map(ClueOutcome::Served)
            .map_err(|e| {
                warn!("Error parsing clue: {:?}", e);
                ApiError::Server(200)
            }),
        204 => Ok(ClueOutcome::Exhausted),
        status => {
            warn!("Unexpected status: {}", status);
            Err(ApiError::Server(status))
        }
    }
}

/// Pings the clue API so a cold backend is ready before the first round.
pub fn wake_up() {
    spawn_local(async move {
        let request = match Request::post(&clue_url()).json(&WakeUpRequest::new()) {
            Ok(request) => request,
            Err(e) => {
                warn!("Failed to build wake-up request: {:?}", e);
                return;
            }
        };
        match request.send().await {
            Ok(response) => info!("Wake-up ping answered with {}", response.status()),
            Err(e) => warn!("Wake-up ping failed: {:?}", e),
        }
    });
}
