use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use axum::body::Body;
use axum::http::{header, HeaderMap, HeaderName, HeaderValue, Method, Request, Response, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{middleware, Router};
use once_cell::sync::Lazy;
use tokio::net::TcpListener;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::games::backend_hangman_game::{create_router as create_hangman_game_router, HangmanGameState};

mod config;
mod error;
mod games;
mod logging;

// Track which IP addresses have been logged with timestamps
static LOGGED_IPS: Lazy<Mutex<HashMap<String, u64>>> = Lazy::new(|| Mutex::new(HashMap::new()));

// Time before we log the same IP again (in seconds)
const IP_LOG_EXPIRY: u64 = 3600;

const ROBOTS_TXT: &str = "User-agent: *\nAllow: /\n";

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

async fn serve_robots() -> impl IntoResponse {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/plain"),
            (header::CACHE_CONTROL, "no-cache, no-store, must-revalidate"),
        ],
        ROBOTS_TXT,
    )
}

fn client_ip(headers: &HeaderMap) -> String {
    let header_value = |name: &str| headers.get(name).and_then(|value| value.to_str().ok());

    header_value("cf-connecting-ip")
        .or_else(|| header_value("x-forwarded-for").and_then(|forwarded| forwarded.split(',').next()))
        .or_else(|| header_value("x-real-ip"))
        .map(|ip| ip.trim().to_string())
        .filter(|ip| !ip.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

/// True the first time `ip` is seen, and again once `IP_LOG_EXPIRY` has passed.
fn should_log_visit(ip: &str, now: u64) -> bool {
    let mut logged_ips = match LOGGED_IPS.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };

    match logged_ips.get(ip) {
        Some(last_time) if now.saturating_sub(*last_time) <= IP_LOG_EXPIRY => false,
        _ => {
            logged_ips.insert(ip.to_string(), now);
            true
        }
    }
}

async fn log_request_middleware(request: Request<Body>, next: middleware::Next) -> Response<Body> {
    let ip = client_ip(request.headers());
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::from_secs(0))
        .as_secs();
    if should_log_visit(&ip, now) {
        info!("👋 Website visit: {}", ip);
    }

    let started = Instant::now();
    let response = next.run(request).await;

    if path.starts_with("/api") {
        let elapsed = started.elapsed().as_millis();
        let status = response.status();
        if status.is_server_error() {
            error!("{} {} -> {} in {}ms", method, path, status.as_u16(), elapsed);
        } else if status.is_client_error() {
            warn!("{} {} -> {} in {}ms", method, path, status.as_u16(), elapsed);
        } else {
            info!("{} {} -> {} in {}ms", method, path, status.as_u16(), elapsed);
        }
    }

    response
}

fn cors_layer(config: &Config) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(config.allowed_origins.clone())
        .allow_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(vec![
            HeaderName::from_static("content-type"),
            HeaderName::from_static("x-requested-with"),
        ])
}

pub fn build_app(config: &Config, hangman_state: Arc<HangmanGameState>) -> Router {
    let index = config.static_dir.join("index.html");
    let static_service = ServeDir::new(&config.static_dir).fallback(ServeFile::new(index));

    // Force revalidation so a redeploy is picked up immediately
    let cache_control_layer =
        SetResponseHeaderLayer::if_not_present(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    let static_service = cache_control_layer.layer(static_service);

    let cors = cors_layer(config);

    Router::new()
        .route("/api/health_check", get(health_check))
        .route("/robots.txt", get(serve_robots))
        .nest("/api", create_hangman_game_router().with_state(hangman_state))
        .fallback_service(static_service)
        .layer(cors)
        .layer(middleware::from_fn(log_request_middleware))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::setup();

    let config = Config::from_env().map_err(|e| {
        error!("{}", e);
        e
    })?;

    let hangman_state = HangmanGameState::from_config(&config).map_err(|e| {
        error!("Failed to load word banks: {}", e);
        e
    })?;

    info!("Serving static files from {}", config.static_dir.display());
    let app = build_app(&config, Arc::new(hangman_state));

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!("listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hangman_shared::WordBanks;
    use tower::ServiceExt;

    fn test_app() -> Router {
        let config = Config::from_lookup(|key| match key {
            "HANGMAN_STATIC_DIR" => Some("does-not-exist".to_string()),
            _ => None,
        })
        .unwrap();
        let state = Arc::new(HangmanGameState::new(WordBanks::builtin().clone()));
        build_app(&config, state)
    }

    #[tokio::test]
    async fn test_health_check() {
        let request = Request::builder().uri("/api/health_check").body(Body::empty()).unwrap();
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_clue_route_is_nested_under_api() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/clue")
            .body(Body::from(r#"{"difficulty": "drunk", "seen": []}"#))
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_client_ip_prefers_cloudflare_header() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static("10.0.0.1, 10.0.0.2"));
        assert_eq!(client_ip(&headers), "10.0.0.1");
        headers.insert("cf-connecting-ip", HeaderValue::from_static(" 1.2.3.4 "));
        assert_eq!(client_ip(&headers), "1.2.3.4");
        assert_eq!(client_ip(&HeaderMap::new()), "unknown");
    }

    #[test]
    fn test_visit_logged_once_per_window() {
        assert!(should_log_visit("192.0.2.7", 1_000));
        assert!(!should_log_visit("192.0.2.7", 1_000 + IP_LOG_EXPIRY));
        assert!(should_log_visit("192.0.2.7", 1_001 + IP_LOG_EXPIRY));
    }
}
