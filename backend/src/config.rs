use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use axum::http::HeaderValue;
use tracing::info;

use crate::error::Error;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_ALLOWED_ORIGINS: &str = "http://127.0.0.1:8080,http://127.0.0.1:3000";
const STATIC_DIR_CANDIDATES: [&str; 3] = ["static", "backend/static", "../backend/static"];

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
    /// Directory of `normal.json`, `hard.json` and `drunk.json`. The embedded
    /// banks are used when unset.
    pub word_bank_dir: Option<PathBuf>,
    pub allowed_origins: Vec<HeaderValue>,
}

impl Config {
    /// Reads the process environment, after loading `.env` if present.
    pub fn from_env() -> Result<Self, Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("HANGMAN_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| Error::Config(format!("HANGMAN_BIND_ADDR {:?}: {}", bind_addr, e)))?;

        let static_dir = match lookup("HANGMAN_STATIC_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => default_static_dir(),
        };

        let word_bank_dir = lookup("HANGMAN_WORD_BANK_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        let origins = lookup("HANGMAN_ALLOWED_ORIGINS").unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_string());
        let allowed_origins = parse_origins(&origins)?;

        Ok(Self { bind_addr, static_dir, word_bank_dir, allowed_origins })
    }
}

fn default_static_dir() -> PathBuf {
    for candidate in STATIC_DIR_CANDIDATES {
        if Path::new(candidate).exists() {
            if candidate != STATIC_DIR_CANDIDATES[0] {
                info!("Using alternative static path: {}", candidate);
            }
            return PathBuf::from(candidate);
        }
    }
    // Default to static even if it doesn't exist
    PathBuf::from(STATIC_DIR_CANDIDATES[0])
}

fn parse_origins(origins: &str) -> Result<Vec<HeaderValue>, Error> {
    origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| Error::Config(format!("invalid CORS origin {:?}", origin)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert!(config.word_bank_dir.is_none());
        assert_eq!(config.allowed_origins.len(), 2);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("HANGMAN_BIND_ADDR", "0.0.0.0:8000"),
            ("HANGMAN_STATIC_DIR", "/srv/hangman"),
            ("HANGMAN_WORD_BANK_DIR", "/srv/banks"),
            ("HANGMAN_ALLOWED_ORIGINS", "https://example.com, http://localhost:8080,"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr.port(), 8000);
        assert_eq!(config.static_dir, PathBuf::from("/srv/hangman"));
        assert_eq!(config.word_bank_dir, Some(PathBuf::from("/srv/banks")));
        assert_eq!(
            config.allowed_origins,
            vec![
                HeaderValue::from_static("https://example.com"),
                HeaderValue::from_static("http://localhost:8080"),
            ]
        );
    }

    #[test]
    fn test_rejects_bad_bind_addr() {
        let result = Config::from_lookup(lookup(&[("HANGMAN_BIND_ADDR", "not an address")]));
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
