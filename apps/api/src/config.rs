use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_API_URL;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_SESSION_IDLE_SECS: u64 = 30 * 60;
const DEFAULT_MAX_SESSIONS: u64 = 1_000;

/// Application configuration loaded from environment variables.
/// Read once at startup; nothing here is hot-reloaded.
#[derive(Debug, Clone)]
pub struct Config {
    /// Chat-completion credential. `None` pins the process to fallback-only replies.
    pub nvidia_api_key: Option<String>,
    pub llm_api_url: String,
    pub llm_timeout: Duration,
    /// Optional JSON file replacing the built-in portfolio profile.
    pub profile_path: Option<PathBuf>,
    /// Sessions idle longer than this are discarded.
    pub session_idle_ttl: Duration,
    pub max_sessions: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            nvidia_api_key: optional_env("NVIDIA_API_KEY"),
            llm_api_url: optional_env("LLM_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            llm_timeout: Duration::from_secs(positive_env(
                "LLM_TIMEOUT_SECS",
                DEFAULT_TIMEOUT_SECS,
            )?),
            profile_path: optional_env("PROFILE_PATH").map(PathBuf::from),
            session_idle_ttl: Duration::from_secs(positive_env(
                "SESSION_IDLE_SECS",
                DEFAULT_SESSION_IDLE_SECS,
            )?),
            max_sessions: positive_env("MAX_SESSIONS", DEFAULT_MAX_SESSIONS)? as usize,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads an env var, treating unset and blank values alike.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Reads a whole number that must be at least 1, falling back to `default` when unset.
fn positive_env(key: &str, default: u64) -> Result<u64> {
    parse_positive(key, optional_env(key).as_deref(), default)
}

fn parse_positive(key: &str, raw: Option<&str>, default: u64) -> Result<u64> {
    match raw {
        Some(raw) => raw
            .parse::<u64>()
            .ok()
            .filter(|&n| n > 0)
            .with_context(|| format!("{key} must be a positive whole number")),
        None => Ok(default),
    }
}
