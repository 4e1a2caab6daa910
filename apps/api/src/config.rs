use anyhow::{Context, Result};

/// Default cap on resume / job description length, in characters.
pub const DEFAULT_MAX_INPUT_CHARS: usize = 50_000;

/// Application configuration loaded from environment variables.
/// Fails at startup if a numeric variable does not parse.
#[derive(Debug, Clone)]
pub struct Config {
    /// Run history is disabled when unset.
    pub database_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
    pub max_input_chars: usize,
    /// Appended to the built-in stopword list.
    pub extra_stopwords: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_input_chars: match optional_env("MAX_INPUT_CHARS") {
                Some(v) => v
                    .parse::<usize>()
                    .context("MAX_INPUT_CHARS must be a positive integer")?,
                None => DEFAULT_MAX_INPUT_CHARS,
            },
            extra_stopwords: optional_env("EXTRA_STOPWORDS")
                .map(|v| parse_list(&v))
                .unwrap_or_default(),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Splits a comma-separated list, dropping blanks.
fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
