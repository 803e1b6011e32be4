use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; the engine needs no credentials.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on tasks accepted in one analyze request.
    pub max_tasks_per_request: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_tasks_per_request: std::env::var("MAX_TASKS_PER_REQUEST")
                .unwrap_or_else(|_| "500".to_string())
                .parse::<usize>()
                .context("MAX_TASKS_PER_REQUEST must be a non-negative integer")?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            max_tasks_per_request: 500,
        }
    }
}
