use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing; the e-mail delivery
/// settings are optional and only gate the report-sharing endpoint.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub email_api_url: Option<String>,
    pub email_api_key: Option<String>,
    pub email_from: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            email_api_url: optional_env("EMAIL_API_URL"),
            email_api_key: optional_env("EMAIL_API_KEY"),
            email_from: optional_env("EMAIL_FROM"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
