use anyhow::{anyhow, Result};
use std::env;
use std::time::Duration;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/mind_bot.db";
pub const DEFAULT_GIGACHAT_AUTH_URL: &str = "https://ngw.devices.sberbank.ru:9443/api/v2/oauth";
pub const DEFAULT_GIGACHAT_API_URL: &str =
    "https://gigachat.devices.sberbank.ru/api/v1/chat/completions";

/// Settings of the GigaChat backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GigaChatConfig {
    pub auth_key: String,
    pub scope: String,
    pub auth_url: String,
    pub api_url: String,
    pub model: String,
    pub timeout: Duration,
    /// Attempts of the credential exchange on transport failures.
    pub max_retries: u32,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub database_url: String,
    pub http_port: u16,
    pub log_level: String,
    pub gigachat: GigaChatConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = non_empty_var("TELEGRAM_BOT_TOKEN")
            .or_else(|| non_empty_var("BOT_TOKEN"))
            .ok_or_else(|| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;

        let auth_key = non_empty_var("GIGACHAT_AUTH_KEY")
            .ok_or_else(|| anyhow!("GIGACHAT_AUTH_KEY must be set"))?;

        let http_port = parse_var("HTTP_PORT", 3000u16)?;
        let api_timeout = parse_var("API_TIMEOUT", 30u64)?;
        if api_timeout == 0 {
            return Err(anyhow!("Invalid API_TIMEOUT"));
        }
        let max_retries = parse_var("MAX_RETRIES", 3u32)?;

        Ok(Config {
            telegram_bot_token: token,
            database_url: database_url_from_env(),
            http_port,
            log_level: non_empty_var("LOG_LEVEL")
                .map(|l| l.to_lowercase())
                .unwrap_or_else(|| "info".to_string()),
            gigachat: GigaChatConfig {
                auth_key,
                scope: non_empty_var("GIGACHAT_SCOPE")
                    .unwrap_or_else(|| "GIGACHAT_API_PERS".to_string()),
                auth_url: non_empty_var("GIGACHAT_AUTH_URL")
                    .unwrap_or_else(|| DEFAULT_GIGACHAT_AUTH_URL.to_string()),
                api_url: non_empty_var("GIGACHAT_API_URL")
                    .unwrap_or_else(|| DEFAULT_GIGACHAT_API_URL.to_string()),
                model: non_empty_var("GIGACHAT_MODEL")
                    .unwrap_or_else(|| "GigaChat:latest".to_string()),
                timeout: Duration::from_secs(api_timeout),
                max_retries,
            },
        })
    }

    /// Filter directives used when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> String {
        format!("mind_trainer_bot={0},tower_http={0}", self.log_level)
    }
}

/// Store location only; the migrate tool needs nothing else.
pub fn database_url_from_env() -> String {
    non_empty_var("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string())
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_var<T: std::str::FromStr>(key: &str, default: T) -> Result<T> {
    match non_empty_var(key) {
        Some(raw) => raw.parse().map_err(|_| anyhow!("Invalid {}", key)),
        None => Ok(default),
    }
}
