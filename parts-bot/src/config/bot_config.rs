//! BotConfig: token, Telegram API URL, poll timeout, catalog database, logging.
//!
//! Use `load()` for env-based loading, then `validate()` to fail fast before any network or storage work.

use anyhow::Result;
use std::env;

use super::LogConfig;

pub const DEFAULT_DATABASE_URL: &str = "./auto_parts.db";
pub const DEFAULT_POLL_TIMEOUT_SECS: u32 = 60;

#[derive(Debug, Clone)]
pub struct BotConfig {
    /// TELEGRAM_BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// Long-poll timeout for getUpdates, in seconds
    pub poll_timeout_secs: u32,
    /// Catalog database (SQLite file path, optionally `sqlite:` prefixed)
    pub database_url: String,
    pub log: LogConfig,
}

impl BotConfig {
    /// Load from environment variables. `token` overrides TELEGRAM_BOT_TOKEN if provided.
    /// Fails when no non-empty token is available.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = token
            .filter(|t| !t.trim().is_empty())
            .or_else(|| {
                env::var("TELEGRAM_BOT_TOKEN")
                    .ok()
                    .filter(|t| !t.trim().is_empty())
            })
            .ok_or_else(|| anyhow::anyhow!("TELEGRAM_BOT_TOKEN environment variable is not set"))?;
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let poll_timeout_secs = env::var("POLL_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_POLL_TIMEOUT_SECS);

        Ok(Self {
            bot_token: bot_token.trim().to_string(),
            telegram_api_url,
            poll_timeout_secs,
            database_url: database_url_from_env(),
            log: LogConfig::from_env(),
        })
    }

    /// Validate config (e.g. telegram_api_url must be a valid URL if set).
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }
}

/// DATABASE_URL, or `./auto_parts.db` when unset. Used on its own by the admin commands.
pub fn database_url_from_env() -> String {
    env::var("DATABASE_URL")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string())
}
