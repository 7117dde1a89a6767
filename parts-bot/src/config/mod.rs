//! Bot configuration: Telegram connection, catalog database, logging. Loaded from env.

mod bot_config;
mod log_config;


pub use bot_config::{database_url_from_env, BotConfig, DEFAULT_DATABASE_URL, DEFAULT_POLL_TIMEOUT_SECS};
pub use log_config::LogConfig;
