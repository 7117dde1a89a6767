//! Error types for the bot core.
//!
//! [`BotError`] covers transport failures seen by handlers and the dispatcher.

use thiserror::Error;

/// Top-level error for the shop bot.
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Bot error: {0}")]
    Bot(String),
}

/// Result type for core operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;
