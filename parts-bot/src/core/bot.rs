//! Bot abstraction for sending replies.
//!
//! [`Bot`] is transport-agnostic; `telegram::TelegramBotAdapter` implements it via teloxide.

use crate::core::error::Result;
use crate::core::types::{Chat, Reply};
use async_trait::async_trait;

/// Abstraction for sending messages. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends plain text to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a reply (text plus optional keyboard) to the given chat.
    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> Result<()>;
}
