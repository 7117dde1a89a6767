//! Logs every incoming message as `[username] text`; never stops the chain.

use crate::core::{Handler, Message, Result};
use async_trait::async_trait;
use tracing::info;

#[derive(Clone, Default)]
pub struct LoggingHandler;

impl LoggingHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Handler for LoggingHandler {
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            "[{}] {}",
            message.user.display_name(),
            message.content
        );
        Ok(true)
    }
}
