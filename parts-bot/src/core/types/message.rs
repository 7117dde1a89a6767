//! Incoming message type and command token extraction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};

/// A single incoming chat message. `content` is empty for messages without text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Leading command token without the slash and without an `@botname` suffix.
    ///
    /// `"/catalog@shop_bot now"` gives `Some("catalog")`; text not starting with `/` gives `None`.
    pub fn command(&self) -> Option<&str> {
        command_token(&self.content)
    }
}

/// Extracts the command token from raw message text; see [`Message::command`].
pub fn command_token(text: &str) -> Option<&str> {
    let rest = text.strip_prefix('/')?;
    // Telegram's bot_command entity covers only letters, digits and underscores.
    let end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(rest.len());
    let name = &rest[..end];
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}
