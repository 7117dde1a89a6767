//! Shared helpers for parts-bot integration tests.

pub mod mock_bot;

use chrono::Utc;
use parts_bot::{Chat, Message, Update, UpdateKind, User};

pub const CHAT_ID: i64 = 456;

pub fn message_update(id: u32, text: &str) -> Update {
    Update {
        id,
        kind: UpdateKind::Message(Message {
            id: format!("msg-{}", id),
            user: User {
                id: 123,
                username: Some("test_user".to_string()),
                first_name: Some("Test".to_string()),
                last_name: None,
            },
            chat: Chat {
                id: CHAT_ID,
                chat_type: "private".to_string(),
            },
            content: text.to_string(),
            created_at: Utc::now(),
        }),
    }
}

pub fn other_update(id: u32) -> Update {
    Update {
        id,
        kind: UpdateKind::Other,
    }
}
