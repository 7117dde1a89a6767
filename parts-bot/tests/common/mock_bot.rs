//! Mock implementation of [`parts_bot::Bot`] for integration tests.
//!
//! Records every reply so tests can assert on count and content without hitting Telegram.

use async_trait::async_trait;
use parts_bot::{Bot, BotError, Chat, Reply, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// One recorded outbound reply.
#[derive(Debug, Clone)]
pub struct SentReply {
    pub chat_id: i64,
    pub reply: Reply,
}

#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<SentReply>>,
    fail_sends: AtomicBool,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    /// When set, every send returns a Bot error and nothing is recorded.
    pub fn set_fail_sends(&self, fail: bool) {
        self.fail_sends.store(fail, Ordering::SeqCst);
    }

    pub fn sent(&self) -> Vec<SentReply> {
        self.sent.lock().unwrap().clone()
    }

    pub fn last_text(&self) -> Option<String> {
        self.sent.lock().unwrap().last().map(|s| s.reply.text.clone())
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.send_reply(chat, &Reply::text(text)).await
    }

    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> Result<()> {
        if self.fail_sends.load(Ordering::SeqCst) {
            return Err(BotError::Bot("send failed".to_string()));
        }
        self.sent.lock().unwrap().push(SentReply {
            chat_id: chat.id,
            reply: reply.clone(),
        });
        Ok(())
    }
}
