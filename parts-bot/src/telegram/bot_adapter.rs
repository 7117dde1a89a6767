//! Wraps teloxide::Bot and implements [`crate::core::Bot`]. Production code sends messages via Telegram; tests can substitute another Bot impl.

use std::time::Duration;

use crate::config::BotConfig;
use crate::core::{Bot as CoreBot, BotError, Chat, Reply, ReplyKeyboard, Result};
use async_trait::async_trait;
use teloxide::payloads::SendMessageSetters;
use teloxide::prelude::*;
use teloxide::types::{ChatId, KeyboardButton, KeyboardMarkup};

/// Extra seconds on top of the long-poll timeout before the HTTP client gives up.
const CLIENT_TIMEOUT_MARGIN_SECS: u64 = 10;

/// Builds the teloxide Bot from config: token, optional API URL, and an HTTP timeout
/// longer than the long-poll timeout.
pub fn build_teloxide_bot(config: &BotConfig) -> anyhow::Result<teloxide::Bot> {
    let client = teloxide::net::default_reqwest_settings()
        .timeout(Duration::from_secs(
            u64::from(config.poll_timeout_secs) + CLIENT_TIMEOUT_MARGIN_SECS,
        ))
        .build()?;
    let bot = teloxide::Bot::with_client(config.bot_token.clone(), client);

    match config.telegram_api_url {
        Some(ref url_str) => {
            let url = reqwest::Url::parse(url_str).map_err(|e| {
                anyhow::anyhow!("Invalid TELEGRAM_API_URL {}: {}", url_str, e)
            })?;
            Ok(bot.set_api_url(url))
        }
        None => Ok(bot),
    }
}

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

fn keyboard_markup(keyboard: &ReplyKeyboard) -> KeyboardMarkup {
    KeyboardMarkup::new(
        keyboard
            .rows
            .iter()
            .map(|row| row.iter().map(|label| KeyboardButton::new(label.clone())).collect::<Vec<_>>()),
    )
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> Result<()> {
        let Some(keyboard) = &reply.keyboard else {
            return self.send_message(chat, &reply.text).await;
        };
        self.bot
            .send_message(ChatId(chat.id), reply.text.clone())
            .reply_markup(keyboard_markup(keyboard))
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }
}
