//! Shop command handler: maps the command token to one of the fixed replies.
//!
//! `/catalog` is the only command that touches storage. A failed catalog read is logged and
//! answered with [`CATALOG_ERROR_TEXT`]; it never fails the chain.

use std::sync::Arc;

use async_trait::async_trait;
use parts_storage::PartCatalog;
use tracing::{error, instrument};

use crate::catalog::format_catalog;
use crate::core::{Handler, HandlerResponse, Message, Reply, ReplyKeyboard, Result};

pub const GREETING_TEXT: &str = "Привет! Я бот для магазина автозапчастей. Выберите действие:";
pub const HELP_TEXT: &str = "Доступные команды:\n/start - Начать работу с ботом\n/catalog - Показать каталог автозапчастей\n/contacts - Контактная информация";
pub const CONTACTS_TEXT: &str =
    "Контактная информация:\nEmail: example@example.com\nTelegram: @example";
pub const UNKNOWN_COMMAND_TEXT: &str =
    "Неизвестная команда. Используй /help для получения списка команд.";
pub const CATALOG_ERROR_TEXT: &str = "Ошибка при получении каталога.";

/// Commands the shop bot understands. Matching is case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Catalog,
    Contacts,
    Unknown,
}

impl Command {
    /// Maps a command token (see `Message::command`) to a command; no token is `Unknown`.
    pub fn parse(token: Option<&str>) -> Self {
        match token {
            Some("start") => Command::Start,
            Some("help") => Command::Help,
            Some("catalog") => Command::Catalog,
            Some("contacts") => Command::Contacts,
            _ => Command::Unknown,
        }
    }
}

/// Keyboard offered with the greeting.
pub fn start_keyboard() -> ReplyKeyboard {
    ReplyKeyboard::row(["/catalog", "/contacts"])
}

/// Terminal handler: always answers with a reply.
#[derive(Clone)]
pub struct CommandHandler {
    catalog: Arc<dyn PartCatalog>,
}

impl CommandHandler {
    pub fn new(catalog: Arc<dyn PartCatalog>) -> Self {
        Self { catalog }
    }

    /// Builds the reply for one command.
    pub async fn reply_for(&self, command: Command, message: &Message) -> Reply {
        match command {
            Command::Start => Reply::text(GREETING_TEXT).with_keyboard(start_keyboard()),
            Command::Help => Reply::text(HELP_TEXT),
            Command::Catalog => self.catalog_reply(message).await,
            Command::Contacts => Reply::text(CONTACTS_TEXT),
            Command::Unknown => Reply::text(UNKNOWN_COMMAND_TEXT),
        }
    }

    async fn catalog_reply(&self, message: &Message) -> Reply {
        match self.catalog.list_parts().await {
            Ok(parts) => Reply::text(format_catalog(&parts)),
            Err(e) => {
                error!(error = %e, chat_id = message.chat.id, "Failed to get catalog");
                Reply::text(CATALOG_ERROR_TEXT)
            }
        }
    }
}

#[async_trait]
impl Handler for CommandHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let command = Command::parse(message.command());
        let reply = self.reply_for(command, message).await;
        Ok(HandlerResponse::Reply(reply))
    }
}
