//! Telegram layer: teloxide adapters, Bot implementation, long-poll loop.

mod adapters;
mod bot_adapter;
mod poller;

pub use adapters::{TelegramMessageWrapper, TelegramUpdateWrapper, TelegramUserWrapper};
pub use bot_adapter::{build_teloxide_bot, TelegramBotAdapter};
pub use poller::Poller;
