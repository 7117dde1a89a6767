//! # Auto-parts shop bot
//!
//! Long-polls Telegram, dispatches `/start`, `/help`, `/catalog` and `/contacts`, and reads the
//! parts catalog from SQLite (`parts-storage`).

pub mod catalog;
pub mod chain;
pub mod cli;
pub mod config;
pub mod core;
pub mod dispatcher;
pub mod handlers;
pub mod runner;
pub mod telegram;

pub use cli::{execute, Cli, Commands};

pub use crate::core::{
    Bot, BotError, Chat, Handler, HandlerResponse, Message, Reply, ReplyKeyboard, Result,
    ToCoreMessage, ToCoreUpdate, ToCoreUser, Update, UpdateKind, User, init_tracing,
};

pub use chain::HandlerChain;
pub use config::{BotConfig, LogConfig};
pub use dispatcher::{build_handler_chain, Dispatcher};
pub use handlers::{Command, CommandHandler, LoggingHandler};
pub use runner::run_bot;
pub use telegram::{Poller, TelegramBotAdapter};
