//! Core types and traits: Handler, Bot, Message, Update, Reply, error, logger.
//! Transport-agnostic; the telegram module adapts teloxide onto these.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{BotError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Handler, HandlerResponse, Message, Reply, ReplyKeyboard, ToCoreMessage, ToCoreUpdate,
    ToCoreUser, Update, UpdateKind, User,
};
