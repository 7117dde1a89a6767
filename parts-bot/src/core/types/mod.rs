//! Core types: user, chat, message, update, reply, handler response, and Handler trait.
//!
//! One file per main type.

mod chat;
mod handler;
mod message;
mod response;
mod update;
mod user;

pub use chat::Chat;
pub use handler::{Handler, ToCoreMessage, ToCoreUpdate, ToCoreUser};
pub use message::Message;
pub use response::{HandlerResponse, Reply, ReplyKeyboard};
pub use update::{Update, UpdateKind};
pub use user::User;
