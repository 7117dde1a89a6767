//! Handler implementations: message logging and shop command dispatch.

mod command_handler;
mod logging_handler;

pub use command_handler::{
    start_keyboard, Command, CommandHandler, CATALOG_ERROR_TEXT, CONTACTS_TEXT, GREETING_TEXT,
    HELP_TEXT, UNKNOWN_COMMAND_TEXT,
};
pub use logging_handler::LoggingHandler;
