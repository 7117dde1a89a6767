//! Update dispatcher: runs one update through the handler chain and sends its reply.
//!
//! Stateless between updates. Non-message updates are skipped without a reply.

use std::sync::Arc;

use parts_storage::PartCatalog;
use tracing::{debug, instrument};

use crate::chain::HandlerChain;
use crate::core::{Bot, HandlerResponse, Result, Update, UpdateKind};
use crate::handlers::{CommandHandler, LoggingHandler};

/// Builds the shop chain: logging → command dispatch.
pub fn build_handler_chain(catalog: Arc<dyn PartCatalog>) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler::new()))
        .add_handler(Arc::new(CommandHandler::new(catalog)))
}

#[derive(Clone)]
pub struct Dispatcher {
    bot: Arc<dyn Bot>,
    chain: HandlerChain,
}

impl Dispatcher {
    pub fn new(bot: Arc<dyn Bot>, chain: HandlerChain) -> Self {
        Self { bot, chain }
    }

    /// Dispatcher with the standard shop chain over the given catalog.
    pub fn with_catalog(bot: Arc<dyn Bot>, catalog: Arc<dyn PartCatalog>) -> Self {
        Self::new(bot, build_handler_chain(catalog))
    }

    /// Handles one update. Returns `Ok(true)` when a reply was sent.
    ///
    /// Errors are returned for the caller to log; they never carry state into the next update.
    #[instrument(skip(self, update), fields(update_id = update.id))]
    pub async fn dispatch(&self, update: &Update) -> Result<bool> {
        let message = match &update.kind {
            UpdateKind::Message(message) => message,
            UpdateKind::Other => {
                debug!("Ignoring non-message update");
                return Ok(false);
            }
        };

        match self.chain.handle(message).await? {
            HandlerResponse::Reply(reply) => {
                self.bot.send_reply(&message.chat, &reply).await?;
                Ok(true)
            }
            HandlerResponse::Continue | HandlerResponse::Stop | HandlerResponse::Ignore => Ok(false),
        }
    }
}
