//! Long-poll loop over `getUpdates`. Updates are dispatched one at a time, in arrival order.

use std::time::Duration;

use teloxide::payloads::GetUpdatesSetters;
use teloxide::prelude::*;
use teloxide::{ApiError, RequestError};
use tracing::{debug, error, info, warn};

use crate::core::ToCoreUpdate;
use crate::dispatcher::Dispatcher;

use super::adapters::TelegramUpdateWrapper;

const RETRY_DELAY: Duration = Duration::from_secs(3);

pub struct Poller {
    bot: teloxide::Bot,
    dispatcher: Dispatcher,
    timeout_secs: u32,
    offset: i32,
}

impl Poller {
    pub fn new(bot: teloxide::Bot, dispatcher: Dispatcher, timeout_secs: u32) -> Self {
        Self {
            bot,
            dispatcher,
            timeout_secs,
            offset: 0,
        }
    }

    /// Offset sent with the next `getUpdates` call (last seen update id + 1).
    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Fetches one batch and dispatches every update in it. Returns the batch size.
    ///
    /// Dispatch failures are logged and do not abort the batch.
    pub async fn poll_once(&mut self) -> Result<usize, RequestError> {
        let updates = self
            .bot
            .get_updates()
            .offset(self.offset)
            .timeout(self.timeout_secs)
            .await?;

        for update in &updates {
            self.offset = update.id.0 as i32 + 1;
            let core_update = TelegramUpdateWrapper(update).to_core();
            match self.dispatcher.dispatch(&core_update).await {
                Ok(replied) => debug!(update_id = core_update.id, replied, "Update handled"),
                Err(e) => error!(error = %e, update_id = core_update.id, "Failed to handle update"),
            }
        }

        Ok(updates.len())
    }

    /// Polls forever. Returns only when Telegram rejects the token.
    pub async fn run(mut self) -> anyhow::Result<()> {
        info!(timeout_secs = self.timeout_secs, "Polling for updates");
        loop {
            match self.poll_once().await {
                Ok(_) => {}
                Err(RequestError::Api(ApiError::InvalidToken)) => {
                    anyhow::bail!("Telegram rejected the bot token while polling");
                }
                Err(e) => {
                    warn!(error = %e, "Failed to get updates, retrying in 3 seconds");
                    tokio::time::sleep(RETRY_DELAY).await;
                }
            }
        }
    }
}
