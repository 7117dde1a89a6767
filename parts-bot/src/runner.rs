//! Startup wiring: config check, logging, catalog, bot identity, then the poll loop.

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use parts_storage::CatalogRepository;

use crate::config::BotConfig;
use crate::core::init_tracing;
use crate::dispatcher::Dispatcher;
use crate::telegram::{build_teloxide_bot, Poller, TelegramBotAdapter};

/// Opens the catalog and ensures its schema. Any failure here is fatal for startup.
#[instrument(skip(config), fields(database_url = %config.database_url))]
pub async fn open_catalog(config: &BotConfig) -> Result<CatalogRepository> {
    CatalogRepository::new(&config.database_url)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to initialize catalog storage");
            anyhow::anyhow!("Failed to initialize catalog storage: {}", e)
        })
}

/// Main entry: validate config, init logging, open the catalog, authorize the bot, then poll forever.
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log)?;

    info!(
        database_url = %config.database_url,
        poll_timeout_secs = config.poll_timeout_secs,
        debug = config.log.debug,
        "Initializing bot"
    );

    let catalog = open_catalog(&config).await?;

    let teloxide_bot = build_teloxide_bot(&config)?;
    let me = teloxide_bot.get_me().await.map_err(|e| {
        error!(error = %e, "Failed to initialize bot");
        anyhow::anyhow!("Failed to initialize bot: {}", e)
    })?;
    info!(
        username = %me.user.username.as_deref().unwrap_or_default(),
        "Authorized on account"
    );

    let adapter = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let dispatcher = Dispatcher::with_catalog(adapter, Arc::new(catalog));

    info!("Bot started successfully");

    Poller::new(teloxide_bot, dispatcher, config.poll_timeout_secs)
        .run()
        .await
}
