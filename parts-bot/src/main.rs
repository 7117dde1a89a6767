//! Binary for the auto-parts shop bot.

use anyhow::Result;
use clap::Parser;
use parts_bot::{execute, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    execute(cli).await
}
