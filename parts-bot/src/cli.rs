//! Command-line interface: run the bot, or seed and inspect the catalog.

use anyhow::Result;
use clap::{Parser, Subcommand};
use parts_storage::{CatalogRepository, PartCatalog};

use crate::catalog::{format_catalog, format_part};
use crate::config::{database_url_from_env, BotConfig, LogConfig};
use crate::core::init_tracing;
use crate::runner::run_bot;

#[derive(Parser)]
#[command(name = "parts-bot")]
#[command(about = "Auto-parts shop Telegram bot: run, add-part, catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override TELEGRAM_BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Add a part to the catalog (DATABASE_URL from env).
    AddPart {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        price: f64,
    },
    /// Print the catalog exactly as the bot would send it.
    Catalog,
}

/// Dispatches a parsed command line.
pub async fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(token)?;
            run_bot(config).await
        }
        Commands::AddPart { name, price } => {
            init_tracing(&LogConfig::from_env())?;
            let repo = CatalogRepository::new(&database_url_from_env()).await?;
            let part = repo.add_part(&name, price).await?;
            println!("{}", format_part(&part).trim_end());
            Ok(())
        }
        Commands::Catalog => {
            init_tracing(&LogConfig::from_env())?;
            let repo = CatalogRepository::new(&database_url_from_env()).await?;
            let parts = repo.list_parts().await?;
            print!("{}", format_catalog(&parts));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_with_token() {
        let cli = Cli::try_parse_from(["parts-bot", "run", "--token", "abc"]).unwrap();
        assert!(matches!(cli.command, Commands::Run { token: Some(ref t) } if t == "abc"));
    }

    #[test]
    fn test_parse_add_part() {
        let cli =
            Cli::try_parse_from(["parts-bot", "add-part", "--name", "Filter", "--price", "10.5"])
                .unwrap();
        match cli.command {
            Commands::AddPart { name, price } => {
                assert_eq!(name, "Filter");
                assert_eq!(price, 10.5);
            }
            _ => panic!("expected add-part"),
        }
    }

    #[test]
    fn test_parse_rejects_non_numeric_price() {
        assert!(
            Cli::try_parse_from(["parts-bot", "add-part", "--name", "Filter", "--price", "ten"])
                .is_err()
        );
    }
}
