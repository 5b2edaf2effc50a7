mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use staybook_core::{EmptyPricingPolicy, StoreSource};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "staybook-cli")]
#[command(about = "Query the staybook hotel document from the command line")]
struct Cli {
    /// Read this document instead of the configured source
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print one hotel record by id
    Hotel {
        /// Exact hotel id
        id: String,
    },
    /// Print the recommended hotels
    Recommended,
    /// Print the top ten hotels by best available discount
    BestOffers {
        /// Fail instead of skipping hotels that have no pricing options
        #[arg(long)]
        reject_empty_pricing: bool,
    },
    /// Check the document for duplicate ids and unusable pricing
    Validate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = staybook_core::load_app_config_for_document(cli.db.as_deref())?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let source = match cli.db {
        Some(path) => StoreSource::File(path),
        None => StoreSource::from_config(&config)?,
    };
    tracing::debug!(store_source = %source, "loading hotel document");

    match cli.command {
        Commands::Hotel { id } => commands::run_hotel(&source, &id).await,
        Commands::Recommended => commands::run_recommended(&source).await,
        Commands::BestOffers {
            reject_empty_pricing,
        } => {
            let policy = if reject_empty_pricing {
                EmptyPricingPolicy::Reject
            } else {
                config.empty_pricing
            };
            commands::run_best_offers(&source, policy).await
        }
        Commands::Validate => commands::run_validate(&source).await,
    }
}

#[cfg(test)]
mod tests;
