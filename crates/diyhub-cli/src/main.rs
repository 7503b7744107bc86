mod import;
mod price;
mod tiles;
mod wishlist;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "diyhub")]
#[command(about = "DIY project helper: retailer price lookup, tile quantities, material import")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Read the price from one or more retailer product pages
    Price {
        /// Product page URLs
        #[arg(required = true)]
        urls: Vec<String>,

        /// Maximum pages fetched at once (defaults to DIYHUB_SCRAPER_MAX_CONCURRENT)
        #[arg(long)]
        concurrency: Option<usize>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compute how many tiles a room needs
    Tiles(tiles::TilesArgs),
    /// Build a material line from a retailer product page
    Import {
        /// Product page URL
        url: String,

        /// Name used when the page does not provide one
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value_t = 1.0)]
        quantity: f64,

        #[arg(long, default_value = "pièce")]
        unit: String,

        /// Existing notes to keep on the material
        #[arg(long)]
        notes: Option<String>,
    },
    /// Print the shopping list of materials not yet purchased
    Wishlist {
        /// JSON file holding one material or an array of materials
        input: PathBuf,

        /// Write the list to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = diyhub_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(env = %config.env, locale = %config.locale, "configuration loaded");

    match cli.command {
        Some(Commands::Price {
            urls,
            concurrency,
            json,
        }) => price::run_price(&config, urls, concurrency, json).await,
        Some(Commands::Tiles(args)) => tiles::run_tiles(&config, &args),
        Some(Commands::Import {
            url,
            name,
            quantity,
            unit,
            notes,
        }) => {
            let draft = diyhub_core::MaterialDraft {
                notes,
                ..diyhub_core::MaterialDraft::new(name, quantity, unit)
            };
            import::run_import(&config, &url, draft).await
        }
        Some(Commands::Wishlist { input, output }) => {
            wishlist::run_wishlist(&config, &input, output.as_deref())
        }
        None => {
            println!("diyhub ready; run `diyhub --help` for commands");
            Ok(())
        }
    }
}
