use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use donut_infrastructure::ConfigService;

mod commands;

use commands::{Context, DirectionArg};

#[derive(Parser)]
#[command(name = "donut")]
#[command(about = "Mega Donut CLI - arrange categories and products", long_about = None)]
struct Cli {
    /// Catalog JSON file: [{ "name": ..., "products": [{ "id": ..., "name": ... }] }]
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Directory holding the saved order and preferences (overrides config.toml)
    #[arg(long, global = true)]
    storage_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the catalog in its saved order
    Show,
    /// Move a category one step or to an end of the list
    MoveCategory {
        category: String,
        direction: DirectionArg,
    },
    /// Move a product within its category
    MoveProduct {
        category: String,
        product: String,
        direction: DirectionArg,
    },
    /// Drop a category onto the position of another
    Drag { dragged: String, target: String },
    /// Discard the saved order and restore catalog order
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Display preferences
    Prefs {
        #[command(subcommand)]
        action: PrefsAction,
    },
    /// The config.toml file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the config file location and effective values
    Show,
    /// Write a config.toml with the default values
    Init,
}

#[derive(Subcommand)]
enum PrefsAction {
    /// Print the current preferences
    Show,
    /// Set the font size (small, medium, large)
    FontSize { size: String },
    /// Move a column of the order table
    MoveColumn { from: usize, to: usize },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_service = ConfigService::new()?;
    let config = config_service.load()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    let ctx = Context::new(config, cli.catalog, cli.storage_dir);

    match cli.command {
        Commands::Show => commands::order::show(&ctx)?,
        Commands::MoveCategory {
            category,
            direction,
        } => commands::order::move_category(&ctx, category, direction.into())?,
        Commands::MoveProduct {
            category,
            product,
            direction,
        } => commands::order::move_product(&ctx, category, product, direction.into())?,
        Commands::Drag { dragged, target } => commands::order::drag(&ctx, dragged, target)?,
        Commands::Reset { yes } => commands::order::reset(&ctx, yes)?,
        Commands::Prefs { action } => match action {
            PrefsAction::Show => commands::prefs::show(&ctx)?,
            PrefsAction::FontSize { size } => commands::prefs::font_size(&ctx, &size)?,
            PrefsAction::MoveColumn { from, to } => commands::prefs::move_column(&ctx, from, to)?,
        },
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&config_service)?,
            ConfigAction::Init => commands::config::init(&config_service)?,
        },
    }

    Ok(())
}
