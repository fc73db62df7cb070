use anyhow::Result;
use clap::{Parser, Subcommand};
use profetch::cli::{SendArgs, print_routes, send};
use profetch::config::Config;
use profetch::observability::init_observability;

/// profetch - marketplace inquiry delivery
#[derive(Parser)]
#[command(name = "profetch")]
#[command(about = "Compose and deliver marketplace inquiries to listing owners", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose, validate and deliver a single inquiry
    Send(SendArgs),
    /// Print the effective inquiry route table
    Routes,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config)?;
    init_observability(&config.observability.log_level)?;
    tracing::debug!(base_url = %config.backend.base_url, "configuration loaded");

    match cli.command {
        Commands::Send(args) => send(config, args).await,
        Commands::Routes => {
            print_routes(&config);
            Ok(())
        }
    }
}
