use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "brandpulse-cli")]
#[command(about = "Brand-mention analytics over stored model responses")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Analyze responses and emit the raw analysis records.
    Analyze(RunArgs),
    /// Analyze responses and emit aggregate performance metrics.
    Report(RunArgs),
    /// Analyze responses and emit a per-model performance comparison.
    Compare(RunArgs),
}

#[derive(Debug, Args)]
struct RunArgs {
    /// Path to the roster YAML (one owner plus competitors).
    #[arg(long)]
    roster: PathBuf,

    /// Path to a JSON array of stored model responses.
    #[arg(long)]
    responses: PathBuf,

    /// Write output JSON here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = brandpulse_core::load_app_config_from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match cli.command {
        Commands::Analyze(args) => commands::analyze(&config, &args).await,
        Commands::Report(args) => commands::report(&config, &args).await,
        Commands::Compare(args) => commands::compare(&config, &args).await,
    }
}
