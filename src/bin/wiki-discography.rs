mod commands;

use clap::Parser;
use commands::{execute_command, Commands};
use wiki_discography::WikipediaConfig;

/// Wikipedia discography extractor
#[derive(Parser)]
#[command(
    name = "wiki-discography",
    about = "Extract studio albums, tracklists and personnel from Wikipedia",
    long_about = None
)]
struct Cli {
    /// Show detailed debug information
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = WikipediaConfig::from_env();
    log::debug!("Using wiki API at {}", config.api_url);

    if let Err(e) = execute_command(args.command, config).await {
        eprintln!("❌ {e}");
        std::process::exit(1);
    }

    Ok(())
}
