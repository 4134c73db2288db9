//! reddit-hot CLI
//!
//! Prints the hot listing of a subreddit as pretty JSON on stdout.
//! Logs go to stderr so stdout only ever carries the result document.

use std::path::PathBuf;

use clap::Parser;
use reddit_hot::{
    error::Result,
    models::{Config, Outcome},
    services::HotFetcher,
    utils::http,
};

/// Fetch the hot posts of a subreddit
#[derive(Parser, Debug)]
#[command(name = "reddit-hot", version, about)]
struct Cli {
    /// Subreddit name, e.g. `news`
    identifier: Option<String>,

    /// Number of posts to request (default: 3)
    limit: Option<u32>,

    /// Anything after the limit is ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _rest: Vec<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Build the fetcher from validated configuration.
fn build_fetcher(config: &Config) -> Result<HotFetcher> {
    config.validate()?;
    let client = http::create_client(&config.client)?;
    Ok(HotFetcher::new(client, &config.source))
}

fn run(cli: Cli) -> Outcome {
    let Some(identifier) = cli.identifier else {
        return Outcome::missing_identifier();
    };

    let config = match &cli.config {
        Some(path) => {
            log::info!("Loading configuration from {}", path.display());
            Config::load_or_default(path)
        }
        None => Config::default(),
    };
    let limit = cli.limit.unwrap_or(config.source.default_limit);

    match build_fetcher(&config) {
        Ok(fetcher) => fetcher.fetch_outcome(&identifier, limit),
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            Outcome::error(e.to_string())
        }
    }
}

/// Main entry point for the CLI application.
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let outcome = run(cli);
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    Ok(())
}
