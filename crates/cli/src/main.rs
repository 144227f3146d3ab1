//! `catalog` command-line entry point

use anyhow::{Context, Result};
use catalog_cli::{Cli, Settings};
use catalog_client::ApiClient;
use catalog_core::ConsoleConfig;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

fn load_config(cli: &Cli) -> Result<ConsoleConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let mut config = ConsoleConfig::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            config.apply_overrides(|key| std::env::var(key).ok())?;
            config
        }
        None => ConsoleConfig::load().context("Failed to load configuration")?,
    };
    if let Some(url) = &cli.api_url {
        config.api_base_url = url.clone();
    }
    config.validate()?;
    Ok(config)
}

fn init_logging(config: &ConsoleConfig, verbose: bool) {
    let fallback = if verbose { "debug" } else { config.log_filter.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = execute(cli).await {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn execute(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    init_logging(&config, cli.verbose);
    tracing::debug!("Using catalog API at {}", config.base_url());

    let client = ApiClient::from_config(&config)?;
    let settings = Settings::from_config(&config);
    let mut stdout = std::io::stdout().lock();
    catalog_cli::run(cli.command, &client, &settings, &mut stdout).await
}
