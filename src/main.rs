//! Catalog Admin
//!
//! Desktop console for a product catalog and its webhook subscriptions.
//!
//! This is the main entry point for the Dioxus Desktop application.

use catalog_core::ConsoleConfig;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() {
    let config = match ConsoleConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter.as_str()));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .pretty()
        .init();

    // Print startup banner
    println!();
    println!("╔═══════════════════════════════════════════════════════════╗");
    println!("║                                                           ║");
    println!("║   📦 Catalog Admin v{:<38}║", catalog_ui::VERSION);
    println!("║   Products, CSV imports and webhooks                      ║");
    println!("║                                                           ║");
    println!("╚═══════════════════════════════════════════════════════════╝");
    println!();

    if let Err(e) = catalog_ui::launch(config) {
        tracing::error!("Failed to start the console: {}", e);
        std::process::exit(1);
    }
}
