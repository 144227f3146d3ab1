//! # Catalog CLI
//!
//! Command-line interface for Catalog Admin.
//!
//! Drives the same catalog REST API as the desktop console, reusing its form
//! validation and confirmation prompts, so scripts and the GUI agree on what
//! a valid product or webhook is.
//!
//! ## Commands
//!
//! - `products` - list, show, create, update and delete products
//! - `import` - upload a CSV file, optionally waiting for the import
//! - `upload-status` - show the progress of an import task
//! - `webhooks` - list, create, update, delete and test webhooks
//!

pub mod args;
pub mod commands;
pub mod output;

pub use args::{Cli, Command, ProductCommand, ProductFields, WebhookCommand, WebhookFields};
pub use commands::{Settings, run};

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert_eq!(NAME, "catalog_cli");
    }
}
