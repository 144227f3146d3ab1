//! Command-line arguments

use catalog_console::ProductForm;
use catalog_console::WebhookForm;
use catalog_core::{EventType, ProductId, WebhookId};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "catalog",
    version,
    about = "Manage the product catalog and its webhooks from the terminal"
)]
pub struct Cli {
    /// Origin of the catalog REST API
    #[arg(long, global = true, env = "CATALOG_API_URL")]
    pub api_url: Option<String>,

    /// Path to a catalog-admin.toml config file
    #[arg(long, global = true, env = "CATALOG_ADMIN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log requests and responses to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List, edit and delete products
    #[command(subcommand)]
    Products(ProductCommand),

    /// Import products from a CSV file
    Import {
        /// The CSV file to upload
        file: PathBuf,

        /// Poll the import task until it finishes
        #[arg(long)]
        wait: bool,
    },

    /// Show the progress of a CSV import
    UploadStatus {
        /// Task id returned by `import`
        task_id: String,
    },

    /// Manage webhook subscriptions
    #[command(subcommand)]
    Webhooks(WebhookCommand),
}

#[derive(Subcommand, Debug)]
pub enum ProductCommand {
    /// List one page of products
    List {
        /// Match against SKU, name and description
        #[arg(long, default_value = "")]
        search: String,

        /// Only active (true) or inactive (false) products
        #[arg(long)]
        active: Option<bool>,

        /// One-based page number
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
        page: u64,

        /// Rows per page; defaults to the configured page size
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        page_size: Option<u64>,

        /// Print the raw page as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single product
    Get {
        id: ProductId,

        /// Print the raw record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a product
    Create(ProductFields),

    /// Replace every field of a product
    Update {
        id: ProductId,

        #[command(flatten)]
        fields: ProductFields,
    },

    /// Delete a product
    Delete {
        id: ProductId,

        /// Skip the confirmation refusal
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete every product in the catalog
    DeleteAll {
        /// Skip the confirmation refusal
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum WebhookCommand {
    /// List webhook subscriptions
    List {
        /// Print the raw list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Subscribe a URL to an event
    Create(WebhookFields),

    /// Replace every field of a webhook
    Update {
        id: WebhookId,

        #[command(flatten)]
        fields: WebhookFields,
    },

    /// Delete a webhook
    Delete {
        id: WebhookId,

        /// Skip the confirmation refusal
        #[arg(short, long)]
        yes: bool,
    },

    /// Ask the server to fire a test delivery
    Test { id: WebhookId },
}

/// Product fields shared by `create` and `update`
#[derive(Args, Debug, Clone)]
pub struct ProductFields {
    #[arg(long)]
    pub sku: String,

    #[arg(long)]
    pub name: String,

    /// Left out or blank means no description
    #[arg(long, default_value = "")]
    pub description: String,

    #[arg(long, allow_hyphen_values = true)]
    pub price: String,

    /// Store the product as inactive
    #[arg(long)]
    pub inactive: bool,
}

impl ProductFields {
    /// The same form the desktop editor fills in, so validation matches
    pub fn to_form(&self) -> ProductForm {
        ProductForm {
            sku: self.sku.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price.clone(),
            active: !self.inactive,
        }
    }
}

/// Webhook fields shared by `create` and `update`
#[derive(Args, Debug, Clone)]
pub struct WebhookFields {
    #[arg(long)]
    pub url: String,

    /// One of product_created, product_updated, product_deleted,
    /// products_bulk_deleted, upload_complete
    #[arg(long, value_parser = parse_event_type)]
    pub event: EventType,

    /// Store the webhook as disabled
    #[arg(long)]
    pub disabled: bool,
}

impl WebhookFields {
    pub fn to_form(&self) -> WebhookForm {
        WebhookForm {
            url: self.url.clone(),
            event_type: self.event.clone(),
            enabled: !self.disabled,
        }
    }
}

fn parse_event_type(value: &str) -> Result<EventType, String> {
    match EventType::from(value) {
        EventType::Other(name) => {
            let known: Vec<&str> = EventType::ALL.iter().map(EventType::as_str).collect();
            Err(format!("unknown event '{}' (expected one of: {})", name, known.join(", ")))
        }
        event => Ok(event),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("catalog").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_products_list_defaults() {
        let cli = parse(&["products", "list"]);
        match cli.command {
            Command::Products(ProductCommand::List {
                search,
                active,
                page,
                page_size,
                json,
            }) => {
                assert_eq!(search, "");
                assert_eq!(active, None);
                assert_eq!(page, 1);
                assert_eq!(page_size, None);
                assert!(!json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_products_list_filters() {
        let cli = parse(&["products", "list", "--search", "widget", "--active", "false", "--page", "3"]);
        match cli.command {
            Command::Products(ProductCommand::List { search, active, page, .. }) => {
                assert_eq!(search, "widget");
                assert_eq!(active, Some(false));
                assert_eq!(page, 3);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_page_zero_is_rejected() {
        let result = Cli::try_parse_from(["catalog", "products", "list", "--page", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_product_builds_form() {
        let cli = parse(&[
            "products", "create", "--sku", "A1", "--name", "Widget", "--price", "9.99", "--inactive",
        ]);
        match cli.command {
            Command::Products(ProductCommand::Create(fields)) => {
                let form = fields.to_form();
                assert_eq!(form.sku, "A1");
                assert_eq!(form.description, "");
                assert!(!form.active);
                let payload = form.to_payload().unwrap();
                assert_eq!(payload.price, 9.99);
                assert_eq!(payload.description, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_update_takes_id_and_fields() {
        let cli = parse(&[
            "products", "update", "7", "--sku", "B2", "--name", "Gadget", "--price", "-1",
        ]);
        match cli.command {
            Command::Products(ProductCommand::Update { id, fields }) => {
                assert_eq!(id, 7);
                assert_eq!(fields.price, "-1");
                assert!(fields.to_form().active);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_delete_requires_flag_for_yes() {
        let cli = parse(&["products", "delete", "4"]);
        assert!(matches!(
            cli.command,
            Command::Products(ProductCommand::Delete { id: 4, yes: false })
        ));

        let cli = parse(&["products", "delete-all", "-y"]);
        assert!(matches!(
            cli.command,
            Command::Products(ProductCommand::DeleteAll { yes: true })
        ));
    }

    #[test]
    fn test_webhook_event_parsing() {
        let cli = parse(&[
            "webhooks",
            "create",
            "--url",
            "https://hooks.test/x",
            "--event",
            "upload_complete",
            "--disabled",
        ]);
        match cli.command {
            Command::Webhooks(WebhookCommand::Create(fields)) => {
                let form = fields.to_form();
                assert_eq!(form.event_type, EventType::UploadComplete);
                assert!(!form.enabled);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_event_is_rejected() {
        let result = Cli::try_parse_from([
            "catalog", "webhooks", "create", "--url", "https://hooks.test/x", "--event", "order_paid",
        ]);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown event 'order_paid'"));
    }

    #[test]
    fn test_global_api_url() {
        let cli = parse(&["webhooks", "list", "--api-url", "http://catalog.test:9000"]);
        assert_eq!(cli.api_url.as_deref(), Some("http://catalog.test:9000"));
        assert!(matches!(cli.command, Command::Webhooks(WebhookCommand::List { json: false })));
    }

    #[test]
    fn test_import_and_status() {
        let cli = parse(&["import", "products.csv", "--wait"]);
        match cli.command {
            Command::Import { file, wait } => {
                assert_eq!(file, PathBuf::from("products.csv"));
                assert!(wait);
            }
            other => panic!("unexpected command: {:?}", other),
        }

        let cli = parse(&["upload-status", "0b6f"]);
        assert!(matches!(cli.command, Command::UploadStatus { task_id } if task_id == "0b6f"));
    }
}
