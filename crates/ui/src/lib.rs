//! # Catalog UI
//!
//! Dioxus Desktop UI for Catalog Admin.
//!
//! ## Features
//!
//! - CSV import by drag-and-drop or native file picker
//! - Paged, searchable product table with create, edit and delete
//! - Bulk delete behind a confirmation
//! - Webhook subscriptions with test-fire
//!

// ============================================================================
// Modules
// ============================================================================

pub mod actions;
pub mod app;
pub mod components;
pub mod file_ops;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

pub use app::App;
pub use state::{APP_STATE, AppState, Dialog, UiState};

use catalog_client::ApiClient;
use catalog_core::{ConsoleConfig, ConsoleResult};

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Catalog Admin";

/// Application display title
pub const TITLE: &str = "Catalog Admin - Products & Webhooks";

/// CSS styles for the application
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the Catalog Admin desktop application.
///
/// Fails before opening a window if the HTTP client cannot be built.
///
/// ```rust,ignore
/// fn main() -> anyhow::Result<()> {
///     let config = catalog_core::ConsoleConfig::load()?;
///     catalog_ui::launch(config)?;
///     Ok(())
/// }
/// ```
pub fn launch(config: ConsoleConfig) -> ConsoleResult<()> {
    tracing::info!("Starting {} v{} against {}", NAME, VERSION, config.base_url());

    let client = ApiClient::from_config(&config)?;
    actions::install_client(client);
    state::set_config(config);

    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(TITLE)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 900.0))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(800.0, 600.0)),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .launch(App);

    Ok(())
}

/// Get the embedded CSS styles
pub fn get_styles() -> &'static str {
    STYLES
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_title() {
        assert!(TITLE.contains(NAME));
    }

    #[test]
    fn test_styles_loaded() {
        assert!(STYLES.contains(".upload-zone"));
        assert!(STYLES.contains(".modal"));
        assert!(STYLES.contains(".toast-error"));
    }
}
