//! # Dialog Components
//!
//! Modal dialogs for the Catalog Admin console.
//!
//! - **ProductDialog**: Create and edit products
//! - **WebhookDialog**: Create and edit webhook subscriptions
//! - **ConfirmDialog**: Confirmation for destructive actions
//!
//! Dialogs are rendered by `DialogOverlay` in the app shell, which owns the
//! backdrop and closes the top-most modal when it is clicked.

pub mod confirm_dialog;
pub mod product_dialog;
pub mod webhook_dialog;

pub use confirm_dialog::ConfirmDialog;
pub use product_dialog::ProductDialog;
pub use webhook_dialog::WebhookDialog;
