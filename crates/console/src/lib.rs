//! # Catalog Console
//!
//! Controllers and view-models for the Catalog Admin console, independent of
//! any rendering framework.
//!
//! Each controller owns its state explicitly (pagination, filters, the
//! editing id, the pending confirmation) and exposes two flavours of every
//! networked operation:
//!
//! - a synchronous `begin_*`/`finish_*` pair, for hosts that must not hold a
//!   borrow across an await (the Dioxus UI keeps controllers in a signal)
//! - an `async` convenience method that runs the whole round trip against a
//!   [`CatalogApi`](catalog_core::CatalogApi)
//!
//! Sequences that span several requests (confirm then delete then reload,
//! upload then dwell then reload) live in [`session`], written against the
//! begin/finish pairs.
//!
//! ## Modules
//!
//! - **products**: product list controller with paging and filters
//! - **product_editor**: the create/edit product modal
//! - **webhooks**: webhook list controller, including test-fire
//! - **webhook_editor**: the create/edit webhook modal
//! - **confirm**: the single-slot confirmation gate
//! - **notify**: the notification queue
//! - **upload**: the CSV upload flow
//! - **session**: multi-step operations over a shared [`ConsoleState`]
//! - **pagination**, **debounce**, **sequence**: small building blocks
//!

pub mod confirm;
pub mod debounce;
pub mod notify;
pub mod pagination;
pub mod product_editor;
pub mod products;
pub mod sequence;
pub mod session;
pub mod state;
pub mod upload;
pub mod webhook_editor;
pub mod webhooks;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-exports
pub use confirm::{ConfirmGate, ConfirmTarget, PendingConfirmation};
pub use debounce::Debouncer;
pub use notify::{Notification, NotificationQueue, Severity};
pub use pagination::Pagination;
pub use product_editor::{ProductEditor, ProductForm, ProductSubmission};
pub use products::{ActiveFilter, LoadOutcome, ProductListController, ProductListView, ProductRow};
pub use sequence::{RequestSequence, RequestToken};
pub use session::{ConsoleHost, Session};
pub use state::ConsoleState;
pub use upload::{UploadFlow, UploadOutcome, UploadPhase, UploadView};
pub use webhook_editor::{WebhookEditor, WebhookForm, WebhookSubmission};
pub use webhooks::{WebhookListController, WebhookListView, WebhookRow};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
