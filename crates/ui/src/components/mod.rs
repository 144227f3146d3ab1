//! # UI Components
//!
//! Reusable Dioxus components for the Catalog Admin console.
//!
//! ```text
//! App
//! ├── UploadZone (drop zone / progress panel)
//! ├── ProductPanel (filters, table, paging bar)
//! │   └── ProductRowView (multiple)
//! ├── WebhookPanel
//! │   └── WebhookItem (multiple)
//! ├── NotificationStack
//! └── DialogOverlay
//!     ├── ProductDialog
//!     ├── WebhookDialog
//!     └── ConfirmDialog
//! ```

pub mod dialogs;
pub mod inputs;
pub mod notifications;
pub mod product_table;
pub mod upload_zone;
pub mod webhook_list;

pub use dialogs::{ConfirmDialog, ProductDialog, WebhookDialog};
pub use inputs::{Checkbox, Select, SelectOption, TextArea, TextInput};
pub use notifications::NotificationStack;
pub use product_table::ProductPanel;
pub use upload_zone::UploadZone;
pub use webhook_list::WebhookPanel;
