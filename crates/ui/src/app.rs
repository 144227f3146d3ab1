//! Main Application Component for Catalog Admin
//!
//! Root layout: header, upload zone, the product and webhook panels, the
//! toast stack and the modal overlay.

use dioxus::prelude::*;

use crate::actions;
use crate::components::{
    ConfirmDialog, NotificationStack, ProductDialog, ProductPanel, UploadZone, WebhookDialog,
    WebhookPanel,
};
use crate::state::{APP_STATE, Dialog};

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    // Initial load of both lists
    use_future(|| async {
        tracing::info!("Catalog Admin UI initialized");
        actions::refresh_all().await;
    });

    rsx! {
        div {
            class: "app-container",

            Header {}

            main {
                class: "app-main",
                UploadZone {}
                ProductPanel {}
                WebhookPanel {}
            }

            NotificationStack {}

            DialogOverlay {}
        }
    }
}

// ============================================================================
// Header Component
// ============================================================================

#[component]
fn Header() -> Element {
    let name = crate::NAME;
    let base_url = crate::state::config().base_url().to_string();

    rsx! {
        header {
            class: "app-header",
            span { class: "app-logo", "📦" }
            h1 { "{name}" }
            div { class: "flex-1" }
            span { class: "api-origin", title: "API origin", "{base_url}" }
            button {
                class: "btn btn-secondary",
                title: "Reload products and webhooks",
                onclick: move |_| {
                    actions::detach(actions::refresh_all());
                },
                "⟳ Refresh"
            }
        }
    }
}

// ============================================================================
// Dialog Overlay Component
// ============================================================================

/// Modal dialog overlay
#[component]
fn DialogOverlay() -> Element {
    let dialog = APP_STATE.read().active_dialog();

    let Some(dialog) = dialog else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "modal active",

            // Backdrop
            div {
                class: "modal-backdrop",
                onclick: move |_| {
                    APP_STATE.write().close_dialog();
                }
            }

            // Dialog content
            div {
                class: "modal-content",
                onclick: move |e| e.stop_propagation(),

                match dialog {
                    Dialog::Product => rsx! { ProductDialog {} },
                    Dialog::Webhook => rsx! { WebhookDialog {} },
                    Dialog::Confirm(target) => rsx! { ConfirmDialog { target: target } },
                }
            }
        }
    }
}
