//! # Webhook Panel

use catalog_console::WebhookRow;
use dioxus::prelude::*;

use crate::actions;
use crate::state::APP_STATE;

/// Webhook section of the console
#[component]
pub fn WebhookPanel() -> Element {
    let view = APP_STATE.read().console.webhooks.view();

    rsx! {
        section {
            class: "panel webhooks-panel",

            div {
                class: "panel-header",
                h2 { "Webhooks" }
                div { class: "flex-1" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| actions::open_create_webhook(),
                    "+ Add Webhook"
                }
            }

            div {
                class: "webhook-list",
                if let Some(message) = view.empty_message {
                    p { class: "loading", "{message}" }
                }
                for row in view.rows.iter() {
                    WebhookItem { key: "{row.id}", row: row.clone() }
                }
            }
        }
    }
}

#[component]
fn WebhookItem(row: WebhookRow) -> Element {
    let id = row.id;
    let badge = if row.enabled { "badge badge-active" } else { "badge badge-inactive" };

    rsx! {
        div {
            class: "webhook-item",
            div {
                class: "webhook-header",
                div {
                    class: "webhook-info",
                    div { class: "webhook-url", "{row.url}" }
                    div { class: "webhook-event", "{row.event_type}" }
                }
                span { class: "{badge}", "{row.status_label}" }
            }
            div {
                class: "webhook-actions",
                button {
                    class: "action-btn",
                    title: "Send a test event",
                    onclick: move |_| {
                        actions::detach(actions::test_webhook(id));
                    },
                    "🧪 Test"
                }
                button {
                    class: "action-btn",
                    title: "Edit",
                    onclick: move |_| {
                        actions::detach(actions::open_edit_webhook(id));
                    },
                    "✏️ Edit"
                }
                button {
                    class: "action-btn",
                    title: "Delete",
                    onclick: move |_| actions::request_delete_webhook(id),
                    "🗑️ Delete"
                }
            }
        }
    }
}
