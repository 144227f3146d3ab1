//! # Webhook Dialog Component

use catalog_core::EventType;
use dioxus::prelude::*;

use crate::actions;
use crate::components::inputs::{Checkbox, Select, SelectOption, TextInput};
use crate::state::APP_STATE;

/// Options for the event type select. An unknown type on an existing
/// subscription is listed too so editing does not silently change it.
fn event_type_options(current: &EventType) -> Vec<SelectOption> {
    let mut options: Vec<SelectOption> = EventType::ALL
        .iter()
        .map(|event| SelectOption::new(event.as_str(), event.display_name()))
        .collect();
    if let EventType::Other(name) = current {
        options.push(SelectOption::new(name.clone(), name.clone()));
    }
    options
}

/// Webhook creation and editing dialog
#[component]
pub fn WebhookDialog() -> Element {
    let state = APP_STATE.read();
    let editor = &state.console.webhooks.editor;
    let title = editor.title();
    let form = editor.form.clone();
    let saving = editor.is_saving();
    drop(state);

    let options = event_type_options(&form.event_type);

    rsx! {
        div {
            class: "dialog webhook-dialog",

            div {
                class: "dialog-header",
                h2 { "{title}" }
                button {
                    class: "dialog-close",
                    r#type: "button",
                    onclick: move |_| APP_STATE.write().console.webhooks.editor.close(),
                    "×"
                }
            }

            form {
                class: "dialog-body",
                onsubmit: move |e| {
                    e.prevent_default();
                    let mut state = APP_STATE.write();
                    let editor = &mut state.console.webhooks.editor;
                    if editor.is_saving() {
                        return;
                    }
                    editor.set_saving(true);
                    drop(state);
                    actions::detach(actions::submit_webhook());
                },

                TextInput {
                    value: form.url.clone(),
                    label: "URL",
                    input_type: "url",
                    placeholder: "https://example.com/webhook",
                    required: true,
                    on_change: move |v: String| APP_STATE.write().console.webhooks.editor.form.url = v,
                }

                Select {
                    value: form.event_type.as_str().to_string(),
                    options: options,
                    label: "Event Type",
                    on_change: move |v: String| {
                        APP_STATE.write().console.webhooks.editor.form.event_type = EventType::from(v);
                    },
                }

                Checkbox {
                    checked: form.enabled,
                    label: "Enabled",
                    on_change: move |v: bool| APP_STATE.write().console.webhooks.editor.form.enabled = v,
                }

                div {
                    class: "dialog-actions",

                    button {
                        r#type: "button",
                        class: "btn btn-secondary",
                        disabled: saving,
                        onclick: move |_| APP_STATE.write().console.webhooks.editor.close(),
                        "Cancel"
                    }

                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: saving,
                        if saving { "Saving..." } else { "Save" }
                    }
                }
            }
        }
    }
}
