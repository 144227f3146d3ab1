//! # Product Dialog Component
//!
//! Create/edit form for a single product. The form values live in the
//! product editor inside [`APP_STATE`], in-flight flag included, so the
//! dialog itself is stateless.

use dioxus::prelude::*;

use crate::actions;
use crate::components::inputs::{Checkbox, TextArea, TextInput};
use crate::state::APP_STATE;

/// Product creation and editing dialog
#[component]
pub fn ProductDialog() -> Element {
    let state = APP_STATE.read();
    let editor = &state.console.products.editor;
    let title = editor.title();
    let form = editor.form.clone();
    let saving = editor.is_saving();
    drop(state);

    rsx! {
        div {
            class: "dialog product-dialog",

            div {
                class: "dialog-header",
                h2 { "{title}" }
                button {
                    class: "dialog-close",
                    r#type: "button",
                    onclick: move |_| APP_STATE.write().console.products.editor.close(),
                    "×"
                }
            }

            form {
                class: "dialog-body",
                onsubmit: move |e| {
                    e.prevent_default();
                    let mut state = APP_STATE.write();
                    let editor = &mut state.console.products.editor;
                    if editor.is_saving() {
                        return;
                    }
                    editor.set_saving(true);
                    drop(state);
                    actions::detach(actions::submit_product());
                },

                TextInput {
                    value: form.sku.clone(),
                    label: "SKU",
                    required: true,
                    on_change: move |v: String| APP_STATE.write().console.products.editor.form.sku = v,
                }

                TextInput {
                    value: form.name.clone(),
                    label: "Name",
                    required: true,
                    on_change: move |v: String| APP_STATE.write().console.products.editor.form.name = v,
                }

                TextArea {
                    value: form.description.clone(),
                    label: "Description",
                    rows: 3,
                    on_change: move |v: String| APP_STATE.write().console.products.editor.form.description = v,
                }

                TextInput {
                    value: form.price.clone(),
                    label: "Price",
                    input_type: "number",
                    step: "0.01",
                    required: true,
                    on_change: move |v: String| APP_STATE.write().console.products.editor.form.price = v,
                }

                Checkbox {
                    checked: form.active,
                    label: "Active",
                    on_change: move |v: bool| APP_STATE.write().console.products.editor.form.active = v,
                }

                div {
                    class: "dialog-actions",

                    button {
                        r#type: "button",
                        class: "btn btn-secondary",
                        disabled: saving,
                        onclick: move |_| APP_STATE.write().console.products.editor.close(),
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
