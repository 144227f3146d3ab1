//! # Confirm Dialog Component
//!
//! Asks before a destructive action runs. Confirming hands the stored target
//! to [`actions::confirm`]; every other way out cancels.

use catalog_console::ConfirmTarget;
use dioxus::prelude::*;

use crate::actions;

#[derive(Props, Clone, PartialEq)]
pub struct ConfirmDialogProps {
    /// The action awaiting confirmation
    pub target: ConfirmTarget,
}

/// Confirmation dialog for delete operations
#[component]
pub fn ConfirmDialog(props: ConfirmDialogProps) -> Element {
    let title = props.target.title();
    let message = props.target.prompt();
    let danger = matches!(props.target, ConfirmTarget::DeleteAllProducts);

    rsx! {
        div {
            class: "dialog confirm-dialog",

            div {
                class: "dialog-header",
                h2 { class: "text-danger", "{title}" }
                button {
                    class: "dialog-close",
                    r#type: "button",
                    onclick: move |_| actions::cancel_confirm(),
                    "×"
                }
            }

            div {
                class: "dialog-body",
                p {
                    class: if danger { "confirm-message is-danger" } else { "confirm-message" },
                    "{message}"
                }

                div {
                    class: "dialog-actions",

                    button {
                        r#type: "button",
                        class: "btn btn-secondary",
                        onclick: move |_| actions::cancel_confirm(),
                        "Cancel"
                    }

                    button {
                        r#type: "button",
                        class: "btn btn-danger",
                        onclick: move |_| actions::detach(actions::confirm()),
                        "Confirm"
                    }
                }
            }
        }
    }
}
