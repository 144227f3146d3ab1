//! # Upload Zone Component
//!
//! Drop target for CSV files. Clicking opens the native picker; dropping
//! uses the first file only. While an upload runs the zone is replaced by
//! the progress panel.

use dioxus::prelude::*;

use crate::actions;
use crate::state::APP_STATE;

#[component]
pub fn UploadZone() -> Element {
    let state = APP_STATE.read();
    let view = state.console.upload.view();
    let drag_over = state.ui.drag_over;
    drop(state);

    if !view.show_drop_zone {
        return rsx! {
            div {
                class: "upload-progress",
                div {
                    class: "progress-track",
                    div {
                        class: "progress-fill",
                        style: "width: {view.fill_percent}%;",
                    }
                }
                h3 { class: "progress-title", "{view.title}" }
                p { class: "progress-details", "{view.details}" }
            }
        };
    }

    rsx! {
        div {
            class: if drag_over { "upload-zone drag-over" } else { "upload-zone" },
            onclick: move |_| {
                actions::detach(actions::pick_and_upload());
            },
            ondragover: move |e| {
                e.prevent_default();
                APP_STATE.write().ui.drag_over = true;
            },
            ondragleave: move |_| {
                APP_STATE.write().ui.drag_over = false;
            },
            ondrop: move |e| {
                e.prevent_default();
                APP_STATE.write().ui.drag_over = false;

                let files = e.files();
                let Some(file) = files.first().cloned() else {
                    return;
                };
                actions::detach(async move {
                    let file_name = file.name();
                    actions::upload_file(file_name, async move {
                        file.read_bytes()
                            .await
                            .map(|bytes| bytes.to_vec())
                            .map_err(actions::read_error)
                    })
                    .await;
                });
            },

            div { class: "upload-icon", "📁" }
            p { class: "upload-title", "Drop a CSV file here or click to browse" }
            p { class: "upload-hint", "Columns: sku, name, description, price, active" }
        }
    }
}
