//! # Product Panel
//!
//! Filters, the product table and the paging bar. Everything rendered comes
//! from [`catalog_console::ProductListView`].

use catalog_console::{ActiveFilter, ProductRow};
use dioxus::prelude::*;

use crate::actions;
use crate::components::inputs::{Select, SelectOption, TextInput};
use crate::state::APP_STATE;

/// Product section of the console
#[component]
pub fn ProductPanel() -> Element {
    let state = APP_STATE.read();
    let view = state.console.products.view();
    let search = state.console.products.search_input().to_string();
    let active_filter = state.console.products.filters().active;
    drop(state);

    let filter_options: Vec<SelectOption> = ActiveFilter::ALL
        .iter()
        .map(|f| SelectOption::new(f.value(), f.label()))
        .collect();

    rsx! {
        section {
            class: "panel products-panel",

            div {
                class: "panel-header",
                h2 { "Products" }
                span { class: "panel-count", "{view.total} total" }
                div { class: "flex-1" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| actions::open_create_product(),
                    "+ Add Product"
                }
                button {
                    class: "btn btn-danger",
                    onclick: move |_| actions::request_delete_all_products(),
                    "Delete All"
                }
            }

            div {
                class: "filters",
                TextInput {
                    value: search,
                    input_type: "search",
                    placeholder: "Search by SKU, name or description...",
                    class: "search-input",
                    on_change: move |text: String| {
                        actions::detach(actions::search_changed(text));
                    },
                }
                Select {
                    value: active_filter.value().to_string(),
                    options: filter_options,
                    on_change: move |value: String| {
                        actions::detach(actions::active_filter_changed(value));
                    },
                }
            }

            table {
                class: "product-table",
                thead {
                    tr {
                        th { "SKU" }
                        th { "Name" }
                        th { "Description" }
                        th { "Price" }
                        th { "Status" }
                        th { "Actions" }
                    }
                }
                tbody {
                    if let Some(message) = view.empty_message {
                        tr {
                            td { class: "loading", colspan: "6", "{message}" }
                        }
                    }
                    for row in view.rows.iter() {
                        ProductRowView { key: "{row.id}", row: row.clone() }
                    }
                }
            }

            div {
                class: "pagination",
                button {
                    class: "btn btn-secondary",
                    disabled: !view.previous_enabled,
                    onclick: move |_| {
                        actions::detach(actions::previous_page());
                    },
                    "← Previous"
                }
                span { class: "page-info", "{view.page_label}" }
                button {
                    class: "btn btn-secondary",
                    disabled: !view.next_enabled,
                    onclick: move |_| {
                        actions::detach(actions::next_page());
                    },
                    "Next →"
                }
            }
        }
    }
}

#[component]
fn ProductRowView(row: ProductRow) -> Element {
    let id = row.id;
    let badge = if row.active { "badge badge-active" } else { "badge badge-inactive" };

    rsx! {
        tr {
            td { class: "mono", "{row.sku}" }
            td { "{row.name}" }
            td { class: "muted", "{row.description}" }
            td { "{row.price}" }
            td { span { class: "{badge}", "{row.status_label}" } }
            td {
                button {
                    class: "action-btn",
                    title: "Edit",
                    onclick: move |_| {
                        actions::detach(actions::open_edit_product(id));
                    },
                    "✏️"
                }
                button {
                    class: "action-btn",
                    title: "Delete",
                    onclick: move |_| actions::request_delete_product(id),
                    "🗑️"
                }
            }
        }
    }
}
