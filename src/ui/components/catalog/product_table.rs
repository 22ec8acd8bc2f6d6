use dioxus::prelude::*;

use crate::models::Product;
use crate::table::{product_columns, Paginator};

use super::product_row::ProductRow;

/// The product table: header row from the column schema, one row per
/// product in the current page window of the filtered list.
#[component]
pub fn ProductTable(rows: Vec<Product>, pager: Signal<Paginator>) -> Element {
    let columns = product_columns();
    let window = pager.read().current_page_rows(&rows).to_vec();

    rsx! {
        div {
            class: "overflow-x-auto",
            table {
                class: "w-full border-collapse bg-white rounded-lg shadow-lg",
                thead {
                    tr {
                        class: "bg-gray-50",
                        for column in columns.iter() {
                            th {
                                class: "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider",
                                "{column.label}"
                            }
                        }
                    }
                }
                tbody {
                    class: "divide-y divide-gray-200",
                    if window.is_empty() {
                        tr {
                            td {
                                class: "px-4 py-6 text-center text-sm text-gray-500",
                                colspan: columns.len() as i64,
                                "No products match the current filters"
                            }
                        }
                    }
                    for product in window.iter() {
                        ProductRow {
                            key: "{product.id}",
                            product: product.clone()
                        }
                    }
                }
            }
        }
    }
}
