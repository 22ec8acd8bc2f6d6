use dioxus::prelude::*;

use crate::models::Product;
use crate::table::{format_currency, product_columns, CellValue};

/// One table row, rendered by iterating the column schema.
#[component]
pub fn ProductRow(product: Product) -> Element {
    rsx! {
        tr {
            class: "hover:bg-gray-50",
            for column in product_columns().iter() {
                match (column.cell)(&product) {
                    CellValue::Text(text) => rsx! {
                        td {
                            class: "px-4 py-3 text-sm text-gray-900",
                            "{text}"
                        }
                    },
                    CellValue::Currency(price) => rsx! {
                        td {
                            class: "px-4 py-3 text-sm font-medium text-gray-900",
                            {format_currency(price)}
                        }
                    },
                    CellValue::Image(url) => rsx! {
                        td {
                            class: "px-4 py-3",
                            if url.is_empty() {
                                div {
                                    class: "w-12 h-12 bg-gray-200 rounded flex items-center justify-center",
                                    "No Image"
                                }
                            } else {
                                img {
                                    class: "w-12 h-12 object-cover rounded",
                                    src: "{url}",
                                    alt: "{product.title}"
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}
