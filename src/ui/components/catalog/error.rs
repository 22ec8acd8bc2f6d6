use dioxus::prelude::*;

use crate::catalog_context::CatalogContext;

/// Error panel shown after the fetch has settled into failure.
#[component]
pub fn CatalogErrorPanel(message: String) -> Element {
    let catalog_ctx = use_context::<CatalogContext>();

    rsx! {
        div {
            class: "bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4",
            p { "Failed to load products: {message}" }
            button {
                class: "mt-2 px-4 py-2 bg-red-600 text-white rounded hover:bg-red-700",
                onclick: {
                    let mut catalog_ctx = catalog_ctx.clone();
                    move |_| {
                        catalog_ctx.retry();
                    }
                },
                "Retry"
            }
        }
    }
}
