use dioxus::prelude::*;

/// Loading panel shown while the catalog fetch is pending.
#[component]
pub fn CatalogLoading() -> Element {
    rsx! {
        div {
            class: "flex justify-center items-center py-12",
            div {
                class: "animate-spin rounded-full h-12 w-12 border-b-2 border-blue-500"
            }
            p {
                class: "ml-4 text-gray-600",
                "Loading products..."
            }
        }
    }
}
