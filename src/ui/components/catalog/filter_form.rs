use dioxus::prelude::*;

use crate::table::Paginator;

/// Title and max-price filter inputs.
///
/// Every edit resets the pager to the first page so a stale out-of-range
/// page never displays against the re-filtered list.
#[component]
pub fn FilterForm(
    mut title_query: Signal<String>,
    mut max_price_input: Signal<String>,
    mut pager: Signal<Paginator>,
) -> Element {
    rsx! {
        div {
            class: "mb-6 flex gap-2",
            input {
                class: "flex-1 p-3 border border-gray-300 rounded-lg text-lg",
                placeholder: "Filter by title...",
                value: "{title_query}",
                oninput: move |event: FormEvent| {
                    title_query.set(event.value());
                    pager.write().reset();
                }
            }
            input {
                class: "w-48 p-3 border border-gray-300 rounded-lg text-lg",
                placeholder: "Max price",
                value: "{max_price_input}",
                oninput: move |event: FormEvent| {
                    max_price_input.set(event.value());
                    pager.write().reset();
                }
            }
        }
    }
}
