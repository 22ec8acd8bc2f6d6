use dioxus::prelude::*;

use crate::table::Paginator;

/// Previous/Next pager controls with a "page X of Y" readout.
/// Both buttons are disabled at their boundary; clicks there are no-ops.
#[component]
pub fn Pager(mut pager: Signal<Paginator>, len: usize) -> Element {
    let page_count = pager.read().page_count(len);
    let page_display = pager.read().page_index() + 1;
    let can_previous = pager.read().can_go_previous();
    let can_next = pager.read().can_go_next(len);

    rsx! {
        div {
            class: "flex items-center justify-between mt-4",
            button {
                class: "px-4 py-2 bg-blue-600 text-white rounded disabled:bg-gray-300 disabled:cursor-not-allowed",
                disabled: !can_previous,
                onclick: move |_| {
                    pager.write().go_to_previous();
                },
                "Previous"
            }
            span {
                class: "text-sm text-gray-600",
                "Page {page_display} of {page_count}"
            }
            button {
                class: "px-4 py-2 bg-blue-600 text-white rounded disabled:bg-gray-300 disabled:cursor-not-allowed",
                disabled: !can_next,
                onclick: move |_| {
                    pager.write().go_to_next(len);
                },
                "Next"
            }
        }
    }
}
